use clap::Parser;
use std::ffi::{OsStr, OsString};
use std::path::Path;

const LONG_FLAGS: [&str; 2] = ["file", "stream"];

#[derive(Debug, Parser)]
#[command(version, about = "Send the contents of a file to a Kinesis stream as a single record")]
pub(crate) struct Cli {
    /// File whose contents will be sent
    #[arg(
        long,
        value_name = "PATH",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(OsString)
    )]
    pub file: OsString,

    /// Stream to send the data to
    #[arg(long, value_name = "NAME", allow_hyphen_values = true)]
    pub stream: String,
}

impl Cli {
    pub fn parse_from_env() -> Self {
        Self::parse_from(normalize_flags(std::env::args_os()))
    }

    pub fn file_path(&self) -> &Path {
        Path::new(&self.file)
    }
}

struct LongFlag {
    single_dash: bool,
    inline_value: bool,
}

fn long_flag(arg: &OsStr) -> Option<LongFlag> {
    let (single_dash, rest) = match arg.as_encoded_bytes() {
        [b'-', b'-', rest @ ..] => (false, rest),
        [b'-', rest @ ..] => (true, rest),
        _ => return None,
    };
    let (name, inline_value) = match rest.iter().position(|&b| b == b'=') {
        Some(eq) => (&rest[..eq], true),
        None => (rest, false),
    };

    LONG_FLAGS
        .iter()
        .any(|flag| flag.as_bytes() == name)
        .then_some(LongFlag {
            single_dash,
            inline_value,
        })
}

/// Rewrites `-file`/`-stream` (with or without `=value`) to their `--` form.
/// Flag values and everything after `--` pass through untouched.
pub(crate) fn normalize_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut args = args.into_iter();
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut expecting_value = false;

    while let Some(arg) = args.next() {
        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }
        if arg.as_os_str() == "--" {
            normalized.push(arg);
            normalized.extend(args.by_ref());
            break;
        }

        match long_flag(&arg) {
            Some(flag) => {
                expecting_value = !flag.inline_value;
                if flag.single_dash {
                    let mut rewritten = OsString::from("-");
                    rewritten.push(&arg);
                    normalized.push(rewritten);
                } else {
                    normalized.push(arg);
                }
            }
            None => normalized.push(arg),
        }
    }

    normalized
}
