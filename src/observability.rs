use crate::config::LogFormat;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. All diagnostics go to stderr.
pub(crate) fn init_logging(
    log_level: &str,
    log_format: LogFormat,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(log_level)?
        .add_directive("aws_smithy_runtime=warn".parse()?)
        .add_directive("aws_config=warn".parse()?)
        .add_directive("hyper=off".parse()?);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false);

    match log_format {
        LogFormat::Text => builder.try_init(),
        LogFormat::Json => builder.json().try_init(),
    }
}

#[cfg(test)]
mod tests {
    use super::init_logging;
    use crate::config::LogFormat;

    #[test]
    fn when_level_is_not_a_directive_should_fail() {
        let result = init_logging("kinesis_sender=loud", LogFormat::Text);

        assert!(result.is_err());
    }
}
