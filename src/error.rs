use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub(crate) enum SenderError {
    #[error("Could not open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not read from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not set up AWS session: {0}")]
    Session(String),
    #[error("Could not send to stream: {0}")]
    Send(#[source] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(test)]
mod tests {
    use super::SenderError;
    use std::io::{Error, ErrorKind};
    use std::path::PathBuf;

    #[test]
    fn when_open_fails_message_should_name_file_and_cause() {
        let err = SenderError::Open {
            path: PathBuf::from("missing.txt"),
            source: Error::new(ErrorKind::NotFound, "No such file or directory"),
        };

        assert_eq!(
            err.to_string(),
            "Could not open missing.txt: No such file or directory"
        );
    }

    #[test]
    fn when_send_fails_message_should_include_cause() {
        let err = SenderError::Send("ResourceNotFoundException: stream not found".into());

        assert_eq!(
            err.to_string(),
            "Could not send to stream: ResourceNotFoundException: stream not found"
        );
    }
}
