use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LogFormat {
    #[serde(alias = "Text", alias = "TEXT")]
    Text,
    #[serde(alias = "Json", alias = "JSON")]
    Json,
}

#[derive(Debug, Serialize, Deserialize)]
struct LoggingDefaults {
    log_level: String,
    log_format: LogFormat,
}

impl Default for LoggingDefaults {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
        }
    }
}

/// Logging settings, layered from defaults and the environment.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct Config {
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(LoggingDefaults::default()))
            .merge(Env::prefixed("KINESIS_SENDER_").only(&["log_level", "log_format"]))
            .extract()
    }
}
