use crate::error::SenderError;
use crate::record::{OutboundRecord, PublishReceipt};
use aws_config::{BehaviorVersion, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_sdk_kinesis::config::retry::RetryConfig;
use aws_sdk_kinesis::error::DisplayErrorContext;
use aws_sdk_kinesis::primitives::Blob;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub(crate) trait RecordPublisher {
    async fn put_record(
        &self,
        record: OutboundRecord,
    ) -> Result<PublishReceipt, Box<dyn std::error::Error + Send + Sync>>;
}

pub(crate) struct KinesisRecordPublisher {
    pub kinesis_client: aws_sdk_kinesis::Client,
}

impl KinesisRecordPublisher {
    pub fn new(kinesis_client: aws_sdk_kinesis::Client) -> Self {
        Self { kinesis_client }
    }

    /// Resolves region and credentials from the default provider chain and
    /// builds a client that makes a single attempt per call.
    pub async fn connect() -> Result<Self, SenderError> {
        let aws_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let Some(region) = aws_config.region() else {
            return Err(SenderError::Session(
                "no region could be resolved".to_string(),
            ));
        };
        tracing::debug!("Using region {}", region);

        let credentials_provider = aws_config.credentials_provider().ok_or_else(|| {
            SenderError::Session("no credentials provider configured".to_string())
        })?;
        credentials_provider
            .provide_credentials()
            .await
            .map_err(|e| SenderError::Session(DisplayErrorContext(e).to_string()))?;

        let kinesis_client = aws_sdk_kinesis::Client::from_conf(kinesis_config(&aws_config));
        Ok(Self::new(kinesis_client))
    }
}

/// Kinesis client settings derived from the shared config, with retries off.
pub(crate) fn kinesis_config(aws_config: &SdkConfig) -> aws_sdk_kinesis::Config {
    aws_sdk_kinesis::config::Builder::from(aws_config)
        .retry_config(RetryConfig::disabled())
        .build()
}

impl RecordPublisher for KinesisRecordPublisher {
    async fn put_record(
        &self,
        record: OutboundRecord,
    ) -> Result<PublishReceipt, Box<dyn std::error::Error + Send + Sync>> {
        let output = self
            .kinesis_client
            .put_record()
            .stream_name(record.stream_name)
            .partition_key(record.partition_key)
            .data(Blob::new(record.payload))
            .send()
            .await
            .map_err(|e| DisplayErrorContext(e).to_string())?;

        Ok(PublishReceipt {
            shard_id: output.shard_id().to_string(),
            sequence_number: output.sequence_number().to_string(),
        })
    }
}
