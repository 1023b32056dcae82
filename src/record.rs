/// Every record goes to the same partition key, so a stream only ever sees
/// one shard's worth of traffic from this tool.
pub(crate) const PARTITION_KEY: &str = "1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutboundRecord {
    pub payload: Vec<u8>,
    pub partition_key: String,
    pub stream_name: String,
}

impl OutboundRecord {
    pub fn new(payload: Vec<u8>, stream_name: &str) -> Self {
        Self {
            payload,
            partition_key: PARTITION_KEY.to_string(),
            stream_name: stream_name.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PublishReceipt {
    pub shard_id: String,
    pub sequence_number: String,
}
