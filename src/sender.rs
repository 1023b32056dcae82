use crate::error::SenderError;
use crate::record::{OutboundRecord, PublishReceipt};
use crate::record_publisher::RecordPublisher;
use std::fs::File;
use std::future::Future;
use std::io::Read;
use std::path::Path;

/// Reads the whole file. The handle is closed before this returns.
pub(crate) fn read_payload(path: &Path) -> Result<Vec<u8>, SenderError> {
    tracing::info!("Reading from {}...", path.display());

    let mut file = File::open(path).map_err(|source| SenderError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut payload = Vec::new();
    file.read_to_end(&mut payload)
        .map_err(|source| SenderError::Read {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(payload)
}

/// Read, connect, send. Each step short-circuits on failure and nothing is
/// retried.
pub(crate) async fn send_file<P, C, F>(
    path: &Path,
    stream_name: &str,
    connect: C,
) -> Result<PublishReceipt, SenderError>
where
    P: RecordPublisher,
    C: FnOnce() -> F,
    F: Future<Output = Result<P, SenderError>>,
{
    let payload = read_payload(path)?;
    let publisher = connect().await?;
    let record = OutboundRecord::new(payload, stream_name);

    tracing::info!("Sending to {}", stream_name);
    let receipt = publisher
        .put_record(record)
        .await
        .map_err(SenderError::Send)?;

    tracing::info!(
        shard_id = %receipt.shard_id,
        sequence_number = %receipt.sequence_number,
        "Successfully sent"
    );
    Ok(receipt)
}
