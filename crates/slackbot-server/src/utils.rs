//! Webhook utilities module.

use actix_web::{
    error::PayloadError,
    web::{Bytes, BytesMut},
};
use futures::{Stream, StreamExt};

use crate::{Result, ServerError};

/// Read a whole payload stream, failing once it grows over `limit` bytes.
pub(crate) async fn read_payload<S>(stream: &mut S, limit: usize) -> Result<Bytes>
where
    S: Stream<Item = std::result::Result<Bytes, PayloadError>> + Unpin,
{
    let mut body = BytesMut::new();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| ServerError::BodyReadError { source: e })?;
        if body.len() + chunk.len() > limit {
            return Err(ServerError::PayloadTooLarge { limit });
        }

        body.extend_from_slice(&chunk);
    }

    Ok(body.freeze())
}
