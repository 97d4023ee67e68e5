use crate::{JsonRpc, Error};

/// Sends one request and waits for its response.
#[async_trait]
pub trait OneshotChannel: Send + Sync {
    type Output;
    async fn fire(&self, jsonrpc: &JsonRpc) -> Result<Self::Output, Error>;
}
