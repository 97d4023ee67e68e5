use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("JsonRpc error: {0}")]
    JsonRpcError(serde_json::Value),

    #[error("Http error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Hex decode error: {0}")]
    HexDecodeError(String),
}
