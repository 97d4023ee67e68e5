use serde::{Serialize, Deserialize};
use crate::Error;
use crate::jsonrpc::Id;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Response {
    pub id: Id,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

impl Response {
    /// A `null` result is kept as `None`, the same as when deserialized.
    pub fn result<T>(id: Id, result: T) -> Self
    where
        T: Into<serde_json::Value>,
    {
        let result = Some(result.into()).filter(|result| !result.is_null());
        Self { id, result, error: None }
    }

    pub fn error<T>(id: Id, error: T) -> Self
    where
        T: Into<serde_json::Value>,
    {
        Self { id, result: None, error: Some(error.into()) }
    }

    /// A `null` result comes back as `Ok(None)`.
    pub fn as_result<T>(self) -> Result<Option<T>, Error>
    where
        for <'de> T: serde::Deserialize<'de>,
    {
        match (self.result, self.error) {
            (Some(result), None) => serde_json::from_value(result)
                .map(Some)
                .map_err(|err| Error::InvalidResponse(err.to_string())),
            (None, Some(error)) => Err(Error::JsonRpcError(error)),
            (None, None) => Ok(None),
            (Some(_), Some(error)) => Err(Error::InvalidResponse(
                format!("response carries both result and error: {}", error),
            )),
        }
    }
}
