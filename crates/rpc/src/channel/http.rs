use crate::channel::OneshotChannel;
use crate::jsonrpc::{JsonRpc, Response};
use crate::Error;

pub struct HttpChannel {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpChannel {
    pub fn new<E>(endpoint: E) -> Self
    where
        E: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl OneshotChannel for HttpChannel {
    type Output = Response;
    async fn fire(&self, json: &JsonRpc) -> Result<Self::Output, Error> {
        log::trace!("POST {} {}", self.endpoint, json.method);
        let response: Response = self.http.post(&self.endpoint)
            .json(json).send().await?
            .error_for_status()?
            .json().await?;

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_endpoint() {
        let http = HttpChannel::new("http://localhost:8545");
        assert_eq!(http.endpoint(), "http://localhost:8545");
    }

    #[tokio::test]
    async fn reports_unreachable_endpoint() {
        let http = HttpChannel::new("http://127.0.0.1:1");
        let jsonrpc = JsonRpc::format(1_u64, "eth_blockNumber", json!(null));

        let result = http.fire(&jsonrpc).await;
        assert!(matches!(result, Err(Error::HttpError(_))));
    }
}
