use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use num_bigint::BigInt;
use num_traits::Num;
use serde_json::Value;
use crate::Error;
use crate::channel;
use crate::jsonrpc::{self, JsonRpc, Tag};
use crate::network::NetworkOptions;

pub struct EthereumNetwork {
    sequence: AtomicU64,
    oneshot: Arc<dyn channel::OneshotChannel<Output=jsonrpc::Response>>,
    options: NetworkOptions,
}

impl EthereumNetwork {
    pub fn new(options: NetworkOptions) -> Self {
        Self {
            sequence: AtomicU64::new(0),
            oneshot: options.oneshot.clone(),
            options,
        }
    }

    fn advance(&self) -> u64 {
        self.sequence.fetch_add(1, Ordering::Relaxed).wrapping_add(1)
    }

    pub async fn chain_id(&self) -> Result<BigInt, Error> {
        let jsonrpc = JsonRpc::format(self.advance(), "eth_chainId", json!(null));
        expect_bigint_response(jsonrpc, self.oneshot.as_ref(), self.options.radix).await
    }

    pub async fn gas_price(&self) -> Result<BigInt, Error> {
        let jsonrpc = JsonRpc::format(self.advance(), "eth_gasPrice", json!(null));
        expect_bigint_response(jsonrpc, self.oneshot.as_ref(), self.options.radix).await
    }

    pub async fn transaction_count(&self, address: &str, tag: Tag) -> Result<BigInt, Error> {
        let params = json!([address, tag]);
        let jsonrpc = JsonRpc::format(self.advance(), "eth_getTransactionCount", params);
        expect_bigint_response(jsonrpc, self.oneshot.as_ref(), self.options.radix).await
    }

    /// `Ok(None)` while the transaction is not yet mined.
    pub async fn transaction_receipt<D>(&self, hash: &str) -> Result<Option<D>, Error>
    where
        for <'de> D: serde::Deserialize<'de>
    {
        let params = json!([hash]);
        let jsonrpc = JsonRpc::format(self.advance(), "eth_getTransactionReceipt", params);
        let response = self.oneshot.fire(&jsonrpc).await?;
        response.as_result::<D>()
    }

    pub async fn call(&self, from: Option<&str>, to: &str, data: &str, tag: Tag) -> Result<Vec<u8>, Error> {
        let mut request = serde_json::Map::new();
        if let Some(from) = from {
            request.insert("from".to_string(), json!(from));
        }
        request.insert("to".to_string(), json!(to));
        request.insert("data".to_string(), json!(data));

        let params = json!([Value::Object(request), tag]);
        let jsonrpc = JsonRpc::format(self.advance(), "eth_call", params);
        log::debug!("eth_call #{} to {}", jsonrpc.id, to);
        expect_bytes_response(jsonrpc, self.oneshot.as_ref()).await
    }

    /// Submits a signed transaction and returns its hash.
    pub async fn send_raw_transaction(&self, raw: &[u8]) -> Result<String, Error> {
        let params = json!([format!("0x{}", hex::encode(raw))]);
        let jsonrpc = JsonRpc::format(self.advance(), "eth_sendRawTransaction", params);
        log::debug!("eth_sendRawTransaction #{} ({} bytes)", jsonrpc.id, raw.len());
        let response = self.oneshot.fire(&jsonrpc).await?;
        response.as_result::<String>()?
            .ok_or_else(|| Error::InvalidResponse("eth_sendRawTransaction returned no hash".to_string()))
    }
}

async fn expect_string_response(jsonrpc: JsonRpc, channel: &dyn channel::OneshotChannel<Output=jsonrpc::Response>) -> Result<String, Error> {
    let method = jsonrpc.method;
    let response = channel.fire(&jsonrpc).await?;
    response.as_result::<String>()?
        .ok_or_else(|| Error::InvalidResponse(format!("{} returned null", method)))
}

async fn expect_bigint_response(jsonrpc: JsonRpc, channel: &dyn channel::OneshotChannel<Output=jsonrpc::Response>, radix: u32) -> Result<BigInt, Error> {
    let result = expect_string_response(jsonrpc, channel).await?;
    bigint_from_hex(result, radix)
}

async fn expect_bytes_response(jsonrpc: JsonRpc, channel: &dyn channel::OneshotChannel<Output=jsonrpc::Response>) -> Result<Vec<u8>, Error> {
    let result = expect_string_response(jsonrpc, channel).await?;
    bytes_from_hex(result)
}

fn strip_hex(hex: &str) -> &str {
    match hex.starts_with("0x") {
        true => &hex[2..],
        false => hex,
    }
}

fn bigint_from_hex(hex: String, radix: u32) -> Result<BigInt, Error> {
    let stripped = strip_hex(hex.as_str());

    BigInt::from_str_radix(stripped, radix)
        .map_err(|_| Error::HexDecodeError(hex))
}

fn bytes_from_hex(hex: String) -> Result<Vec<u8>, Error> {
    let stripped = strip_hex(hex.as_str());

    hex::decode(stripped)
        .map_err(|_| Error::HexDecodeError(hex))
}
