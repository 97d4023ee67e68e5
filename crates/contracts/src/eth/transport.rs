use ethabi::num_bigint::BigUint;
use ethabi::num_traits::ToPrimitive;
use ethabi::Address;
use rpc::jsonrpc::Tag;
use rpc::network::EthereumNetwork;
use crate::Error;
use crate::eth::TxReceipt;

/// The node operations the binding layer relies on.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn chain_id(&self) -> Result<u64, Error>;

    /// Transaction count of `address`, including pending transactions.
    async fn pending_nonce(&self, address: &Address) -> Result<u64, Error>;

    async fn gas_price(&self) -> Result<BigUint, Error>;

    async fn call(&self, from: Option<&Address>, to: &Address, data: &[u8], tag: Tag) -> Result<Vec<u8>, Error>;

    /// Returns the transaction hash.
    async fn submit_raw(&self, signed: &[u8]) -> Result<String, Error>;

    /// `Ok(None)` while the transaction is not yet mined.
    async fn receipt(&self, hash: &str) -> Result<Option<TxReceipt>, Error>;
}

#[async_trait]
impl Transport for EthereumNetwork {
    async fn chain_id(&self) -> Result<u64, Error> {
        let chain_id = EthereumNetwork::chain_id(self).await?;
        chain_id.to_u64()
            .ok_or_else(|| Error::InvalidData(format!("chain id {}", chain_id)))
    }

    async fn pending_nonce(&self, address: &Address) -> Result<u64, Error> {
        let count = self.transaction_count(&address.to_string(), Tag::Pending).await?;
        count.to_u64()
            .ok_or_else(|| Error::InvalidData(format!("transaction count {}", count)))
    }

    async fn gas_price(&self) -> Result<BigUint, Error> {
        let gas_price = EthereumNetwork::gas_price(self).await?;
        gas_price.to_biguint()
            .ok_or_else(|| Error::InvalidData(format!("gas price {}", gas_price)))
    }

    async fn call(&self, from: Option<&Address>, to: &Address, data: &[u8], tag: Tag) -> Result<Vec<u8>, Error> {
        let from = from.map(|address| address.to_string());
        let data = format!("0x{}", hex::encode(data));
        let result = EthereumNetwork::call(self, from.as_deref(), &to.to_string(), &data, tag).await?;
        Ok(result)
    }

    async fn submit_raw(&self, signed: &[u8]) -> Result<String, Error> {
        Ok(self.send_raw_transaction(signed).await?)
    }

    async fn receipt(&self, hash: &str) -> Result<Option<TxReceipt>, Error> {
        let receipt = self.transaction_receipt::<rpc::network::TransactionReceipt>(hash).await?;
        receipt.map(TxReceipt::try_from).transpose()
    }
}
