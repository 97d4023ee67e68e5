use std::time::Duration;
use ethabi::num_bigint::BigUint;
use ethabi::{strip_hex, Address};
use tokio::time::Instant;
use crate::Error;
use crate::eth::{Transport, TxSigner};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GasPricing {
    Legacy { gas_price: BigUint },
    Eip1559 { tip: BigUint, fee_cap: BigUint },
}

/// Everything a signer needs; `to` is absent for contract creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub chain_id: u64,
    pub nonce: u64,
    pub from: Address,
    pub to: Option<Address>,
    pub value: BigUint,
    pub data: Vec<u8>,
    pub gas_limit: u64,
    pub pricing: GasPricing,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TxStatus {
    Success,
    Failure,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Log {
    pub address: Address,
    pub topics: Vec<[u8; 32]>,
    pub data: Vec<u8>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TxReceipt {
    pub transaction_hash: String,
    pub status: TxStatus,
    pub contract_address: Option<Address>,
    pub logs: Vec<Log>,
}

impl TxReceipt {
    pub fn is_success(&self) -> bool {
        self.status == TxStatus::Success
    }
}

/// What `send` does after the node accepted the transaction.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Confirmation {
    /// Return the hash right away; no receipt.
    Submit,
    /// Poll for the receipt until it shows up or the duration elapses.
    Wait(Duration),
}

#[derive(Clone, Debug)]
pub struct SendOptions {
    pub gas_limit: u64,
    pub poll_interval: Duration,
    /// When set, transactions are priced with a tip instead of a legacy gas price.
    pub priority_fee: Option<BigUint>,
}

impl Default for SendOptions {
    fn default() -> Self {
        Self {
            gas_limit: 500_000,
            poll_interval: Duration::from_secs(2),
            priority_fee: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submitted {
    pub hash: String,
    pub receipt: Option<TxReceipt>,
}

impl TryFrom<rpc::network::TransactionReceipt> for TxReceipt {
    type Error = Error;

    fn try_from(receipt: rpc::network::TransactionReceipt) -> Result<Self, Self::Error> {
        let status = match receipt.status.as_deref().map(strip_hex) {
            Some("0") => TxStatus::Failure,
            Some("1") | None => TxStatus::Success,
            Some(other) => return Err(Error::InvalidData(format!("receipt status 0x{}", other))),
        };
        let contract_address = receipt.contract_address
            .as_deref()
            .map(|address| address.parse::<Address>())
            .transpose()?;
        let logs = receipt.logs.into_iter()
            .map(Log::try_from)
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            transaction_hash: receipt.transaction_hash,
            status,
            contract_address,
            logs,
        })
    }
}

impl TryFrom<rpc::network::Log> for Log {
    type Error = Error;

    fn try_from(log: rpc::network::Log) -> Result<Self, Self::Error> {
        let topics = log.topics.iter()
            .map(|topic| -> Result<[u8; 32], Error> {
                let mut word = [0u8; 32];
                hex::decode_to_slice(strip_hex(topic), &mut word)?;
                Ok(word)
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            address: log.address.parse()?,
            topics,
            data: hex::decode(strip_hex(&log.data))?,
        })
    }
}

/// Builds, signs and submits one transaction, then confirms it as asked.
///
/// The credential check runs before any transport access.
pub(crate) async fn submit(
    transport: &dyn Transport,
    signer: &dyn TxSigner,
    from: &Address,
    to: Option<&Address>,
    value: Option<BigUint>,
    data: Vec<u8>,
    confirmation: Confirmation,
    options: &SendOptions,
) -> Result<Submitted, Error> {
    if !signer.can_sign(from) {
        return Err(Error::CredentialMissing(*from));
    }

    let chain_id = transport.chain_id().await?;
    let nonce = transport.pending_nonce(from).await?;
    let gas_price = transport.gas_price().await?;
    let pricing = match &options.priority_fee {
        Some(tip) => GasPricing::Eip1559 {
            tip: tip.clone(),
            fee_cap: gas_price + tip,
        },
        None => GasPricing::Legacy { gas_price },
    };

    let tx = UnsignedTransaction {
        chain_id,
        nonce,
        from: *from,
        to: to.copied(),
        value: value.unwrap_or_default(),
        data,
        gas_limit: options.gas_limit,
        pricing,
    };
    let raw = signer.sign(&tx)?;
    let hash = transport.submit_raw(&raw).await?;
    log::info!("[Sent] Tx hash: {} (from {}, nonce {})", hash, from, nonce);

    let timeout = match confirmation {
        Confirmation::Submit => return Ok(Submitted { hash, receipt: None }),
        Confirmation::Wait(timeout) => timeout,
    };

    let receipt = wait_for_receipt(transport, &hash, timeout, options.poll_interval).await?;
    if !receipt.is_success() {
        log::warn!("Transaction {} reverted", hash);
        return Err(Error::Reverted { hash, receipt: Box::new(receipt) });
    }
    log::info!("Transaction {} confirmed with {} logs", hash, receipt.logs.len());
    Ok(Submitted { hash, receipt: Some(receipt) })
}

/// Polls at `interval` until a receipt appears; always polls at least once.
///
/// A failed poll does not end the wait. If the last poll before the deadline
/// failed, its error comes back as `Error::Pending` with the hash.
pub(crate) async fn wait_for_receipt(
    transport: &dyn Transport,
    hash: &str,
    timeout: Duration,
    interval: Duration,
) -> Result<TxReceipt, Error> {
    let started = Instant::now();
    loop {
        let failure = match transport.receipt(hash).await {
            Ok(Some(receipt)) => return Ok(receipt),
            Ok(None) => None,
            Err(error) => {
                log::warn!("Receipt lookup for {} failed: {}", hash, error);
                Some(error)
            }
        };

        let waited = started.elapsed();
        if waited >= timeout {
            log::warn!("Transaction {} still pending after {:?}", hash, waited);
            return Err(match failure {
                Some(source) => Error::Pending { hash: hash.to_string(), source: Box::new(source) },
                None => Error::Timeout { hash: hash.to_string(), waited },
            });
        }
        log::debug!("Waiting for receipt of {}", hash);
        tokio::time::sleep(interval.min(timeout - waited)).await;
    }
}
