//! Test doubles for the transport and keystore seams.

use std::sync::atomic::{AtomicUsize, Ordering};
use ethabi::num_bigint::BigUint;
use ethabi::Address;
use parking_lot::Mutex;
use rpc::jsonrpc::Tag;
use crate::Error;
use crate::eth::{GasPricing, Keystore, KeystoreSigner, Log, Transport, TxReceipt, TxStatus, UnsignedTransaction};

pub const SENDER: Address = Address::new([0xaa; 20]);
pub const CONTRACT: Address = Address::new([0xce; 20]);
pub const TX_HASH: &str = "0x9a0a1b3c5d7e9f00112233445566778899aabbccddeeff001122334455667788";
pub const CHAIN_ID: u64 = 250;
pub const NONCE: u64 = 7;
pub const GAS_PRICE: u64 = 1_000_000_000;

/// Counts every request and answers from canned state.
pub struct MockTransport {
    pub submissions: AtomicUsize,
    pub receipt_polls: AtomicUsize,
    pub calls: AtomicUsize,
    queries: AtomicUsize,
    call_result: Vec<u8>,
    receipt: Option<(usize, TxReceipt)>,
    failing_polls: usize,
    reject_submissions: bool,
    last_call: Mutex<Option<(Option<Address>, Address, Vec<u8>, Tag)>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            submissions: AtomicUsize::new(0),
            receipt_polls: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
            queries: AtomicUsize::new(0),
            call_result: Vec::new(),
            receipt: None,
            failing_polls: 0,
            reject_submissions: false,
            last_call: Mutex::new(None),
        }
    }

    /// `eth_call` answers with `bytes`.
    pub fn with_call_result(mut self, bytes: Vec<u8>) -> Self {
        self.call_result = bytes;
        self
    }

    /// The receipt shows up on the `polls`-th poll and stays there.
    pub fn with_receipt_after(mut self, polls: usize, receipt: TxReceipt) -> Self {
        self.receipt = Some((polls, receipt));
        self
    }

    /// The first `polls` receipt lookups fail.
    pub fn failing_polls(mut self, polls: usize) -> Self {
        self.failing_polls = polls;
        self
    }

    pub fn rejecting_submissions(mut self) -> Self {
        self.reject_submissions = true;
        self
    }

    pub fn requests(&self) -> usize {
        self.submissions.load(Ordering::SeqCst)
            + self.receipt_polls.load(Ordering::SeqCst)
            + self.calls.load(Ordering::SeqCst)
            + self.queries.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<(Option<Address>, Address, Vec<u8>, Tag)> {
        self.last_call.lock().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn chain_id(&self) -> Result<u64, Error> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(CHAIN_ID)
    }

    async fn pending_nonce(&self, _address: &Address) -> Result<u64, Error> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(NONCE)
    }

    async fn gas_price(&self) -> Result<BigUint, Error> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        Ok(GAS_PRICE.into())
    }

    async fn call(&self, from: Option<&Address>, to: &Address, data: &[u8], tag: Tag) -> Result<Vec<u8>, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_call.lock() = Some((from.copied(), *to, data.to_vec(), tag));
        Ok(self.call_result.clone())
    }

    async fn submit_raw(&self, _signed: &[u8]) -> Result<String, Error> {
        self.submissions.fetch_add(1, Ordering::SeqCst);
        if self.reject_submissions {
            return Err(rpc::Error::InvalidResponse("nonce too low".to_string()).into());
        }
        Ok(TX_HASH.to_string())
    }

    async fn receipt(&self, _hash: &str) -> Result<Option<TxReceipt>, Error> {
        let polls = self.receipt_polls.fetch_add(1, Ordering::SeqCst) + 1;
        if polls <= self.failing_polls {
            return Err(rpc::Error::InvalidResponse("header not found".to_string()).into());
        }
        Ok(match &self.receipt {
            Some((after, receipt)) if polls >= *after => Some(receipt.clone()),
            _ => None,
        })
    }
}

/// Signs by echoing the transaction back and remembers what it was given.
#[derive(Default)]
pub struct FakeKeystore {
    reject: bool,
    signed: Mutex<Vec<(UnsignedTransaction, String)>>,
}

impl FakeKeystore {
    pub fn rejecting() -> Self {
        Self { reject: true, ..Self::default() }
    }

    pub fn last_signed(&self) -> Option<UnsignedTransaction> {
        self.signed.lock().last().map(|(tx, _)| tx.clone())
    }

    pub fn last_passphrase(&self) -> Option<String> {
        self.signed.lock().last().map(|(_, passphrase)| passphrase.clone())
    }
}

impl Keystore for FakeKeystore {
    fn sign_with_passphrase(&self, tx: &UnsignedTransaction, passphrase: &str) -> Result<Vec<u8>, Error> {
        if self.reject {
            return Err(Error::Signing {
                address: tx.from,
                reason: "could not decrypt key".to_string(),
            });
        }
        self.signed.lock().push((tx.clone(), passphrase.to_string()));
        Ok([tx.nonce.to_be_bytes().as_slice(), tx.data.as_slice()].concat())
    }
}

pub fn signer_for(address: Address) -> KeystoreSigner<FakeKeystore> {
    let signer = KeystoreSigner::new(FakeKeystore::default());
    signer.set_passphrase_for(address, "passphrase");
    signer
}

pub fn receipt(status: TxStatus, logs: Vec<Log>) -> TxReceipt {
    TxReceipt {
        transaction_hash: TX_HASH.to_string(),
        status,
        contract_address: None,
        logs,
    }
}

pub fn unsigned_tx(from: Address) -> UnsignedTransaction {
    UnsignedTransaction {
        chain_id: CHAIN_ID,
        nonce: NONCE,
        from,
        to: Some(CONTRACT),
        value: BigUint::default(),
        data: vec![0x01],
        gas_limit: 21_000,
        pricing: GasPricing::Legacy { gas_price: GAS_PRICE.into() },
    }
}

/// A 32-byte word holding `value`.
pub fn word(value: u64) -> Vec<u8> {
    let mut word = vec![0u8; 24];
    word.extend_from_slice(&value.to_be_bytes());
    word
}
