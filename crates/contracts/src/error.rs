use std::time::Duration;
use ethabi::Address;
use thiserror::Error;
use crate::eth::TxReceipt;

#[derive(Debug, Error)]
pub enum Error {
    #[error("abi error: {0}")]
    AbiError(#[from] ethabi::Error),

    #[error("{method}: cannot encode arguments: {source}")]
    Encoding {
        method: String,
        #[source]
        source: ethabi::Error,
    },

    #[error("{name}: cannot decode: {source}")]
    Decoding {
        name: String,
        #[source]
        source: ethabi::Error,
    },

    #[error("{name}: expected {expected} values, got {actual} (wrong contract or incompatible abi)")]
    ArityMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },

    #[error("spec {name}: {reason}")]
    Spec { name: String, reason: String },

    #[error("no passphrase registered for {0}")]
    CredentialMissing(Address),

    #[error("no sender address configured")]
    SenderMissing,

    #[error("signing for {address} failed: {reason}")]
    Signing { address: Address, reason: String },

    #[error("RPC Error: {0}")]
    RpcError(#[from] rpc::Error),

    #[error("transaction {hash} reverted")]
    Reverted { hash: String, receipt: Box<TxReceipt> },

    #[error("transaction {hash} has no receipt after {waited:?}, outcome unknown")]
    Timeout { hash: String, waited: Duration },

    #[error("transaction {hash} submitted, receipt lookup failed: {source}")]
    Pending {
        hash: String,
        #[source]
        source: Box<Error>,
    },

    #[error("event {event}: no logs to search")]
    NoLogs { event: String },

    #[error("event {event}: no log matches topic 0x{topic}")]
    EventNotFound { event: String, topic: String },

    #[error("contract {contract}: event {event} not declared")]
    EventNotDeclared { contract: String, event: String },

    #[error("contract {contract}: method {method} not declared")]
    MethodNotDeclared { contract: String, method: String },

    #[error("Invalid Data: {0}")]
    InvalidData(String),

    #[error("Hex Error: {0}")]
    HexError(#[from] hex::FromHexError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("contract {contract} method {method}: {source}")]
    Contract {
        contract: String,
        method: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// The innermost error, looking through contract/method context.
    pub fn root(&self) -> &Error {
        match self {
            Error::Contract { source, .. } => source.root(),
            other => other,
        }
    }

    /// Hash of a transaction that reached the node before this error occurred.
    pub fn submitted_hash(&self) -> Option<&str> {
        match self.root() {
            Error::Reverted { hash, .. }
            | Error::Timeout { hash, .. }
            | Error::Pending { hash, .. } => Some(hash.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_looks_through_context() {
        let error = Error::Contract {
            contract: "rarity".to_string(),
            method: "adventure".to_string(),
            source: Box::new(Error::Timeout {
                hash: "0xabcd".to_string(),
                waited: Duration::from_secs(1),
            }),
        };
        assert!(matches!(error.root(), Error::Timeout { .. }));
        assert_eq!(error.submitted_hash(), Some("0xabcd"));
        assert!(error.to_string().starts_with("contract rarity method adventure: transaction 0xabcd"));
    }
}
