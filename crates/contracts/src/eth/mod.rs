pub use contract::EthereumContract;
pub use deploy::{deploy, read_hex_file, send_value};
pub use event::{EthereumEvent, EventOutput};
pub use function::EthereumFunction;
pub use method::{CallOutput, EthereumMethod};
pub use signer::{Keystore, KeystoreSigner, TxSigner};
pub use spec::{ContractSpec, EventSpec, MethodSpec};
pub use transaction::{
    Confirmation,
    GasPricing,
    Log,
    SendOptions,
    Submitted,
    TxReceipt,
    TxStatus,
    UnsignedTransaction,
};
pub use transport::Transport;

pub mod signature;
mod contract;
mod deploy;
mod event;
mod function;
mod method;
mod signer;
mod spec;
mod transaction;
mod transport;

#[cfg(test)]
pub(crate) mod testing;
