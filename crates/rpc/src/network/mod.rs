pub use eth::EthereumNetwork;
pub use options::NetworkOptions;
pub use types::{Log, TransactionReceipt};

mod eth;
mod options;
mod types;
