#[macro_use]
extern crate async_trait;
extern crate hex;
extern crate log;
extern crate num_bigint;
extern crate num_traits;
extern crate reqwest;
extern crate serde;
#[macro_use]
extern crate serde_json;
extern crate thiserror;

pub use jsonrpc::JsonRpc;
pub use error::Error;

pub mod error;
pub mod jsonrpc;
pub mod channel;
pub mod network;
