#[macro_use]
extern crate async_trait;
extern crate ethabi;
extern crate hex;
extern crate log;
extern crate parking_lot;
extern crate rpc;
extern crate thiserror;
extern crate tiny_keccak;
extern crate tokio;

pub use error::Error;

pub mod eth;
mod error;
