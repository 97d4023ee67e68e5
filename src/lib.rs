extern crate anyhow;
extern crate contracts;
extern crate ethabi;
extern crate rpc;
extern crate serde;
extern crate toml;

pub use options::BotOptions;
pub use rarity::{Rarity, Summoned, SummonerInfo, RARITY};

pub mod options;
pub mod rarity;
