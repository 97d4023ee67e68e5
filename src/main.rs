extern crate rarity_bot;

use std::sync::Arc;
use anyhow::Result;
use ethabi::num_bigint::BigUint;
use rarity_bot::{options, BotOptions, Rarity};
use rpc::channel::HttpChannel;
use rpc::network::{EthereumNetwork, NetworkOptions};

#[tokio::main]
async fn main() -> Result<()> {
    log4rs::init_file("log4rs.yaml", Default::default())?;

    let path = std::env::args().nth(1).unwrap_or_else(|| options::DEFAULT_PATH.to_string());
    let options = BotOptions::load_from_file(&path).await?;
    log::info!("Loaded {} ({} summoners)", path, options.summoners.len());

    let channel = Arc::new(HttpChannel::new(options.rpc_url.as_str()));
    let network = Arc::new(EthereumNetwork::new(NetworkOptions::new(channel)));
    let rarity = Rarity::new(network, options.contract_address()?, options.sender_address()?, None)?;
    log::info!("Rarity at {} via {}", rarity.contract().address(), options.rpc_url);

    list_summoners(&rarity, &options.summoners).await;
    Ok(())
}

async fn list_summoners(rarity: &Rarity, summoners: &[u64]) {
    for summoner in summoners {
        match rarity.summoner(&BigUint::from(*summoner)).await {
            Ok(info) => log::info!(
                "Summoner {}: xp {}, log {}, class {}, level {}",
                summoner, info.xp, info.log, info.class, info.level,
            ),
            Err(error) => log::error!("Summoner {}: {}", summoner, error),
        }
    }
}
