use std::path::Path;
use anyhow::{anyhow, Result};
use ethabi::Address;
use serde::Deserialize;

pub const DEFAULT_PATH: &str = "rarity-bot.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct BotOptions {
    pub rpc_url: String,
    pub contract: String,
    /// `from` of every call; some contract views read `msg.sender`.
    pub sender: Option<String>,
    #[serde(default)]
    pub summoners: Vec<u64>,
}

impl BotOptions {
    pub async fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| anyhow!("Failed to read config file {:?}: {}", path, e))?;

        Self::from_toml(&content)
            .map_err(|e| anyhow!("Failed to parse config file {:?}: {}", path, e))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let options: BotOptions = toml::from_str(content)?;
        options.contract_address()?;
        options.sender_address()?;
        Ok(options)
    }

    pub fn contract_address(&self) -> Result<Address> {
        self.contract.parse()
            .map_err(|e| anyhow!("Invalid contract address {:?}: {}", self.contract, e))
    }

    pub fn sender_address(&self) -> Result<Option<Address>> {
        self.sender.as_deref()
            .map(|sender| sender.parse().map_err(|e| anyhow!("Invalid sender address {:?}: {}", sender, e)))
            .transpose()
    }
}
