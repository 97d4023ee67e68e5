use std::sync::Arc;
use contracts::Error;
use contracts::eth::{
    self,
    Confirmation,
    ContractSpec,
    EthereumContract,
    EventOutput,
    EventSpec,
    Log,
    MethodSpec,
    SendOptions,
    Submitted,
    Transport,
    TxSigner,
};
use ethabi::num_bigint::BigUint;
use ethabi::{Address, Value};

pub static RARITY: ContractSpec = ContractSpec {
    name: "rarity",
    methods: &[
        MethodSpec { name: "summon", inputs: &["uint256"], outputs: &[] },
        MethodSpec { name: "adventure", inputs: &["uint256"], outputs: &[] },
        MethodSpec { name: "level_up", inputs: &["uint256"], outputs: &[] },
        MethodSpec { name: "adventurers_log", inputs: &["uint256"], outputs: &["uint256"] },
        MethodSpec { name: "balanceOf", inputs: &["address"], outputs: &["uint256"] },
        MethodSpec { name: "xp_required", inputs: &["uint256"], outputs: &["uint256"] },
        MethodSpec {
            name: "summoner",
            inputs: &["uint256"],
            outputs: &["uint256", "uint256", "uint256", "uint256"],
        },
    ],
    events: &[
        EventSpec { name: "summoned", topics: &["address"], data: &["uint256", "uint256"] },
    ],
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummonerInfo {
    pub xp: BigUint,
    pub log: BigUint,
    pub class: BigUint,
    pub level: BigUint,
}

/// The `summoned(address indexed owner, uint256 class, uint256 summoner)` event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summoned {
    pub owner: Address,
    pub class: BigUint,
    pub summoner: BigUint,
}

impl EventOutput for Summoned {
    fn assign(&mut self, values: Vec<Value>) -> Result<(), ethabi::Error> {
        let [owner, class, summoner]: [Value; 3] = values.try_into()
            .map_err(|values: Vec<Value>| ethabi::Error::Arity { expected: 3, actual: values.len() })?;
        self.owner = owner.into_address()?;
        self.class = class.into_uint()?;
        self.summoner = summoner.into_uint()?;
        Ok(())
    }
}

pub struct Rarity {
    contract: EthereumContract,
}

impl Rarity {
    pub fn new(
        transport: Arc<dyn Transport>,
        address: Address,
        sender: Option<Address>,
        signer: Option<Arc<dyn TxSigner>>,
    ) -> Result<Self, Error> {
        let contract = EthereumContract::new(&RARITY, transport, address, sender, signer)?;
        Ok(Self { contract })
    }

    /// Deploys compiled rarity bytecode; the constructor takes no arguments.
    pub async fn deploy(
        transport: &dyn Transport,
        signer: &dyn TxSigner,
        from: &Address,
        bytecode: &[u8],
        confirmation: Confirmation,
        options: &SendOptions,
    ) -> Result<Submitted, Error> {
        eth::deploy::<&str>(transport, signer, from, bytecode, &[], &[], confirmation, options).await
    }

    pub fn with_send_options(self, options: SendOptions) -> Self {
        Self { contract: self.contract.with_send_options(options) }
    }

    pub fn contract(&self) -> &EthereumContract {
        &self.contract
    }

    pub fn get_event<T: EventOutput + ?Sized>(&self, name: &str, out: &mut T, logs: &[Log]) -> Result<(), Error> {
        self.contract.get_event(name, out, logs)
    }

    /// The first `summoned` event in `logs`, e.g. from the receipt of `summon`.
    pub fn summoned(&self, logs: &[Log]) -> Result<Summoned, Error> {
        let mut summoned = Summoned::default();
        self.get_event("summoned", &mut summoned, logs)?;
        Ok(summoned)
    }

    pub async fn summon(&self, class: &BigUint, confirmation: Confirmation) -> Result<Submitted, Error> {
        self.contract.send("summon", None, &[class.to_string()], confirmation).await
    }

    pub async fn adventure(&self, summoner: &BigUint, confirmation: Confirmation) -> Result<Submitted, Error> {
        self.contract.send("adventure", None, &[summoner.to_string()], confirmation).await
    }

    pub async fn level_up(&self, summoner: &BigUint, confirmation: Confirmation) -> Result<Submitted, Error> {
        self.contract.send("level_up", None, &[summoner.to_string()], confirmation).await
    }

    pub async fn adventurers_log(&self, summoner: &BigUint) -> Result<BigUint, Error> {
        self.call_uint("adventurers_log", summoner.to_string()).await
    }

    pub async fn balance_of(&self, owner: &Address) -> Result<BigUint, Error> {
        self.call_uint("balanceOf", owner.to_string()).await
    }

    pub async fn xp_required(&self, level: &BigUint) -> Result<BigUint, Error> {
        self.call_uint("xp_required", level.to_string()).await
    }

    pub async fn summoner(&self, summoner: &BigUint) -> Result<SummonerInfo, Error> {
        let output = self.contract.call("summoner", &[summoner.to_string()]).await?;
        let [xp, log, class, level] = self.contract.expect_values::<4>("summoner", output)?;
        let uint = |value: Value| value.into_uint()
            .map_err(|source| self.contract.decoding_error("summoner", source));

        Ok(SummonerInfo {
            xp: uint(xp)?,
            log: uint(log)?,
            class: uint(class)?,
            level: uint(level)?,
        })
    }

    async fn call_uint(&self, method: &str, arg: String) -> Result<BigUint, Error> {
        let output = self.contract.call(method, &[arg]).await?;
        let [value] = self.contract.expect_values::<1>(method, output)?;
        value.into_uint().map_err(|source| self.contract.decoding_error(method, source))
    }
}
