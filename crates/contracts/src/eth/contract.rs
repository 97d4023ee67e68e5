use std::collections::HashMap;
use std::sync::Arc;
use ethabi::num_bigint::BigUint;
use ethabi::{Address, Value};
use rpc::jsonrpc::Tag;
use crate::Error;
use crate::eth::{
    CallOutput,
    Confirmation,
    ContractSpec,
    EthereumEvent,
    EthereumMethod,
    EventOutput,
    Log,
    SendOptions,
    Submitted,
    Transport,
    TxSigner,
};

/// Every declared method and event of one deployed contract.
///
/// Immutable once built; errors from its operations come back wrapped in
/// `Error::Contract` with the contract and method (or event) name.
pub struct EthereumContract {
    name: String,
    address: Address,
    sender: Option<Address>,
    signer: Option<Arc<dyn TxSigner>>,
    methods: HashMap<String, EthereumMethod>,
    events: HashMap<String, EthereumEvent>,
}

impl EthereumContract {
    /// Resolves the whole spec or nothing.
    pub fn new(
        spec: &ContractSpec,
        transport: Arc<dyn Transport>,
        address: Address,
        sender: Option<Address>,
        signer: Option<Arc<dyn TxSigner>>,
    ) -> Result<Self, Error> {
        let mut methods = HashMap::with_capacity(spec.methods.len());
        for method in spec.methods {
            let resolved = EthereumMethod::from_spec(method, transport.clone())?;
            if methods.insert(method.name.to_string(), resolved).is_some() {
                return Err(duplicate(spec, "method", method.name));
            }
        }

        let mut events = HashMap::with_capacity(spec.events.len());
        for event in spec.events {
            let resolved = EthereumEvent::from_spec(event)?;
            if events.insert(event.name.to_string(), resolved).is_some() {
                return Err(duplicate(spec, "event", event.name));
            }
        }

        log::debug!("bound {} at {} ({} methods, {} events)", spec.name, address, methods.len(), events.len());
        Ok(Self {
            name: spec.name.to_string(),
            address,
            sender,
            signer,
            methods,
            events,
        })
    }

    pub fn with_send_options(mut self, options: SendOptions) -> Self {
        self.methods = self.methods.into_iter()
            .map(|(name, method)| (name, method.with_options(options.clone())))
            .collect();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn sender(&self) -> Option<&Address> {
        self.sender.as_ref()
    }

    pub fn method(&self, name: &str) -> Result<&EthereumMethod, Error> {
        self.methods.get(name).ok_or_else(|| self.context(name, Error::MethodNotDeclared {
            contract: self.name.clone(),
            method: name.to_string(),
        }))
    }

    pub fn event(&self, name: &str) -> Result<&EthereumEvent, Error> {
        self.events.get(name).ok_or_else(|| self.context(name, Error::EventNotDeclared {
            contract: self.name.clone(),
            event: name.to_string(),
        }))
    }

    pub async fn call<S: AsRef<str>>(&self, method: &str, args: &[S]) -> Result<CallOutput, Error> {
        self.call_at(method, Tag::Latest, args).await
    }

    pub async fn call_at<S: AsRef<str>>(&self, method: &str, tag: Tag, args: &[S]) -> Result<CallOutput, Error> {
        let proxy = self.method(method)?;
        proxy.call(self.sender.as_ref(), &self.address, tag, args).await
            .map_err(|error| self.context(method, error))
    }

    /// Signs for the configured sender. Fails before any network access without
    /// a sender or a signer.
    pub async fn send<S: AsRef<str>>(
        &self,
        method: &str,
        value: Option<BigUint>,
        args: &[S],
        confirmation: Confirmation,
    ) -> Result<Submitted, Error> {
        let proxy = self.method(method)?;
        let sender = self.sender.as_ref()
            .ok_or_else(|| self.context(method, Error::SenderMissing))?;
        let signer = self.signer.as_deref()
            .ok_or_else(|| self.context(method, Error::CredentialMissing(*sender)))?;

        proxy.send(sender, &self.address, value, args, confirmation, signer).await
            .map_err(|error| self.context(method, error))
    }

    pub fn get_event<T: EventOutput + ?Sized>(&self, name: &str, out: &mut T, logs: &[Log]) -> Result<(), Error> {
        self.event(name)?
            .parse_into(out, logs)
            .map_err(|error| self.context(name, error))
    }

    /// Exactly `N` decoded values, or an arity error naming `method`.
    pub fn expect_values<const N: usize>(&self, method: &str, output: CallOutput) -> Result<[Value; N], Error> {
        output.values.try_into().map_err(|values: Vec<Value>| self.context(method, Error::ArityMismatch {
            name: method.to_string(),
            expected: N,
            actual: values.len(),
        }))
    }

    /// A value of `method`'s result that could not be converted to the wanted type.
    pub fn decoding_error(&self, method: &str, source: ethabi::Error) -> Error {
        self.context(method, Error::Decoding {
            name: method.to_string(),
            source,
        })
    }

    fn context(&self, method: &str, source: Error) -> Error {
        Error::Contract {
            contract: self.name.clone(),
            method: method.to_string(),
            source: Box::new(source),
        }
    }
}

fn duplicate(spec: &ContractSpec, kind: &str, name: &str) -> Error {
    Error::Spec {
        name: name.to_string(),
        reason: format!("{} declared twice in {}", kind, spec.name),
    }
}
