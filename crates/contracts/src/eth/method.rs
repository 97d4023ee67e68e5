use std::sync::Arc;
use ethabi::num_bigint::BigUint;
use ethabi::{Address, Value};
use rpc::jsonrpc::Tag;
use crate::Error;
use crate::eth::transaction::submit;
use crate::eth::{Confirmation, EthereumFunction, MethodSpec, SendOptions, Submitted, Transport, TxSigner};

/// What a read-only call returned, raw and decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallOutput {
    pub raw: Vec<u8>,
    pub values: Vec<Value>,
}

/// One contract method bound to a transport.
pub struct EthereumMethod {
    function: EthereumFunction,
    transport: Arc<dyn Transport>,
    options: SendOptions,
}

impl EthereumMethod {
    pub fn new(function: EthereumFunction, transport: Arc<dyn Transport>) -> Self {
        Self {
            function,
            transport,
            options: SendOptions::default(),
        }
    }

    pub fn from_spec(spec: &MethodSpec, transport: Arc<dyn Transport>) -> Result<Self, Error> {
        let function = EthereumFunction::new(spec.name, spec.inputs, spec.outputs)?;
        Ok(Self::new(function, transport))
    }

    pub fn with_options(mut self, options: SendOptions) -> Self {
        self.options = options;
        self
    }

    pub fn name(&self) -> &str {
        &self.function.name
    }

    pub fn function(&self) -> &EthereumFunction {
        &self.function
    }

    /// Read-only invocation. An empty result for a method with outputs is an arity mismatch,
    /// which usually means nothing is deployed at `contract`.
    pub async fn call<S: AsRef<str>>(
        &self,
        from: Option<&Address>,
        contract: &Address,
        tag: Tag,
        args: &[S],
    ) -> Result<CallOutput, Error> {
        let data = self.function.encode(args)?;
        log::debug!("call {} on {}", self.function.signature(), contract);

        let raw = self.transport.call(from, contract, &data, tag).await?;
        let values = self.function.decode(&raw)?;
        Ok(CallOutput { raw, values })
    }

    /// State-changing invocation signed for `from`.
    pub async fn send<S: AsRef<str>>(
        &self,
        from: &Address,
        contract: &Address,
        value: Option<BigUint>,
        args: &[S],
        confirmation: Confirmation,
        signer: &dyn TxSigner,
    ) -> Result<Submitted, Error> {
        let data = self.function.encode(args)?;
        log::debug!("send {} to {} from {}", self.function.signature(), contract, from);

        submit(
            self.transport.as_ref(),
            signer,
            from,
            Some(contract),
            value,
            data,
            confirmation,
            &self.options,
        ).await
    }
}
