use ethabi::{TupleCodec, Value};
use crate::Error;
use crate::eth::signature::encode_4bytes;

/// A resolved contract method: selector plus argument and return codecs.
pub struct EthereumFunction {
    pub name: String,
    signature: String,
    selector: [u8; 4],
    arg_codec: TupleCodec,
    ret_codec: TupleCodec,
}

impl EthereumFunction {
    /// Fails with `Error::Spec` naming the method when a tag is not supported.
    pub fn new(name: &str, args: &[&str], returns: &[&str]) -> Result<Self, Error> {
        let arg_codec = resolve(name, args)?;
        let ret_codec = resolve(name, returns)?;

        let signature = format!("{}({})", name, arg_codec.signature());
        let selector = encode_4bytes(&signature);

        let function = Self {
            name: name.to_string(),
            signature,
            selector,
            arg_codec,
            ret_codec,
        };
        Ok(function)
    }

    pub fn selector(&self) -> [u8; 4] {
        self.selector
    }

    /// Canonical signature, e.g. `balanceOf(address)`.
    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn inputs(&self) -> usize {
        self.arg_codec.len()
    }

    pub fn outputs(&self) -> usize {
        self.ret_codec.len()
    }

    /// Selector followed by the encoded textual arguments.
    pub fn encode<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<u8>, Error> {
        let encoded = self.arg_codec.encode_literals(args)
            .map_err(|error| self.encoding_error(error))?;
        Ok([self.selector.as_slice(), encoded.as_slice()].concat())
    }

    pub fn encode_values(&self, values: &[Value]) -> Result<Vec<u8>, Error> {
        let encoded = self.arg_codec.encode_values(values)
            .map_err(|error| self.encoding_error(error))?;
        Ok([self.selector.as_slice(), encoded.as_slice()].concat())
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Value>, Error> {
        self.ret_codec.decode_values(bytes).map_err(|error| match error {
            ethabi::Error::Arity { expected, actual } => Error::ArityMismatch {
                name: self.name.clone(),
                expected,
                actual,
            },
            source => Error::Decoding {
                name: self.name.clone(),
                source,
            },
        })
    }

    fn encoding_error(&self, error: ethabi::Error) -> Error {
        match error {
            ethabi::Error::Arity { expected, actual } => Error::ArityMismatch {
                name: self.name.clone(),
                expected,
                actual,
            },
            source => Error::Encoding {
                method: self.name.clone(),
                source,
            },
        }
    }
}

fn resolve(name: &str, tags: &[&str]) -> Result<TupleCodec, Error> {
    ethabi::parse_tuple(tags).map_err(|error| Error::Spec {
        name: name.to_string(),
        reason: error.to_string(),
    })
}
