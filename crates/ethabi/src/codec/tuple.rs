use crate::codec::{Codec, Decoder, Encoder, WORD_SIZE};
use crate::{Error, Value};

/// An ordered sequence of single-word codecs, encoded head to head.
pub struct TupleCodec {
    codecs: Vec<Box<dyn Codec>>,
}

impl TupleCodec {
    pub fn new(codecs: Vec<Box<dyn Codec>>) -> Self {
        Self { codecs }
    }

    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    pub fn codecs(&self) -> &[Box<dyn Codec>] {
        &self.codecs
    }

    /// Comma-joined canonical member types, e.g. `address,uint256`.
    pub fn signature(&self) -> String {
        self.codecs.iter().map(|codec| codec.abi_name()).collect::<Vec<_>>().join(",")
    }

    pub fn encode_values(&self, values: &[Value]) -> Result<Vec<u8>, Error> {
        self.check_arity(values.len())?;

        let mut bytes = Vec::with_capacity(WORD_SIZE * values.len());
        for (index, (codec, value)) in self.codecs.iter().zip(values).enumerate() {
            let frame = codec.encode(value).map_err(|source| argument(index, codec.as_ref(), source))?;
            bytes.extend(frame);
        }
        Ok(bytes)
    }

    pub fn encode_literals<S: AsRef<str>>(&self, literals: &[S]) -> Result<Vec<u8>, Error> {
        self.check_arity(literals.len())?;

        let mut bytes = Vec::with_capacity(WORD_SIZE * literals.len());
        for (index, (codec, literal)) in self.codecs.iter().zip(literals).enumerate() {
            let frame = codec.encode_literal(literal.as_ref())
                .map_err(|source| argument(index, codec.as_ref(), source))?;
            bytes.extend(frame);
        }
        Ok(bytes)
    }

    /// Decodes exactly one word per member; any other length is an arity mismatch.
    pub fn decode_values(&self, bytes: &[u8]) -> Result<Vec<Value>, Error> {
        if bytes.len() % WORD_SIZE != 0 {
            return Err(Error::InvalidData);
        }
        self.check_arity(bytes.len() / WORD_SIZE)?;

        self.codecs.iter().enumerate()
            .map(|(index, codec)| {
                codec.decode_at(bytes, index * WORD_SIZE)
                    .map_err(|source| argument(index, codec.as_ref(), source))
            })
            .collect()
    }

    fn check_arity(&self, actual: usize) -> Result<(), Error> {
        if actual != self.codecs.len() {
            return Err(Error::Arity {
                expected: self.codecs.len(),
                actual,
            });
        }
        Ok(())
    }
}

fn argument(index: usize, codec: &dyn Codec, source: Error) -> Error {
    Error::Argument {
        index,
        tag: codec.abi_name(),
        source: Box::new(source),
    }
}
