use crate::{Value, Error};

/// Every supported type occupies exactly one word.
pub const WORD_SIZE: usize = 32;

pub(crate) mod sealed {
    use super::Value;
    use super::Error;

    pub trait AbiType {
        fn name(&self) -> String;
    }

    pub trait Encoder: AbiType {
        fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error>;
    }

    pub trait Decoder: AbiType {
        fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error>;
    }

    pub trait Literal: AbiType {
        fn parse_literal(&self, literal: &str) -> Result<Value, Error>;
    }
}

pub trait Encoder: sealed::Encoder {
    fn encode(&self, value: &Value) -> Result<Vec<u8>, Error> {
        self.encode_frame(value)
    }
}

pub trait Decoder: sealed::Decoder {
    fn decode(&self, bytes: &[u8]) -> Result<Value, Error> {
        self.decode_frame(bytes, 0)
    }

    fn decode_at(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        self.decode_frame(bytes, offset)
    }
}

pub trait Codec: Encoder + Decoder + sealed::Literal + Send + Sync {
    /// Canonical type name, as it appears in a function or event signature.
    fn abi_name(&self) -> String {
        sealed::AbiType::name(self)
    }

    fn from_literal(&self, literal: &str) -> Result<Value, Error> {
        self.parse_literal(literal)
    }

    fn encode_literal(&self, literal: &str) -> Result<Vec<u8>, Error> {
        let value = self.parse_literal(literal)?;
        self.encode_frame(&value)
    }
}

impl<T: sealed::Decoder> Decoder for T {}
impl<T: sealed::Encoder> Encoder for T {}
impl<T: Encoder + Decoder + sealed::Literal + Send + Sync> Codec for T {}

pub(crate) fn word(bytes: &[u8], offset: usize) -> Result<&[u8], Error> {
    bytes.get(offset..offset + WORD_SIZE).ok_or(Error::ShortFrame {
        offset,
        available: bytes.len().saturating_sub(offset),
    })
}
