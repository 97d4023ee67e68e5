use crate::codec::{sealed, word, WORD_SIZE};
use crate::{strip_hex, Error, Value};

/// `bytesN`, left-aligned in its word.
pub struct FixedBytesCodec {
    size: usize,
}

impl FixedBytesCodec {
    pub fn new(size: usize) -> Self {
        Self { size }
    }
}

impl sealed::AbiType for FixedBytesCodec {
    fn name(&self) -> String {
        format!("bytes{}", self.size)
    }
}

impl sealed::Literal for FixedBytesCodec {
    fn parse_literal(&self, literal: &str) -> Result<Value, Error> {
        let invalid = || Error::InvalidLiteral {
            tag: sealed::AbiType::name(self),
            literal: literal.to_string(),
        };
        let bytes = hex::decode(strip_hex(literal.trim())).map_err(|_| invalid())?;
        if bytes.len() != self.size {
            return Err(invalid());
        }
        Ok(Value::FixedBytes(bytes))
    }
}

impl sealed::Encoder for FixedBytesCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let bytes = value.as_bytes()?;
        if bytes.len() != self.size {
            return Err(Error::OutOfRange(sealed::AbiType::name(self)));
        }

        let mut bytes = bytes.to_vec();
        bytes.resize(WORD_SIZE, 0);
        Ok(bytes)
    }
}

impl sealed::Decoder for FixedBytesCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let frame = word(bytes, offset)?;
        let (value, padding) = frame.split_at(self.size);
        if padding.iter().any(|byte| *byte != 0) {
            return Err(Error::InvalidWord {
                tag: sealed::AbiType::name(self),
                word: hex::encode(frame),
            });
        }
        Ok(Value::FixedBytes(value.to_vec()))
    }
}
