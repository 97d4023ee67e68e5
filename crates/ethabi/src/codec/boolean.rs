use crate::codec::{sealed, word};
use crate::{Error, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BooleanCodec;

impl sealed::AbiType for BooleanCodec {
    fn name(&self) -> String {
        "bool".to_string()
    }
}

impl sealed::Literal for BooleanCodec {
    fn parse_literal(&self, literal: &str) -> Result<Value, Error> {
        match literal.trim() {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(Error::InvalidLiteral {
                tag: "bool".to_string(),
                literal: literal.to_string(),
            }),
        }
    }
}

impl sealed::Encoder for BooleanCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let boolean = value.as_bool()?;
        let mut bytes = Vec::with_capacity(32);
        bytes.extend_from_slice(&[0u8; 31]);
        bytes.push(boolean as u8);
        Ok(bytes)
    }
}

impl sealed::Decoder for BooleanCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let frame = word(bytes, offset)?;
        let (padding, last) = frame.split_at(31);
        match (padding.iter().all(|byte| *byte == 0), last[0]) {
            (true, 0) => Ok(Value::Boolean(false)),
            (true, 1) => Ok(Value::Boolean(true)),
            _ => Err(Error::InvalidWord {
                tag: "bool".to_string(),
                word: hex::encode(frame),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Encoder, Decoder};

    #[test]
    fn test_boolean_encoder() {
        let bytes = hex::decode("0000000000000000000000000000000000000000000000000000000000000000").unwrap();
        assert_eq!(BooleanCodec.encode(&Value::Boolean(false)).unwrap(), bytes);

        let bytes = hex::decode("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        assert_eq!(BooleanCodec.encode(&Value::Boolean(true)).unwrap(), bytes);
    }

    #[test]
    fn test_boolean_decoder() {
        let bytes = hex::decode("0000000000000000000000000000000000000000000000000000000000000000").unwrap();
        assert_eq!(BooleanCodec.decode(&bytes).unwrap(), Value::Boolean(false));

        let bytes = hex::decode("0000000000000000000000000000000000000000000000000000000000000001").unwrap();
        assert_eq!(BooleanCodec.decode(&bytes).unwrap(), Value::Boolean(true));

        let bytes = hex::decode("8000000000000000000000000000000000000000000000000000000000000000").unwrap();
        assert!(BooleanCodec.decode(&bytes).is_err());
    }
}
