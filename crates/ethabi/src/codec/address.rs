use crate::codec::{sealed, word};
use crate::{Address, Error, Value};

pub struct AddressCodec;

impl sealed::AbiType for AddressCodec {
    fn name(&self) -> String {
        "address".to_string()
    }
}

impl sealed::Literal for AddressCodec {
    fn parse_literal(&self, literal: &str) -> Result<Value, Error> {
        let address = literal.parse::<Address>().map_err(|_| Error::InvalidLiteral {
            tag: "address".to_string(),
            literal: literal.to_string(),
        })?;
        Ok(Value::Address(address))
    }
}

impl sealed::Decoder for AddressCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let frame = word(bytes, offset)?;
        if frame[..12].iter().any(|byte| *byte != 0) {
            return Err(Error::InvalidWord {
                tag: "address".to_string(),
                word: hex::encode(frame),
            });
        }
        Ok(Value::Address(Address::from_slice(&frame[12..])?))
    }
}

impl sealed::Encoder for AddressCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let address = value.as_address()?;

        let mut bytes = Vec::with_capacity(32);
        bytes.extend_from_slice(&[0u8; 12]);
        bytes.extend_from_slice(address.as_bytes());
        Ok(bytes)
    }
}
