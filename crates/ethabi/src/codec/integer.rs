use num_bigint::{BigInt, BigUint, Sign};
use num_traits::{Num, One};
use crate::codec::{sealed, word, WORD_SIZE};
use crate::{Error, Value};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntCodec {
    size: usize,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct UIntCodec {
    size: usize,
}

impl IntCodec {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn fits(&self, value: &BigInt) -> bool {
        let bound = BigInt::one() << (self.size - 1);
        let min = -bound.clone();
        *value >= min && *value < bound
    }
}

impl UIntCodec {
    pub fn new(size: usize) -> Self {
        Self { size }
    }

    fn fits(&self, value: &BigUint) -> bool {
        value.bits() <= self.size as u64
    }
}

impl sealed::AbiType for IntCodec {
    fn name(&self) -> String {
        format!("int{}", self.size)
    }
}

impl sealed::AbiType for UIntCodec {
    fn name(&self) -> String {
        format!("uint{}", self.size)
    }
}

impl sealed::Literal for IntCodec {
    fn parse_literal(&self, literal: &str) -> Result<Value, Error> {
        let invalid = || Error::InvalidLiteral {
            tag: sealed::AbiType::name(self),
            literal: literal.to_string(),
        };
        let trimmed = literal.trim();
        if !is_digits(trimmed.strip_prefix('-').unwrap_or(trimmed), 10) {
            return Err(invalid());
        }
        let value = BigInt::from_str_radix(trimmed, 10).map_err(|_| invalid())?;
        if !self.fits(&value) {
            return Err(Error::OutOfRange(sealed::AbiType::name(self)));
        }
        Ok(Value::Int(value))
    }
}

impl sealed::Literal for UIntCodec {
    fn parse_literal(&self, literal: &str) -> Result<Value, Error> {
        let invalid = || Error::InvalidLiteral {
            tag: sealed::AbiType::name(self),
            literal: literal.to_string(),
        };
        let trimmed = literal.trim();
        let (digits, radix) = match trimmed.strip_prefix("0x").or_else(|| trimmed.strip_prefix("0X")) {
            Some(hex) => (hex, 16),
            None => (trimmed, 10),
        };
        if !is_digits(digits, radix) {
            return Err(invalid());
        }
        let value = BigUint::from_str_radix(digits, radix).map_err(|_| invalid())?;
        if !self.fits(&value) {
            return Err(Error::OutOfRange(sealed::AbiType::name(self)));
        }
        Ok(Value::UInt(value))
    }
}

/// Non-empty and only digits of `radix`: no sign, no `_` separators.
fn is_digits(digits: &str, radix: u32) -> bool {
    !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix))
}

impl sealed::Encoder for IntCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let value = value.as_int()?;
        if !self.fits(value) {
            return Err(Error::OutOfRange(sealed::AbiType::name(self)));
        }

        let bytes = value.to_signed_bytes_be();
        let padding = if value.sign() == Sign::Minus { 0xff } else { 0x00 };
        Ok(std::iter::repeat(padding).take(WORD_SIZE - bytes.len()).chain(bytes).collect())
    }
}

impl sealed::Encoder for UIntCodec {
    fn encode_frame(&self, value: &Value) -> Result<Vec<u8>, Error> {
        let value = value.as_uint()?;
        if !self.fits(value) {
            return Err(Error::OutOfRange(sealed::AbiType::name(self)));
        }

        let bytes = value.to_bytes_be();
        Ok(std::iter::repeat(0).take(WORD_SIZE - bytes.len()).chain(bytes).collect())
    }
}

impl sealed::Decoder for IntCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let frame = word(bytes, offset)?;
        let value = BigInt::from_signed_bytes_be(frame);
        if !self.fits(&value) {
            return Err(Error::InvalidWord {
                tag: sealed::AbiType::name(self),
                word: hex::encode(frame),
            });
        }
        Ok(Value::Int(value))
    }
}

impl sealed::Decoder for UIntCodec {
    fn decode_frame(&self, bytes: &[u8], offset: usize) -> Result<Value, Error> {
        let frame = word(bytes, offset)?;
        let value = BigUint::from_bytes_be(frame);
        if !self.fits(&value) {
            return Err(Error::InvalidWord {
                tag: sealed::AbiType::name(self),
                word: hex::encode(frame),
            });
        }
        Ok(Value::UInt(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{Codec, Decoder, Encoder};

    #[test]
    fn test_uint_decoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000000000CE").unwrap();
        assert_eq!(UIntCodec::new(8).decode(&bytes).unwrap(), Value::UInt(0xCE_u8.into()));

        let bytes = hex::decode("000000000000000000000000000000000000000000000000000000000000FACE").unwrap();
        assert_eq!(UIntCodec::new(16).decode(&bytes).unwrap(), Value::UInt(0xFACE_u16.into()));

        let bytes = hex::decode("DEADC0DEDEADC0DEDEADC0DEDEADC0DEFEEDFACEFEEDFACEFEEDFACEFEEDFACE").unwrap();
        assert_eq!(
            UIntCodec::new(256).decode(&bytes).unwrap(),
            Value::UInt(BigUint::from_bytes_be(&bytes)),
        );
    }

    #[test]
    fn test_uint_decoder_rejects_dirty_padding() {
        let bytes = hex::decode("DEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEDEADC0DEFEEDFACE").unwrap();
        assert!(matches!(UIntCodec::new(32).decode(&bytes), Err(Error::InvalidWord { .. })));
    }

    #[test]
    fn test_int_decoder() {
        let bytes = hex::decode("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFF").unwrap();
        assert_eq!(IntCodec::new(8).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));
        assert_eq!(IntCodec::new(256).decode(&bytes).unwrap(), Value::Int(BigInt::from(-1)));

        let bytes = hex::decode("0000000000000000000000000000000000000000000000000000000000000080").unwrap();
        assert!(IntCodec::new(8).decode(&bytes).is_err());
        assert_eq!(IntCodec::new(16).decode(&bytes).unwrap(), Value::Int(BigInt::from(128)));
    }

    #[test]
    fn test_uint_encoder() {
        let bytes = hex::decode("00000000000000000000000000000000000000000000000000000000FEEDFACE").unwrap();
        assert_eq!(
            UIntCodec::new(256).encode(&Value::UInt(0xFEEDFACE_u32.into())).unwrap(),
            bytes
        );
        assert!(matches!(
            UIntCodec::new(16).encode(&Value::UInt(0xFEEDFACE_u32.into())),
            Err(Error::OutOfRange(_))
        ));
    }

    #[test]
    fn test_int_encoder() {
        let bytes = hex::decode("FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFE").unwrap();
        assert_eq!(IntCodec::new(256).encode(&Value::Int((-2).into())).unwrap(), bytes);
    }

    #[test]
    fn test_uint_literals() {
        let codec = UIntCodec::new(256);
        assert_eq!(codec.from_literal("42").unwrap(), Value::UInt(42_u32.into()));
        assert_eq!(codec.from_literal("0x2a").unwrap(), Value::UInt(42_u32.into()));
        assert!(matches!(codec.from_literal("-1"), Err(Error::InvalidLiteral { .. })));
        assert!(matches!(codec.from_literal("forty-two"), Err(Error::InvalidLiteral { .. })));
        for literal in ["+5", "1_000", "0x", "0x_ff", "0x+1", ""] {
            assert!(matches!(codec.from_literal(literal), Err(Error::InvalidLiteral { .. })), "{}", literal);
        }

        let max = "115792089237316195423570985008687907853269984665640564039457584007913129639935";
        let encoded = codec.encode_literal(max).unwrap();
        assert_eq!(encoded, vec![0xff; 32]);
        assert_eq!(codec.decode(&encoded).unwrap().to_literal(), max);

        let overflow = "115792089237316195423570985008687907853269984665640564039457584007913129639936";
        assert!(matches!(codec.from_literal(overflow), Err(Error::OutOfRange(_))));
    }

    #[test]
    fn test_int_literals() {
        let codec = IntCodec::new(8);
        assert_eq!(codec.from_literal("-128").unwrap(), Value::Int((-128).into()));
        assert!(matches!(codec.from_literal("128"), Err(Error::OutOfRange(_))));
        assert_eq!(codec.from_literal(" -5 ").unwrap(), Value::Int((-5).into()));
        for literal in ["+5", "-+5", "1_0", "-", "0x10"] {
            assert!(matches!(codec.from_literal(literal), Err(Error::InvalidLiteral { .. })), "{}", literal);
        }
    }
}
