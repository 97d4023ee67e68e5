use std::fmt;
use std::str::FromStr;
use num_bigint::{BigInt, BigUint};
use crate::{strip_hex, Error};

/// A 20-byte account or contract address.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Address([u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn zero() -> Self {
        Self([0u8; 20])
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let bytes: [u8; 20] = bytes.try_into().map_err(|_| Error::InvalidData)?;
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let stripped = strip_hex(s.trim());
        if stripped.len() != 2 * Self::LEN {
            return Err(Error::InvalidLiteral {
                tag: "address".to_string(),
                literal: s.to_string(),
            });
        }
        let mut bytes = [0u8; 20];
        hex::decode_to_slice(stripped, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

/// One decoded (or to-be-encoded) ABI value, tagged by its type family.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Value {
    Address(Address),
    Boolean(bool),
    Int(BigInt),
    UInt(BigUint),
    FixedBytes(Vec<u8>),
}

impl Value {
    pub fn address(address: &str) -> Result<Self, Error> {
        Ok(Value::Address(address.parse()?))
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Value::Address(_) => "address",
            Value::Boolean(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::FixedBytes(_) => "bytes",
        }
    }

    pub fn as_address(&self) -> Result<&Address, Error> {
        match self {
            Value::Address(address) => Ok(address),
            other => Err(other.mismatch("address")),
        }
    }

    pub fn as_bool(&self) -> Result<bool, Error> {
        match self {
            Value::Boolean(boolean) => Ok(*boolean),
            other => Err(other.mismatch("bool")),
        }
    }

    pub fn as_int(&self) -> Result<&BigInt, Error> {
        match self {
            Value::Int(int) => Ok(int),
            other => Err(other.mismatch("int")),
        }
    }

    pub fn as_uint(&self) -> Result<&BigUint, Error> {
        match self {
            Value::UInt(uint) => Ok(uint),
            other => Err(other.mismatch("uint")),
        }
    }

    pub fn as_bytes(&self) -> Result<&[u8], Error> {
        match self {
            Value::FixedBytes(bytes) => Ok(bytes),
            other => Err(other.mismatch("bytes")),
        }
    }

    pub fn into_uint(self) -> Result<BigUint, Error> {
        match self {
            Value::UInt(uint) => Ok(uint),
            other => Err(other.mismatch("uint")),
        }
    }

    pub fn into_address(self) -> Result<Address, Error> {
        match self {
            Value::Address(address) => Ok(address),
            other => Err(other.mismatch("address")),
        }
    }

    /// Renders the value in the textual form the codecs parse back.
    pub fn to_literal(&self) -> String {
        match self {
            Value::Address(address) => address.to_string(),
            Value::Boolean(boolean) => boolean.to_string(),
            Value::Int(int) => int.to_string(),
            Value::UInt(uint) => uint.to_string(),
            Value::FixedBytes(bytes) => format!("0x{}", hex::encode(bytes)),
        }
    }

    fn mismatch(&self, expected: &'static str) -> Error {
        Error::TypeMismatch {
            expected,
            found: self.kind(),
        }
    }
}

impl From<Address> for Value {
    fn from(address: Address) -> Self {
        Value::Address(address)
    }
}

impl From<BigUint> for Value {
    fn from(uint: BigUint) -> Self {
        Value::UInt(uint)
    }
}

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Value::Boolean(boolean)
    }
}
