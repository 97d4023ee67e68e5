use crate::codec::{
    AddressCodec,
    BooleanCodec,
    FixedBytesCodec,
    IntCodec,
    UIntCodec,
    TupleCodec,
};
use crate::Codec;
use crate::Error;

/// Resolves one ABI type tag to its codec.
///
/// Only single-word types are recognized: `uint<N>`, `int<N>`, `address`,
/// `bool` and `bytes<N>`. `uint` and `int` are aliases for their 256-bit forms.
pub fn parse(tag: &str) -> Result<Box<dyn Codec>, Error> {
    let tag = tag.trim();
    let unsupported = || Error::UnsupportedType(tag.to_string());

    match tag {
        "address" => return Ok(Box::new(AddressCodec)),
        "bool" => return Ok(Box::new(BooleanCodec)),
        "uint" => return Ok(Box::new(UIntCodec::new(256))),
        "int" => return Ok(Box::new(IntCodec::new(256))),
        _ => {}
    }

    if let Some(digits) = tag.strip_prefix("uint") {
        let size = integer_width(digits).ok_or_else(unsupported)?;
        return Ok(Box::new(UIntCodec::new(size)));
    }

    if let Some(digits) = tag.strip_prefix("int") {
        let size = integer_width(digits).ok_or_else(unsupported)?;
        return Ok(Box::new(IntCodec::new(size)));
    }

    if let Some(digits) = tag.strip_prefix("bytes") {
        let size = digits_value(digits).filter(|size| (1..=32).contains(size)).ok_or_else(unsupported)?;
        return Ok(Box::new(FixedBytesCodec::new(size)));
    }

    Err(unsupported())
}

pub fn parse_tuple(tags: &[&str]) -> Result<TupleCodec, Error> {
    let codecs = tags.iter()
        .map(|tag| parse(tag))
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(TupleCodec::new(codecs))
}

fn integer_width(digits: &str) -> Option<usize> {
    digits_value(digits).filter(|size| (8..=256).contains(size) && size % 8 == 0)
}

fn digits_value(digits: &str) -> Option<usize> {
    if digits.is_empty() || digits.starts_with('0') || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
