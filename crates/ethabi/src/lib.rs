pub extern crate hex;
pub extern crate num_bigint;
pub extern crate num_traits;
extern crate thiserror;

pub use codec::{Codec, Encoder, Decoder, TupleCodec, WORD_SIZE};
pub use error::Error;
pub use parser::{parse, parse_tuple};
pub use value::{Address, Value};

mod codec;
mod error;
mod parser;
mod value;

/// Drops a leading `0x`/`0X` if present.
pub fn strip_hex(hex: &str) -> &str {
    hex.strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex)
}
