pub(crate) use codec::sealed;
pub(crate) use codec::word;

pub use codec::{Codec, Encoder, Decoder, WORD_SIZE};
pub use tuple::TupleCodec;
pub(crate) use address::AddressCodec;
pub(crate) use boolean::BooleanCodec;
pub(crate) use bytes::FixedBytesCodec;
pub(crate) use integer::{IntCodec, UIntCodec};

mod codec;
mod address;
mod boolean;
mod bytes;
mod integer;
mod tuple;
