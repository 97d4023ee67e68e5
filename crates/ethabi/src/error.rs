use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input data is invalid")]
    InvalidData,

    #[error("Hex decoding error : {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("unsupported abi type: {0}")]
    UnsupportedType(String),

    #[error("invalid {tag} literal: {literal:?}")]
    InvalidLiteral { tag: String, literal: String },

    #[error("value out of range for {0}")]
    OutOfRange(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: &'static str, found: &'static str },

    #[error("frame too short: need 32 bytes at offset {offset}, got {available}")]
    ShortFrame { offset: usize, available: usize },

    #[error("word is not a valid {tag}: 0x{word}")]
    InvalidWord { tag: String, word: String },

    #[error("expected {expected} values, got {actual}")]
    Arity { expected: usize, actual: usize },

    #[error("argument #{index} ({tag}): {source}")]
    Argument {
        index: usize,
        tag: String,
        #[source]
        source: Box<Error>,
    },
}
