use serde::{Serialize, Serializer};

/// Block selector for state-reading requests.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Tag {
    #[default]
    Latest,
    Earliest,
    Pending,
    Block(u64),
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Tag::Latest => serializer.serialize_str("latest"),
            Tag::Earliest => serializer.serialize_str("earliest"),
            Tag::Pending => serializer.serialize_str("pending"),
            Tag::Block(block) => serializer.serialize_str(&format!("{:#x}", block)),
        }
    }
}
