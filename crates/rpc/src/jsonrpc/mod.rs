pub use id::Id;
pub use tag::Tag;
pub use jsonrpc::JsonRpc;
pub use response::Response;

pub mod id;
pub mod tag;
pub mod jsonrpc;
pub mod response;
