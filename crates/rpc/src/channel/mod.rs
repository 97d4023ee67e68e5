pub use oneshot::OneshotChannel;
pub use http::HttpChannel;

mod oneshot;
mod http;
