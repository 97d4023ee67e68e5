use std::sync::Arc;
use crate::channel;
use crate::jsonrpc;

pub struct NetworkOptions {
    pub oneshot: Arc<dyn channel::OneshotChannel<Output=jsonrpc::Response>>,
    /// Radix of quantity results; 16 for every node seen so far.
    pub radix: u32,
}

impl NetworkOptions {
    pub fn new(oneshot: Arc<dyn channel::OneshotChannel<Output=jsonrpc::Response>>) -> Self {
        Self { oneshot, radix: 16 }
    }
}
