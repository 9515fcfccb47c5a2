//! Port traits implemented by outbound adapters.

pub mod processor;

pub use processor::{ProcessorClient, ProcessorError, ProcessorOrder, ProcessorPayment};
