mod client;
mod error;
mod store;
mod types;

pub use client::BitsaApiClient;
pub use error::Error;
pub use store::EventStore;
pub use types::*;
