mod client;

mod error;
pub use error::Error;

pub use client::Client;

pub type Result<T> = std::result::Result<T, Error>;
