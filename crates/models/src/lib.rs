pub mod channel;
pub mod config;
pub mod error;
pub mod stremio;

pub use channel::*;
pub use config::*;
pub use error::*;
pub use stremio::*;
