pub mod daemon;
pub mod http_client;
pub mod metrics;

pub use daemon::*;
pub use http_client::*;
pub use metrics::*;
