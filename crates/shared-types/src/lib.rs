pub mod config;
pub mod error;
pub mod job;
pub mod models;
pub mod routing;
pub mod session;

pub use config::*;
pub use error::*;
pub use job::*;
pub use models::*;
pub use routing::*;
pub use session::*;
