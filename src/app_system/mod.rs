//! Process bootstrap: configuration, logging, startup and shutdown.

pub mod config;
pub mod error;
pub mod logging;
pub mod server_system;

pub use config::*;
pub use error::*;
pub use logging::*;
pub use server_system::*;
