mod application;
pub mod data;
mod run_summary;
mod runtime_config;

pub use application::{Application, ApplicationError};
pub use run_summary::print_summary;
pub use runtime_config::RuntimeConfig;
