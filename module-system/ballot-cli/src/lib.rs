//! Drives the ballot module from the command line. The module state lives in a JSON
//! file between invocations.

pub mod config;
pub mod state;
pub mod workflows;

pub use clap;
pub use config::{from_toml_path, CliConfig};
pub use workflows::{Output, Workflow};

/// The context every call is executed with.
pub type Ctx = ballot_modules_api::default_context::DefaultContext;
