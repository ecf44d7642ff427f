pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::LzStringCompressor;
pub use config::{toml_config::LinkConfig, LinkSettings, Overrides};
pub use core::{link::SearchLinkBuilder, CompanyFilter, PayloadCompressor, SearchLink};
pub use utils::error::{LinkError, PayloadError, Result};
