use super::toml_config::LinkConfig;
use super::{LinkSettings, Overrides};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "search-link")]
#[command(about = "Build a company search link from a list of company domains")]
pub struct CliConfig {
    /// Comma-separated company domains (overrides the config file)
    #[arg(long, value_delimiter = ',')]
    pub domains: Vec<String>,

    /// Search page URL the payload is appended to
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Emit the filter with "enabled": false
    #[arg(long)]
    pub disabled: bool,

    /// Decode an existing search link and print its filter JSON
    #[arg(long, value_name = "URL")]
    pub decode: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Write logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            domains: self.domains.clone(),
            base_url: self.base_url.clone(),
            disabled: self.disabled,
        }
    }

    /// 讀取設定檔 (若有)、合併命令列覆蓋值並驗證
    pub fn load_settings(&self) -> Result<LinkSettings> {
        let file = match &self.config {
            Some(path) => {
                let file = LinkConfig::from_file(path)?;
                file.validate()?;
                Some(file)
            }
            None => None,
        };

        let settings = LinkSettings::resolve(&self.overrides(), file.as_ref());
        settings.validate()?;
        Ok(settings)
    }
}
