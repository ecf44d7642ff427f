#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::{CompanyFilter, DEFAULT_BASE_URL, DEFAULT_COMPANIES};
use crate::utils::error::Result;
use crate::utils::validation::{validate_base_url, validate_domains, Validate};
use toml_config::LinkConfig;

/// 命令列上可覆蓋設定檔的值
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub domains: Vec<String>,
    pub base_url: Option<String>,
    pub disabled: bool,
}

/// 合併後的最終設定：命令列 > 設定檔 > 預設值
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSettings {
    pub base_url: String,
    pub filter: CompanyFilter,
}

impl LinkSettings {
    pub fn resolve(overrides: &Overrides, file: Option<&LinkConfig>) -> Self {
        let base_url = overrides
            .base_url
            .clone()
            .or_else(|| file.and_then(LinkConfig::base_url).map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let companies = if !overrides.domains.is_empty() {
            overrides.domains.clone()
        } else if let Some(companies) = file.and_then(LinkConfig::companies) {
            companies.to_vec()
        } else {
            DEFAULT_COMPANIES.iter().map(|d| d.to_string()).collect()
        };

        let enabled = if overrides.disabled {
            false
        } else {
            file.and_then(LinkConfig::enabled).unwrap_or(true)
        };

        Self {
            base_url,
            filter: CompanyFilter::new(companies).with_enabled(enabled),
        }
    }
}

impl Validate for LinkSettings {
    fn validate(&self) -> Result<()> {
        validate_base_url("base_url", &self.base_url)?;
        validate_domains("companies", &self.filter.companies)?;
        Ok(())
    }
}
