use crate::utils::error::{LinkError, Result};
use crate::utils::validation::{validate_base_url, validate_domains, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const ENV_VAR_PATTERN: &str = r"\$\{([^}]+)\}";

/// TOML 設定檔；所有欄位皆可省略，缺少時使用預設值
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkConfig {
    pub search: Option<SearchConfig>,
    pub filter: Option<FilterConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    pub companies: Option<Vec<String>>,
    pub enabled: Option<bool>,
}

impl LinkConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, &path.display().to_string())
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, source: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content, source)?;

        toml::from_str(&processed_content).map_err(|e| LinkError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })
    }

    /// 替換環境變數 (例如 ${SEARCH_HOST})，未設定的變數保留原樣
    fn substitute_env_vars(content: &str, source: &str) -> Result<String> {
        let re = Regex::new(ENV_VAR_PATTERN).map_err(|e| LinkError::ConfigParseError {
            path: source.to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn base_url(&self) -> Option<&str> {
        self.search.as_ref()?.base_url.as_deref()
    }

    pub fn companies(&self) -> Option<&[String]> {
        self.filter.as_ref()?.companies.as_deref()
    }

    pub fn enabled(&self) -> Option<bool> {
        self.filter.as_ref()?.enabled
    }
}

impl Validate for LinkConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = self.base_url() {
            validate_base_url("search.base_url", base_url)?;
        }
        if let Some(companies) = self.companies() {
            validate_domains("filter.companies", companies)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = LinkConfig::from_toml_str(
            r#"
[search]
base_url = "https://search.example.com/companies"

[filter]
companies = ["promon.co", "boloro.com"]
enabled = false
"#,
        )
        .unwrap();

        assert_eq!(config.base_url(), Some("https://search.example.com/companies"));
        assert_eq!(
            config.companies(),
            Some(&["promon.co".to_string(), "boloro.com".to_string()][..])
        );
        assert_eq!(config.enabled(), Some(false));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_has_no_values() {
        let config = LinkConfig::from_toml_str("").unwrap();
        assert_eq!(config, LinkConfig::default());
        assert_eq!(config.base_url(), None);
        assert_eq!(config.companies(), None);
        assert_eq!(config.enabled(), None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("COMPANY_SEARCH_LINK_TEST_HOST", "search.internal:8080");
        let config = LinkConfig::from_toml_str(
            r#"
[search]
base_url = "http://${COMPANY_SEARCH_LINK_TEST_HOST}/search/companies"
"#,
        )
        .unwrap();
        assert_eq!(
            config.base_url(),
            Some("http://search.internal:8080/search/companies")
        );
    }

    #[test]
    fn test_unset_env_var_is_kept() {
        let config = LinkConfig::from_toml_str(
            r#"
[search]
base_url = "http://${COMPANY_SEARCH_LINK_SURELY_UNSET}/search"
"#,
        )
        .unwrap();
        assert_eq!(
            config.base_url(),
            Some("http://${COMPANY_SEARCH_LINK_SURELY_UNSET}/search")
        );
    }

    #[test]
    fn test_invalid_toml_reports_source() {
        let err = LinkConfig::from_toml_str("[search\nbase_url = 1").unwrap_err();
        match err {
            LinkError::ConfigParseError { path, .. } => assert_eq!(path, "<inline>"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
