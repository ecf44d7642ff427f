use crate::utils::error::{LinkError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 搜尋頁面讀取的 query 參數名稱
pub const FILTER_PARAM: &str = "filters";

/// `companiesAnyOfV1` 篩選條件：符合任一公司網域即列出
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyFilter {
    pub companies: Vec<String>,
    pub enabled: bool,
}

impl CompanyFilter {
    pub fn new<I, S>(companies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            companies: companies.into_iter().map(Into::into).collect(),
            enabled: true,
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }
}

/// 搜尋頁面的篩選物件；其他篩選鍵在解析時會被忽略
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(rename = "companiesAnyOfV1")]
    pub companies_any_of: CompanyFilter,
}

/// 產生 `filters={...}` 字串，JSON 為緊湊格式且欄位順序固定
pub fn render_filter_string(filter: &CompanyFilter) -> Result<String> {
    let filters = SearchFilters {
        companies_any_of: filter.clone(),
    };
    let json = serde_json::to_string(&filters)?;
    Ok(format!("{}={}", FILTER_PARAM, json))
}

pub fn parse_filter_string(filter_string: &str) -> Result<CompanyFilter> {
    let json = filter_string
        .strip_prefix(FILTER_PARAM)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| {
            LinkError::malformed_link(filter_string, format!("expected '{}=' prefix", FILTER_PARAM))
        })?;

    let filters: SearchFilters = serde_json::from_str(json)?;
    Ok(filters.companies_any_of)
}

/// 一次建立的結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchLink {
    pub url: String,
    pub payload: String,
    pub filter_string: String,
}

impl fmt::Display for SearchLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
