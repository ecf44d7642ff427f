use crate::adapters::LzStringCompressor;
use crate::domain::model::{parse_filter_string, render_filter_string, CompanyFilter, SearchLink};
use crate::domain::ports::PayloadCompressor;
use crate::utils::error::{LinkError, Result};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/search/companies";

pub const DEFAULT_COMPANIES: [&str; 9] = [
    "appsealing.com",
    "nowsecure.com",
    "promon.co",
    "i-sprint.com",
    "boloro.com",
    "guardsquare.com",
    "certosoftware.com",
    "cloudmask.com",
    "beconnect.ai",
];

/// 將公司篩選條件壓縮成搜尋頁面的連結
///
/// 連結格式為 `<base_url>?<payload>=`：payload 直接當作 query 的鍵，
/// 不做 percent-encoding，與搜尋頁面讀取的方式一致。
#[derive(Debug, Clone)]
pub struct SearchLinkBuilder<C: PayloadCompressor = LzStringCompressor> {
    base_url: String,
    compressor: C,
}

impl SearchLinkBuilder<LzStringCompressor> {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_compressor(base_url, LzStringCompressor)
    }
}

impl Default for SearchLinkBuilder<LzStringCompressor> {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl<C: PayloadCompressor> SearchLinkBuilder<C> {
    pub fn with_compressor(base_url: impl Into<String>, compressor: C) -> Self {
        Self {
            base_url: base_url.into(),
            compressor,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build(&self, filter: &CompanyFilter) -> Result<SearchLink> {
        let filter_string = render_filter_string(filter)?;
        tracing::debug!("Filter string: {}", filter_string);

        let payload = self.compressor.compress(&filter_string);
        let url = format!("{}?{}=", self.base_url, payload);

        tracing::info!(
            companies = filter.companies.len(),
            enabled = filter.enabled,
            "Built search link"
        );

        Ok(SearchLink {
            url,
            payload,
            filter_string,
        })
    }

    /// 從既有連結還原篩選條件
    pub fn decode(&self, link: &str) -> Result<CompanyFilter> {
        let url = Url::parse(link)
            .map_err(|e| LinkError::malformed_link(link, format!("invalid URL: {}", e)))?;

        let query = url
            .query()
            .ok_or_else(|| LinkError::malformed_link(link, "missing query string"))?;

        // build() 在 payload 之後補了一個 '='
        let payload = query
            .strip_suffix('=')
            .ok_or_else(|| LinkError::malformed_link(link, "missing trailing '='"))?;

        if payload.is_empty() {
            return Err(LinkError::malformed_link(link, "empty payload"));
        }

        tracing::debug!(payload_len = payload.len(), "Decoding search link");

        let filter_string = self.compressor.decompress(payload)?;

        // 錯誤訊息要指向使用者給的連結，而非解壓後的內容
        parse_filter_string(&filter_string).map_err(|e| match e {
            LinkError::MalformedLinkError { reason, .. } => LinkError::malformed_link(link, reason),
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOLDEN_PAYLOAD: &str = "GYSwNgLgpgTgzgXgN4CIDGB7AtgBwIYB2IUcAggQJ4DywAagIwoBcqmuhxczA2injjjhQ8YEAQDmAOjYoANCgIYA7kLQBXGFGnY5KHDGwYC23SAC0cfWIjasugEYYwGA7d3i1eGABM4AR09NN3k0WAgMOAxgCCUvLRkQ5zVvLDw4AGtglHsoTAICXJs8EBQAXXkoAjx7MChvZggYNSgAXxagA===";

    struct LengthCompressor;

    impl PayloadCompressor for LengthCompressor {
        fn compress(&self, text: &str) -> String {
            text.len().to_string()
        }

        fn decompress(&self, _payload: &str) -> Result<String> {
            Ok(r#"filters={"companiesAnyOfV1":{"companies":["stub.io"],"enabled":true}}"#.to_string())
        }
    }

    #[test]
    fn test_build_default_companies() {
        let link = SearchLinkBuilder::default()
            .build(&CompanyFilter::new(DEFAULT_COMPANIES))
            .unwrap();

        assert_eq!(link.payload, GOLDEN_PAYLOAD);
        assert_eq!(
            link.url,
            format!("http://localhost:3000/search/companies?{}=", GOLDEN_PAYLOAD)
        );
        assert!(link.filter_string.starts_with(r#"filters={"companiesAnyOfV1":{"companies":["appsealing.com","#));
    }

    #[test]
    fn test_build_uses_injected_compressor() {
        let builder = SearchLinkBuilder::with_compressor("https://example.com/s", LengthCompressor);
        let filter = CompanyFilter::new(["stub.io"]);
        let link = builder.build(&filter).unwrap();

        let expected_len = link.filter_string.len();
        assert_eq!(link.url, format!("https://example.com/s?{}=", expected_len));
        assert_eq!(builder.decode(&link.url).unwrap(), filter);
    }

    #[test]
    fn test_decode_golden_link() {
        let link = format!("{}?{}=", DEFAULT_BASE_URL, GOLDEN_PAYLOAD);
        let filter = SearchLinkBuilder::default().decode(&link).unwrap();
        assert_eq!(filter, CompanyFilter::new(DEFAULT_COMPANIES));
    }

    #[test]
    fn test_decode_rejects_malformed_links() {
        let builder = SearchLinkBuilder::default();
        for link in [
            "not a link",
            "http://localhost:3000/search/companies",
            "http://localhost:3000/search/companies?abc",
            "http://localhost:3000/search/companies?=",
        ] {
            let err = builder.decode(link).unwrap_err();
            assert!(matches!(err, LinkError::MalformedLinkError { .. }), "{link}: {err:?}");
        }
    }

    #[test]
    fn test_decode_error_reports_original_link() {
        let link = format!(
            "{}?{}=",
            DEFAULT_BASE_URL,
            LzStringCompressor.compress(r#"{"companiesAnyOfV1":{}}"#)
        );

        match SearchLinkBuilder::default().decode(&link).unwrap_err() {
            LinkError::MalformedLinkError { link: reported, reason } => {
                assert_eq!(reported, link);
                assert!(reason.contains("filters="), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
