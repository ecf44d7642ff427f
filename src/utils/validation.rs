use crate::utils::error::{LinkError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 搜尋連結的前綴：必須是 http(s)，且不能已帶 query 或 fragment
pub fn validate_base_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(LinkError::invalid_value(field_name, url_str, "URL cannot be empty"));
    }

    let url = Url::parse(url_str).map_err(|e| {
        LinkError::invalid_value(field_name, url_str, format!("Invalid URL format: {}", e))
    })?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(LinkError::invalid_value(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            ))
        }
    }

    if url.query().is_some() || url.fragment().is_some() {
        return Err(LinkError::invalid_value(
            field_name,
            url_str,
            "Base URL must not contain a query string or fragment",
        ));
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LinkError::invalid_value(
            field_name,
            value,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_domains(field_name: &str, domains: &[String]) -> Result<()> {
    if domains.is_empty() {
        return Err(LinkError::MissingConfigError {
            field: field_name.to_string(),
        });
    }

    for (index, domain) in domains.iter().enumerate() {
        validate_non_empty_string(&format!("{}[{}]", field_name, index), domain)?;
    }

    Ok(())
}
