use thiserror::Error;

/// 壓縮 payload 無法還原的原因
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    #[error("compressed payload is empty")]
    Empty,

    #[error("payload is not valid lz-string base64 (truncated or altered)")]
    Undecodable,

    #[error("decompressed data is not valid UTF-16")]
    InvalidUtf16,
}

#[derive(Error, Debug)]
pub enum LinkError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Payload error: {0}")]
    PayloadError(#[from] PayloadError),

    #[error("Failed to parse config '{path}': {message}")]
    ConfigParseError { path: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Malformed search link '{link}': {reason}")]
    MalformedLinkError { link: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Encoding,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LinkError {
    pub fn invalid_value(field: &str, value: &str, reason: impl Into<String>) -> Self {
        LinkError::InvalidConfigValueError {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn malformed_link(link: &str, reason: impl Into<String>) -> Self {
        LinkError::MalformedLinkError {
            link: link.to_string(),
            reason: reason.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            LinkError::ConfigParseError { .. }
            | LinkError::MissingConfigError { .. }
            | LinkError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            LinkError::SerializationError(_)
            | LinkError::PayloadError(_)
            | LinkError::MalformedLinkError { .. } => ErrorCategory::Encoding,
            LinkError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Encoding => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    /// 依嚴重程度決定 CLI 的退出碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LinkError::IoError(e) => format!("Could not read input: {}", e),
            LinkError::SerializationError(e) => format!("Filter JSON is invalid: {}", e),
            LinkError::PayloadError(e) => format!("Compressed payload could not be decoded: {}", e),
            LinkError::ConfigParseError { path, .. } => {
                format!("Config file '{}' is not valid TOML", path)
            }
            LinkError::MissingConfigError { field } => {
                format!("'{}' must be provided", field)
            }
            LinkError::InvalidConfigValueError { field, reason, .. } => {
                format!("'{}' is invalid: {}", field, reason)
            }
            LinkError::MalformedLinkError { reason, .. } => {
                format!("Not a search link: {}", reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LinkError::IoError(_) => "Check that the file exists and is readable",
            LinkError::SerializationError(_) => {
                "Make sure the payload was produced by this tool or the search page"
            }
            LinkError::PayloadError(_) => "Copy the full link, including the trailing '='",
            LinkError::ConfigParseError { .. } => "Fix the TOML syntax in the config file",
            LinkError::MissingConfigError { .. } => {
                "Pass the value on the command line or add it to the config file"
            }
            LinkError::InvalidConfigValueError { .. } => {
                "Use an http(s) base URL without a query and at least one non-blank domain"
            }
            LinkError::MalformedLinkError { .. } => {
                "Pass a link of the form <base-url>?<payload>="
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, LinkError>;
