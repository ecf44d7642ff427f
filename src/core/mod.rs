pub mod link;

pub use crate::domain::model::{CompanyFilter, SearchLink};
pub use crate::domain::ports::PayloadCompressor;
pub use crate::utils::error::Result;
pub use link::{SearchLinkBuilder, DEFAULT_BASE_URL, DEFAULT_COMPANIES};
