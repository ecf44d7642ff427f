use crate::utils::error::Result;

/// 篩選字串與 URL payload 之間的壓縮編碼
pub trait PayloadCompressor: Send + Sync {
    fn compress(&self, text: &str) -> String;
    fn decompress(&self, payload: &str) -> Result<String>;
}
