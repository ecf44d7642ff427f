use crate::domain::ports::PayloadCompressor;
use crate::utils::error::{PayloadError, Result};

/// 與搜尋頁面 (lz-string `compressToBase64`) 相容的壓縮器
#[derive(Debug, Clone, Copy, Default)]
pub struct LzStringCompressor;

impl PayloadCompressor for LzStringCompressor {
    fn compress(&self, text: &str) -> String {
        let payload = lz_str::compress_to_base64(text);
        tracing::debug!(
            input_len = text.len(),
            payload_len = payload.len(),
            "Compressed filter string"
        );
        payload
    }

    fn decompress(&self, payload: &str) -> Result<String> {
        if payload.is_empty() {
            return Err(PayloadError::Empty.into());
        }

        // 截斷的 payload 可能解出空字串，篩選字串不會是空的
        let units = lz_str::decompress_from_base64(payload)
            .filter(|units| !units.is_empty())
            .ok_or(PayloadError::Undecodable)?;

        Ok(String::from_utf16(&units).map_err(|_| PayloadError::InvalidUtf16)?)
    }
}
