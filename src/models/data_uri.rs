use crate::errors::{AppError, AppResult};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde::{Deserialize, Serialize};

/// Self-contained, text-embeddable image payload (`data:<mime>;base64,<data>`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataUri(String);

impl DataUri {
    pub fn encode(mime: &str, bytes: &[u8]) -> Self {
        DataUri(format!("data:{mime};base64,{}", B64.encode(bytes)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn mime(&self) -> Option<&str> {
        let rest = self.0.strip_prefix("data:")?;
        let (header, _) = rest.split_once(',')?;
        Some(header.split(';').next().unwrap_or(header))
    }

    /// Decode the base64 payload back to raw bytes.
    pub fn decode(&self) -> AppResult<Vec<u8>> {
        let (header, payload) = self
            .0
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .ok_or_else(|| AppError::Image("not a data URI".to_string()))?;

        if !header.ends_with(";base64") {
            return Err(AppError::Image(format!(
                "unsupported data URI encoding: {header}"
            )));
        }

        B64.decode(payload.trim())
            .map_err(|e| AppError::Image(format!("invalid base64 payload: {e}")))
    }

    /// Payload size in bytes, estimated from the base64 length.
    pub fn approx_len(&self) -> usize {
        self.0
            .split_once(',')
            .map(|(_, p)| p.len() / 4 * 3)
            .unwrap_or(0)
    }
}

impl From<String> for DataUri {
    fn from(s: String) -> Self {
        DataUri(s)
    }
}
