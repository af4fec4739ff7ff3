use crate::shared::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Messages understood by the persistence bridge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BridgeRequest {
    /// Replace the stored results with `data`
    SaveResults { data: Value },
    /// Fetch the last stored results
    GetResults,
    /// Hand an export payload to the background side (echoed back unchanged)
    ExportData { data: Value },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeStatus {
    #[serde(rename = "ok")]
    Ok,
    #[serde(rename = "export_handled")]
    ExportHandled,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BridgeResponse {
    pub status: BridgeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl BridgeResponse {
    pub fn ok() -> Self {
        Self {
            status: BridgeStatus::Ok,
            data: None,
        }
    }

    pub fn ok_with(data: Value) -> Self {
        Self {
            status: BridgeStatus::Ok,
            data: Some(data),
        }
    }

    pub fn export_handled(data: Value) -> Self {
        Self {
            status: BridgeStatus::ExportHandled,
            data: Some(data),
        }
    }
}

/// ResultStore port: the single-slot persistence bridge
///
/// Holds at most one stored run. Every save replaces the previous value
/// (last write wins) and records when it was written.
pub trait ResultStore {
    /// Overwrites the slot with `data`
    ///
    /// # Errors
    /// Returns an error if the durable store cannot be written
    fn save(&self, data: Value) -> Result<()>;

    /// Reads the slot, `None` when nothing was ever stored
    ///
    /// # Errors
    /// Returns an error if the durable store exists but cannot be read
    fn load(&self) -> Result<Option<Value>>;

    /// Answers one bridge message
    ///
    /// `GET_RESULTS` on an empty store answers with an empty array.
    fn handle(&self, request: BridgeRequest) -> Result<BridgeResponse> {
        match request {
            BridgeRequest::SaveResults { data } => {
                self.save(data)?;
                Ok(BridgeResponse::ok())
            }
            BridgeRequest::GetResults => Ok(BridgeResponse::ok_with(
                self.load()?.unwrap_or_else(|| Value::Array(Vec::new())),
            )),
            BridgeRequest::ExportData { data } => Ok(BridgeResponse::export_handled(data)),
        }
    }
}
