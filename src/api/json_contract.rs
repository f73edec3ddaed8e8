use serde::{Deserialize, Serialize};

use crate::error::{ScaleError, ScaleResult};

use super::ScaleSnapshot;

pub const SCALE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: ScaleSnapshot,
}

impl ScaleSnapshot {
    pub fn to_json_pretty(&self) -> ScaleResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize scale snapshot: {e}"))
        })
    }

    pub fn to_json_contract_v1_pretty(&self) -> ScaleResult<String> {
        let payload = ScaleSnapshotJsonContractV1 {
            schema_version: SCALE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ScaleError::InvalidData(format!("failed to serialize scale snapshot contract v1: {e}"))
        })
    }

    /// Accepts either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> ScaleResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<ScaleSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: ScaleSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ScaleError::InvalidData(format!("failed to parse scale snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SCALE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ScaleError::InvalidData(format!(
                "unsupported scale snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
