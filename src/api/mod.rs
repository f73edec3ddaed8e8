mod config;
mod json_contract;
mod snapshot;

pub use config::ScaleConfig;
pub use json_contract::{SCALE_SNAPSHOT_JSON_SCHEMA_V1, ScaleSnapshotJsonContractV1};
pub use snapshot::ScaleSnapshot;
