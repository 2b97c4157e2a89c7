use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde_derive::Serialize;
use thiserror::Error;

use super::{
    label::Label,
    stage::Stage,
    status::{Status, StatusDetails},
};

#[derive(Debug, Serialize, Clone, Builder)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    uuid: uuid::Uuid,
    name: String,
    full_name: String,
    status: Status,
    #[builder(default)]
    status_details: StatusDetails,
    #[builder(default = "Stage::Finished")]
    stage: Stage,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default = "None")]
    description: Option<String>,
    #[builder(default = "Vec::new()")]
    labels: Vec<Label>,
    #[serde(with = "crate::reporter::serialize::timestamp_millis")]
    start: DateTime<Utc>,
    #[serde(with = "crate::reporter::serialize::timestamp_millis")]
    stop: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl TestResult {
    pub fn builder() -> TestResultBuilder {
        TestResultBuilder::default()
    }

    /// Writes `<dir>/<uuid>-result.json` and returns its path.
    pub fn save_into(&self, dir: &Path) -> Result<PathBuf, SaveError> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}-result.json", self.uuid));
        let mut writer = BufWriter::new(File::create(&path)?);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(path)
    }

    pub fn uuid(&self) -> uuid::Uuid {
        self.uuid
    }
}
