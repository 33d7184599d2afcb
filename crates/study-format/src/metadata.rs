use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Run metadata stored alongside the study domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyMetadata {
    /// Human-readable study name, e.g. the run mode.
    pub name: String,
    /// Unique per generation run.
    pub run_id: Uuid,
    pub created: DateTime<Utc>,
}

impl StudyMetadata {
    /// Metadata with a fresh run id and the current timestamp.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            run_id: Uuid::new_v4(),
            created: Utc::now(),
        }
    }
}
