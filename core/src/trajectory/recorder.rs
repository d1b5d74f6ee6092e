//! Trajectory recorder implementation

use crate::error::Result;
use crate::trajectory::TrajectoryEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::RwLock;

/// Records query trajectories for debugging and analysis
pub struct TrajectoryRecorder {
    entries: RwLock<Vec<TrajectoryEntry>>,
    metadata: RwLock<TrajectoryMetadata>,
    file_path: Option<PathBuf>,
    auto_save: bool,
}

/// Complete trajectory data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    /// Metadata about the trajectory
    pub metadata: TrajectoryMetadata,

    /// All trajectory entries
    pub entries: Vec<TrajectoryEntry>,
}

/// Metadata for a trajectory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryMetadata {
    /// Unique identifier for this trajectory
    pub id: String,

    /// When the trajectory was started
    pub started_at: DateTime<Utc>,

    /// When the trajectory was completed (if completed)
    pub completed_at: Option<DateTime<Utc>>,

    /// Version of the trajectory format
    pub version: String,

    /// Whether the last recorded query ended with an answer
    pub answered: Option<bool>,
}

impl TrajectoryMetadata {
    fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            started_at: Utc::now(),
            completed_at: None,
            version: crate::VERSION.to_string(),
            answered: None,
        }
    }
}

impl TrajectoryRecorder {
    /// Create a new in-memory trajectory recorder
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            metadata: RwLock::new(TrajectoryMetadata::new()),
            file_path: None,
            auto_save: false,
        }
    }

    /// Create a trajectory recorder that saves to a file after each entry
    pub fn with_file<P: AsRef<Path>>(path: P) -> Self {
        Self {
            entries: RwLock::new(Vec::new()),
            metadata: RwLock::new(TrajectoryMetadata::new()),
            file_path: Some(path.as_ref().to_path_buf()),
            auto_save: true,
        }
    }

    /// Record a trajectory entry
    pub async fn record(&self, entry: TrajectoryEntry) -> Result<()> {
        if let crate::trajectory::TrajectoryEntryKind::QueryComplete { answered, .. } = &entry.kind
        {
            let mut metadata = self.metadata.write().await;
            metadata.completed_at = Some(Utc::now());
            metadata.answered = Some(*answered);
        }

        {
            let mut entries = self.entries.write().await;
            entries.push(entry);
        }

        if self.auto_save {
            self.save().await?;
        }

        Ok(())
    }

    /// Get all recorded entries
    pub async fn get_entries(&self) -> Vec<TrajectoryEntry> {
        self.entries.read().await.clone()
    }

    /// Get the number of recorded entries
    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Save the trajectory to file
    pub async fn save(&self) -> Result<()> {
        if let Some(path) = &self.file_path {
            let trajectory = self.build_trajectory().await;
            let json = serde_json::to_string_pretty(&trajectory)?;
            fs::write(path, json).await?;
        }
        Ok(())
    }

    /// Build the complete trajectory snapshot
    async fn build_trajectory(&self) -> Trajectory {
        Trajectory {
            metadata: self.metadata.read().await.clone(),
            entries: self.entries.read().await.clone(),
        }
    }
}

impl Default for TrajectoryRecorder {
    fn default() -> Self {
        Self::new()
    }
}
