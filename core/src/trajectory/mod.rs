//! Trajectory recording for query execution

pub mod entry;
pub mod recorder;

pub use entry::{TrajectoryEntry, TrajectoryEntryKind};
pub use recorder::{Trajectory, TrajectoryMetadata, TrajectoryRecorder};
