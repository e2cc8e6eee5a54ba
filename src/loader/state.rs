use serde::{Deserialize, Serialize};

use crate::catalog::Record;

/// The only message a failed load ever shows, whatever the cause.
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong!";

/// Where one activation of a loader stands.
///
/// Starts at `Loading` and moves exactly once, to `Failed` or `Ready`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Loading,
    Failed {
        message: String,
    },
    Ready {
        records: Vec<Record>,
    },
}

impl LoadState {
    /// `Failed` with the generic message.
    pub fn failed() -> Self {
        LoadState::Failed {
            message: GENERIC_FAILURE_MESSAGE.to_string(),
        }
    }

    pub fn ready(records: Vec<Record>) -> Self {
        LoadState::Ready { records }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, LoadState::Failed { .. })
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready { .. })
    }

    /// The loaded records, if ready.
    pub fn records(&self) -> Option<&[Record]> {
        match self {
            LoadState::Ready { records } => Some(records),
            _ => None,
        }
    }

    /// The failure message, if failed.
    pub fn message(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }
}
