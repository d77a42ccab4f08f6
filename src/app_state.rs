//! Implements a struct that holds the state of the server.

use std::sync::Arc;

use crate::dataset::Dataset;

/// The state of the server.
///
/// The dataset is loaded once at startup and shared read-only between
/// handlers, so cloning the state only bumps a reference count.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The loaded, validated customer transaction dataset.
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create a new [AppState] from a loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}
