use std::path::PathBuf;

/// Shared handler state. The artifact is re-read on every dashboard
/// request rather than cached, so the only thing worth sharing is where to
/// find it.
#[derive(Clone)]
pub struct AppState {
    pub data_path: PathBuf,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        Self { data_path }
    }
}
