use crate::errors::AppError;
use crate::models::DashboardData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("DASHBOARD_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/dashboard_data.json")
}

/// One fetch of the crawler artifact. Single attempt, no retry: a missing
/// or malformed file is surfaced to the caller so the page can show its
/// error placeholders.
pub async fn load_artifact(path: &Path) -> Result<DashboardData, AppError> {
    let bytes = fs::read(path).await.map_err(|err| {
        error!("failed to read dashboard artifact {}: {err}", path.display());
        AppError::bad_gateway("dashboard data is unavailable")
    })?;

    serde_json::from_slice(&bytes).map_err(|err| {
        error!("failed to parse dashboard artifact {}: {err}", path.display());
        AppError::bad_gateway("dashboard data is malformed")
    })
}
