use crate::dashboard::{DashboardView, build_dashboard};
use crate::errors::AppError;
use crate::state::AppState;
use crate::storage::load_artifact;
use crate::ui::render_index;
use axum::{Json, extract::State, response::Html};

pub async fn index() -> Html<&'static str> {
    Html(render_index())
}

/// Fetches the artifact and runs one full render pass. Per-section
/// degradation happens inside `build_dashboard`; only a failed fetch or
/// parse reaches the client as an error.
pub async fn get_dashboard(
    State(state): State<AppState>,
) -> Result<Json<DashboardView>, AppError> {
    let data = load_artifact(&state.data_path).await?;
    Ok(Json(build_dashboard(&data)))
}

pub async fn health() -> &'static str {
    "ok"
}
