pub mod aggregate;
pub mod app;
pub mod chart;
pub mod dashboard;
pub mod dataset;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod palette;
pub mod routes;
pub mod state;
pub mod storage;
pub mod tables;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::resolve_data_path;
