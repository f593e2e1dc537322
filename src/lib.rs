pub mod app;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod scorer;
pub mod state;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
