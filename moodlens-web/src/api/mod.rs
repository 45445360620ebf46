//! HTTP API handlers for moodlens-web

pub mod analyze;
pub mod buildinfo;
pub mod export;
pub mod health;
pub mod history;
pub mod render;
pub mod ui;

pub use analyze::{analyze_routes, score_and_store};
pub use buildinfo::{get_build_info, BuildInfo};
pub use export::download_csv;
pub use health::health_routes;
pub use history::history_routes;
pub use ui::ui_routes;
