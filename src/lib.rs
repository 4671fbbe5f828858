pub mod app;
pub mod browser;
pub mod click;
pub mod config;
pub mod effect;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod navigation;
pub mod push;
pub mod state;
pub mod storage;
pub mod ui;
pub mod worker;

pub use app::router;
pub use effect::Effect;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
pub use worker::{Platform, ServiceWorker, WorkerEvent};
