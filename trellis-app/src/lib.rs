//! Host layer for the trellis boards.
//!
//! Everything durable lives behind the remote API; this crate owns the
//! wiring between it and the board engine: the API client and its
//! persistence-seam writers, the two board controllers (projects and
//! tasks), the persisted configuration, and the toast queue the UI drains.
//! Rendering itself belongs to the embedding shell.

pub mod api;
pub mod config;
pub mod controller;
mod error;
pub mod project;
pub mod state;
pub mod task;
pub mod telemetry;
pub mod toast;

pub use api::{ApiClient, HttpGroupFieldWriter, Resource, TeamMember};
pub use config::AppConfig;
pub use controller::BoardController;
pub use error::{AppError, Result};
pub use project::Project;
pub use state::AppState;
pub use task::Task;
pub use toast::{Toast, ToastKind, ToastQueue};
