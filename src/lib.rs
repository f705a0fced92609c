pub mod completion;
pub mod config;
pub mod error;
pub mod grading;
pub mod handlers;
pub mod models;
pub mod parsing;
pub mod prompts;
pub mod startup;
pub mod subjects;
pub mod telemetry;

pub use startup::{build_router, AppState};
