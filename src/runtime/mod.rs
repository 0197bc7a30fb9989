//! Runtime module - winit/platform integration
//!
//! - `app` - ApplicationHandler, window management and pointer routing

pub mod app;

pub use app::App;
