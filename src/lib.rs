//! Endless runner simulation core.
//!
//! The host (see `main.rs` for the terminal one) builds a `Session`, feeds it
//! jump requests, elapsed wall-clock time and frame ticks, and implements
//! `Surface` so the session can draw.

pub mod collision;
pub mod compute;
pub mod config;
pub mod entities;
pub mod error;
pub mod render;
pub mod session;
pub mod spawner;
pub mod surface;
pub mod timers;

pub use config::GameConfig;
pub use error::ConfigError;
pub use session::Session;
