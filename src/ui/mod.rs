//! GUI module for the Zobang game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::ZobangApp;
pub use session::{GameOutcome, Session};
