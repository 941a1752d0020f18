//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe. It only reads
//! the session and forwards clicks; all rules live in [`crate::game`].

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
