//! Suite Shell Library
//!
//! This library exposes the shell's state and UI modules for testing.
//! The main binary is in `src/main.rs`.

pub mod config;
pub mod error;
/// Application state management
///
/// Handles routing, the application catalog, shell services and the view
/// state of the mounted page.
pub mod state;
pub mod ui;
