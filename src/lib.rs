//! Parlor — a terminal arcade of small reflex games.
//!
//! This library exposes the game logic for testing and external use; the UI
//! layer lives with the binary.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod build_info;
pub mod config;
pub mod games;
pub mod menu;
pub mod scores;
