//! Mochi Render Data Library
//!
//! A read-only view of a live terminal session for the rendering engine.
//! This crate provides:
//!
//! - `core`: Session model (text buffers, cursor, palette, IME, selection)
//! - `console`: The lock-protected session handle shared with the I/O side
//! - `render`: The `RenderData` query contract and its provider
//! - `app`: Session configuration

pub mod app;
pub mod console;
pub mod core;
pub mod render;
