//! GUI input adapter for the interactive canvas.
//!
//! This module provides a windowed interface using winit for window management,
//! pixels for framebuffer rendering, and egui for the control bar and HUD.

pub mod app;
pub mod commands;
