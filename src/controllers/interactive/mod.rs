//! Interactive controller for the fractal canvas.
//!
//! Input events flow through the dispatch table into [`ExplorerState`];
//! whenever a transition reports [`Redraw::Needed`] the controller renders
//! the active fractal and hands the frame to the presentation layer.
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: [`InputEvent`]s already translated to canvas space
//! - **Output**: the `InteractiveControllerPresenterPort` trait for frames
//! - **Core**: renderers from `core/` do the actual computation

mod controller;
pub mod data;
pub mod dispatch;
pub mod errors;
pub mod events;
pub mod hud;
pub mod ports;
pub mod state;

pub use controller::InteractiveController;
pub use dispatch::{Redraw, dispatch};
pub use events::input::{InputEvent, UiCommand};
pub use events::render::RenderEvent;
pub use ports::presenter::InteractiveControllerPresenterPort;
pub use state::{DragState, ExplorerState};
