#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod error;
pub mod grid;
pub mod input;
pub mod paint;
pub mod panels;
pub mod state;
pub mod toolbar;
pub mod util;

pub use app::PixelGridApp;
pub use color::{ColorMode, ColorProvider};
pub use error::ResizeError;
pub use grid::{Cell, CellId, Grid};
pub use input::{InputEvent, InputHandler};
pub use paint::{GestureHandler, PaintContext, PaintState, PaintStateMachine, ScrollPolicy};
pub use state::SketchState;
pub use toolbar::ToolbarController;
