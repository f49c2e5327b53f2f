#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod engine;
pub mod error;
pub mod fill;
pub mod input;
pub mod panels;
pub mod raster;
pub mod state;
pub mod style;
pub mod surface;
pub mod texture;
pub mod tools;

pub use app::PaintApp;
pub use command::Command;
pub use config::PaintConfig;
pub use engine::{PaintEngine, StatusReadout};
pub use error::{PaintError, PaintResult};
pub use input::InputEvent;
pub use raster::{CompositeMode, Pen, Shape};
pub use state::{EngineState, StrokeSession};
pub use style::StyleState;
pub use surface::{Snapshot, Surface};
pub use tools::Tool;
