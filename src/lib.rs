pub mod app;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod grid;
pub mod logging;
pub mod ui;

pub use crate::core::models::{NormalizedScheduleBlock, RawScheduleBlock};
pub use crate::grid::{CellRenderInstruction, GridBuilder, LegendEntry, WeeklyGrid, build_grid};
