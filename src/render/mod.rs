//! # Rendering
//!
//! Results table, scatter chart and the full dashboard page.

pub mod chart;
pub mod content;
pub mod page;
pub mod table;
pub mod theme;

pub use chart::{Axis, ChartLayout, ScatterChart, ScatterPoint};
pub use page::render_page;
pub use theme::Theme;
