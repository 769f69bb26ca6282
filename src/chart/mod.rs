//! Sales Chart
//!
//! Turns the monthly sales of a view state into a single-series area chart
//! and draws it on a chart surface.
//!
//! - [`ChartOptions`]: the data/options contract (ApexCharts shape)
//! - [`ChartSurface`]: where charts are drawn
//! - [`ChartRenderer`]: the render adapter used by the dashboard controller
//! - [`HtmlSurface`]: writes standalone chart pages to a directory

mod format;
mod html;
mod options;
mod render;
mod surface;

pub use format::CurrencyFormat;
pub use html::{is_valid_target, render_page, HtmlSurface, DEFAULT_LIBRARY_URL};
pub use options::{ChartKind, ChartOptions, ChartSpec, ChartStyle, Series, XAxis};
pub use render::{ChartRenderer, RenderOutcome, DEFAULT_CHART_TARGET};
pub use surface::{ChartSurface, RenderError};
