//! Chart Render Adapter
//!
//! Maps a view state's monthly sales onto a chart surface.

use super::format::CurrencyFormat;
use super::options::{ChartOptions, ChartStyle};
use super::surface::{ChartSurface, RenderError};
use crate::dashboard::DashboardViewState;

/// Default element handle of the sales chart
pub const DEFAULT_CHART_TARGET: &str = "twh_sales_chart";

/// Result of a render pass
#[derive(Debug)]
pub enum RenderOutcome {
    /// Chart drawn with this many data points
    Drawn { points: usize },
    /// Render skipped; the reason was logged
    Skipped { reason: RenderError },
}

impl RenderOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, RenderOutcome::Drawn { .. })
    }
}

/// Draws the sales chart of a view state onto a fixed target
pub struct ChartRenderer {
    surface: Box<dyn ChartSurface>,
    target: String,
    style: ChartStyle,
    currency: CurrencyFormat,
    last_drawn: Option<ChartOptions>,
}

impl ChartRenderer {
    pub fn new(surface: Box<dyn ChartSurface>, target: impl Into<String>) -> Self {
        Self {
            surface,
            target: target.into(),
            style: ChartStyle::default(),
            currency: CurrencyFormat::rupiah(),
            last_drawn: None,
        }
    }

    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_currency(mut self, currency: CurrencyFormat) -> Self {
        self.currency = currency;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Chart definition for `state` without touching the surface
    pub fn build_options(&self, state: &DashboardViewState) -> ChartOptions {
        ChartOptions::sales_area(&state.monthly_sales, &self.style, &self.currency)
    }

    /// The last chart definition that reached the surface
    pub fn last_drawn(&self) -> Option<&ChartOptions> {
        self.last_drawn.as_ref()
    }

    /// Render `state`, replacing any chart already on the target.
    ///
    /// Never fails: a missing library or target, or a surface fault, is
    /// logged once and the pass is skipped.
    pub fn render(&mut self, state: &DashboardViewState) -> RenderOutcome {
        if !self.surface.library_available() {
            tracing::warn!(target_id = %self.target, "Charting library not available, skipping chart render");
            return RenderOutcome::Skipped {
                reason: RenderError::LibraryUnavailable,
            };
        }

        if !self.surface.has_target(&self.target) {
            tracing::warn!(target_id = %self.target, "Chart target not mounted, skipping chart render");
            return RenderOutcome::Skipped {
                reason: RenderError::TargetMissing(self.target.clone()),
            };
        }

        let options = self.build_options(state);

        let drawn = self
            .surface
            .clear(&self.target)
            .and_then(|_| self.surface.draw(&self.target, &options));

        if let Err(e) = drawn {
            tracing::warn!(target_id = %self.target, error = %e, "Chart render failed");
            return RenderOutcome::Skipped { reason: e };
        }

        let points = options.point_count();
        tracing::debug!(target_id = %self.target, points, "Sales chart rendered");
        self.last_drawn = Some(options);

        RenderOutcome::Drawn { points }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::SalesPoint;
    use crate::testing::{LogBuffer, RecordingSurface, SurfaceEvent};

    fn state_with_sales(sales: Vec<SalesPoint>) -> DashboardViewState {
        DashboardViewState {
            monthly_sales: sales,
            ..Default::default()
        }
    }

    #[test]
    fn test_render_draws_categories_and_amounts() {
        let surface = RecordingSurface::mounted();
        let mut renderer = ChartRenderer::new(Box::new(surface.clone()), DEFAULT_CHART_TARGET);

        let state = state_with_sales(vec![
            SalesPoint::new("Jan", 15000.0),
            SalesPoint::new("Feb", 23000.0),
        ]);
        let outcome = renderer.render(&state);

        assert!(matches!(outcome, RenderOutcome::Drawn { points: 2 }));
        let drawn = surface.last_drawn().unwrap();
        assert_eq!(drawn.categories(), ["Jan".to_string(), "Feb".to_string()]);
        assert_eq!(drawn.amounts(), [15000.0, 23000.0]);
        assert_eq!(renderer.last_drawn(), Some(&drawn));
    }

    #[test]
    fn test_render_clears_before_every_draw() {
        let surface = RecordingSurface::mounted();
        let mut renderer = ChartRenderer::new(Box::new(surface.clone()), DEFAULT_CHART_TARGET);
        let state = state_with_sales(vec![SalesPoint::new("Jan", 1.0)]);

        renderer.render(&state);
        renderer.render(&state);

        let kinds: Vec<&str> = surface
            .events()
            .iter()
            .map(|event| match event {
                SurfaceEvent::Clear(_) => "clear",
                SurfaceEvent::Draw(_, _) => "draw",
            })
            .collect();
        assert_eq!(kinds, vec!["clear", "draw", "clear", "draw"]);
    }

    #[test]
    fn test_render_empty_sales() {
        let surface = RecordingSurface::mounted();
        let mut renderer = ChartRenderer::new(Box::new(surface.clone()), DEFAULT_CHART_TARGET);

        let outcome = renderer.render(&DashboardViewState::default());

        assert!(matches!(outcome, RenderOutcome::Drawn { points: 0 }));
        assert_eq!(surface.last_drawn().unwrap().point_count(), 0);
    }

    #[test]
    fn test_render_missing_target_logs_once() {
        let surface = RecordingSurface::unmounted();
        let mut renderer = ChartRenderer::new(Box::new(surface.clone()), DEFAULT_CHART_TARGET);
        let logs = LogBuffer::default();

        let outcome = tracing::subscriber::with_default(logs.subscriber(), || {
            renderer.render(&state_with_sales(vec![SalesPoint::new("Jan", 1.0)]))
        });

        assert!(matches!(
            outcome,
            RenderOutcome::Skipped { reason: RenderError::TargetMissing(_) }
        ));
        assert!(surface.events().is_empty());
        assert!(renderer.last_drawn().is_none());
        assert_eq!(logs.count_level("WARN"), 1);
        assert_eq!(logs.count_level("ERROR"), 0);
    }

    #[test]
    fn test_render_without_library_is_noop() {
        let surface = RecordingSurface::without_library();
        let mut renderer = ChartRenderer::new(Box::new(surface.clone()), DEFAULT_CHART_TARGET);

        let outcome = renderer.render(&DashboardViewState::default());

        assert!(matches!(
            outcome,
            RenderOutcome::Skipped { reason: RenderError::LibraryUnavailable }
        ));
        assert!(surface.events().is_empty());
    }

    #[test]
    fn test_render_surface_fault_is_contained() {
        let surface = RecordingSurface::failing_draw();
        let mut renderer = ChartRenderer::new(Box::new(surface.clone()), DEFAULT_CHART_TARGET);

        let outcome = renderer.render(&DashboardViewState::default());

        assert!(matches!(outcome, RenderOutcome::Skipped { reason: RenderError::Io(_) }));
        assert!(renderer.last_drawn().is_none());
    }
}
