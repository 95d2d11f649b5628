use eframe::egui::Color32;
use egui_plot::{HLine, Line, LineStyle, MarkerShape, PlotPoints, PlotUi, Points};

use crate::config::PLOT_CONFIG;
use crate::domain::TimeRange;
use crate::models::ChartPoint;
use crate::ui::ui_text::UI_TEXT;
use crate::utils::min_max_indices;

/// Everything a layer needs to draw itself.
pub(crate) struct LayerContext<'a> {
    pub points: &'a [ChartPoint],
    pub range: TimeRange,
}

pub(crate) trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. PRICE SERIES
// ============================================================================
pub(crate) struct PriceSeriesLayer;

impl PlotLayer for PriceSeriesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let series: PlotPoints = ctx
            .points
            .iter()
            .enumerate()
            .map(|(i, p)| [i as f64, p.price])
            .collect();

        plot_ui.line(
            Line::new("Price", series)
                .color(PLOT_CONFIG.price_line_color)
                .width(PLOT_CONFIG.price_line_width),
        );
    }
}

// ============================================================================
// 2. OPEN REFERENCE LINE (24H only)
// ============================================================================
pub(crate) struct OpenLineLayer;

impl PlotLayer for OpenLineLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.range != TimeRange::Day {
            return;
        }
        if let Some(first) = ctx.points.first() {
            plot_ui.hline(
                HLine::new(UI_TEXT.chart_open_line.as_str(), first.price)
                    .color(PLOT_CONFIG.open_line_color)
                    .width(1.0)
                    .style(LineStyle::Dashed { length: 6.0 }),
            );
        }
    }
}

// ============================================================================
// 3. SESSION HIGH / LOW MARKERS
// ============================================================================
pub(crate) struct ExtremesLayer;

impl ExtremesLayer {
    fn marker(
        plot_ui: &mut PlotUi,
        name: &str,
        x: usize,
        y: f64,
        color: Color32,
        shape: MarkerShape,
    ) {
        plot_ui.points(
            Points::new(name, vec![[x as f64, y]])
                .shape(shape)
                .filled(true)
                .radius(PLOT_CONFIG.marker_radius)
                .color(color),
        );
    }
}

impl PlotLayer for ExtremesLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let prices: Vec<f64> = ctx.points.iter().map(|p| p.price).collect();
        let Some((lo, hi)) = min_max_indices(&prices) else {
            return;
        };
        if lo == hi {
            return; // flat series, nothing to mark
        }
        Self::marker(
            plot_ui,
            &UI_TEXT.chart_high_marker,
            hi,
            prices[hi],
            PLOT_CONFIG.high_marker_color,
            MarkerShape::Up,
        );
        Self::marker(
            plot_ui,
            &UI_TEXT.chart_low_marker,
            lo,
            prices[lo],
            PLOT_CONFIG.low_marker_color,
            MarkerShape::Down,
        );
    }
}

/// Layers for a given range, bottom to top.
pub(crate) fn layer_stack(range: TimeRange) -> Vec<Box<dyn PlotLayer>> {
    let mut layers: Vec<Box<dyn PlotLayer>> = Vec::with_capacity(3);
    if range == TimeRange::Day {
        layers.push(Box::new(OpenLineLayer));
    }
    layers.push(Box::new(PriceSeriesLayer));
    layers.push(Box::new(ExtremesLayer));
    layers
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_line_only_on_day_range() {
        assert_eq!(layer_stack(TimeRange::Day).len(), 3);
        assert_eq!(layer_stack(TimeRange::Week).len(), 2);
        assert_eq!(layer_stack(TimeRange::Max).len(), 2);
    }
}
