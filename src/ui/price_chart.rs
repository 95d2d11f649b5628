use std::sync::Arc;

use eframe::egui::{Ui, Vec2b};
use egui_plot::{AxisHints, GridMark, HPlacement, Plot, PlotPoint};

use crate::config::PLOT_CONFIG;
use crate::domain::TimeRange;
use crate::models::ChartPoint;
use crate::ui::plot_layers::{LayerContext, layer_stack};
use crate::utils::{LocaleFormat, MoneyFormat, padded_range};

/// Indices that get an x-axis label: evenly spaced, about `target` of them.
fn label_indices(len: usize, target: f64) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    let step = ((len as f64 / target).ceil() as usize).max(1);
    (0..len).step_by(step).collect()
}

/// Label for an x value, only when it sits on a data point.
fn label_at(labels: &[String], x: f64) -> Option<&str> {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return None;
    }
    labels.get(idx as usize).map(String::as_str)
}

fn y_bounds(points: &[ChartPoint]) -> (f64, f64) {
    let (min, max) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.price), hi.max(p.price))
        });
    padded_range(min, max, PLOT_CONFIG.plot_y_padding_pct)
}

/// Line chart of the series; hover shows label and full price.
pub(crate) fn show_price_chart(
    ui: &mut Ui,
    points: &[ChartPoint],
    range: TimeRange,
    fmt: LocaleFormat,
) {
    let labels: Arc<Vec<String>> = Arc::new(points.iter().map(|p| p.label.clone()).collect());
    let len = points.len();
    let (y_min, y_max) = y_bounds(points);

    let axis_labels = Arc::clone(&labels);
    let x_axis = AxisHints::new_x().formatter(move |mark, _range| {
        label_at(&axis_labels, mark.value)
            .unwrap_or_default()
            .to_string()
    });
    let y_axis = AxisHints::new_y()
        .formatter(move |mark, _range| fmt.axis(mark.value))
        .placement(HPlacement::Left);

    let hover_labels = Arc::clone(&labels);
    Plot::new("price_chart")
        .height(PLOT_CONFIG.chart_height)
        .custom_x_axes(vec![x_axis])
        .custom_y_axes(vec![y_axis])
        .x_grid_spacer(move |_input| {
            label_indices(len, PLOT_CONFIG.x_label_count)
                .into_iter()
                .map(|i| GridMark {
                    value: i as f64,
                    step_size: 1.0,
                })
                .collect()
        })
        .label_formatter(move |_name, value: &PlotPoint| {
            let idx = value.x.round().clamp(0.0, len.saturating_sub(1) as f64);
            match hover_labels.get(idx as usize) {
                Some(label) => format!("{}\n{}", label, fmt.price(value.y)),
                None => String::new(),
            }
        })
        .allow_double_click_reset(false)
        .allow_scroll(false)
        .allow_drag(Vec2b { x: false, y: false })
        .allow_zoom(Vec2b { x: false, y: false })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds_x(-0.5..=(len as f64 - 0.5).max(0.5));
            plot_ui.set_plot_bounds_y(y_min..=y_max);

            let ctx = LayerContext { points, range };
            for layer in layer_stack(range) {
                layer.render(plot_ui, &ctx);
            }
        });
}
