mod catalog_view;
mod detail_view;
mod header;
mod plot_layers;
mod price_chart;
mod styles;
mod ticker;
mod ui_config;
mod ui_text;

pub(crate) use catalog_view::CatalogView;
pub(crate) use detail_view::DetailView;
pub(crate) use header::render_header;
pub(crate) use styles::{TrendColor, UiStyleExt};
pub(crate) use ticker::TickerPanel;

pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
