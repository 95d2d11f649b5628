use std::sync::Arc;

use eframe::egui::{Image, RichText, Spinner, Ui, Vec2};
use strum::IntoEnumIterator;

use crate::analysis::chart_series::build_chart_series;
use crate::config::{DF, PLOT_CONFIG};
use crate::data::{FetchState, MarketDataProvider, Subscription, TaskSpawner};
use crate::domain::{Currency, TimeRange};
use crate::models::{ChartPoint, Coin};
use crate::ui::price_chart::show_price_chart;
use crate::ui::{TrendColor, UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{LocaleFormat, MoneyFormat, percent};

type ChartKey = (String, TimeRange, Currency);

/// Range choice and price history for whichever coin the app has selected.
/// The coin itself is borrowed from the app state on every call.
pub(crate) struct DetailView {
    range: TimeRange,
    chart: Subscription<ChartKey, Vec<ChartPoint>>,
}

impl Default for DetailView {
    fn default() -> Self {
        Self {
            range: TimeRange::default(),
            chart: Subscription::new("price_history"),
        }
    }
}

impl DetailView {
    #[cfg(test)]
    pub(crate) fn range(&self) -> TimeRange {
        self.range
    }

    pub(crate) fn set_range(&mut self, range: TimeRange) {
        if range != self.range {
            #[cfg(debug_assertions)]
            if DF.log_selection {
                log::info!("Chart range {} -> {}", self.range, range);
            }
            self.range = range;
        }
    }

    /// Fetches whenever coin, range or currency differs from the last request.
    pub(crate) fn sync(
        &mut self,
        coin: &Coin,
        currency: Currency,
        provider: &Arc<dyn MarketDataProvider>,
        spawner: &TaskSpawner,
    ) -> bool {
        let provider = Arc::clone(provider);
        let key = (coin.id.clone(), self.range, currency);
        self.chart.sync(key, spawner, move |(id, range, currency)| {
            let id = id.clone();
            let days = range.days();
            let currency = *currency;
            async move {
                let points = provider.price_history(&id, days, currency).await?;
                Ok(crate::trace_time!("Build chart series", 2000, {
                    build_chart_series(&points, days)
                }))
            }
        })
    }

    #[cfg(test)]
    pub(crate) fn chart_state(&self) -> &FetchState<Vec<ChartPoint>> {
        self.chart.state()
    }

    #[cfg(test)]
    pub(crate) fn subscription_mut(&mut self) -> &mut Subscription<ChartKey, Vec<ChartPoint>> {
        &mut self.chart
    }

    /// Returns true when the user asked to go back to the list.
    pub(crate) fn show(&mut self, ui: &mut Ui, coin: &Coin, currency: Currency) -> bool {
        let fmt = LocaleFormat::new(currency);
        let back = ui.button(&UI_TEXT.detail_back).clicked();
        ui.add_space(8.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            render_summary(ui, coin, &fmt);
            ui.add_space(12.0);
            render_stats(ui, coin, &fmt);
        });
        ui.add_space(12.0);

        UI_CONFIG.card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            if let Some(range) = render_range_buttons(ui, self.range) {
                self.set_range(range);
            }
            ui.add_space(8.0);

            let range = self.range;
            match self.chart.poll() {
                FetchState::Idle | FetchState::Loading => {
                    ui.vertical_centered(|ui| {
                        ui.add_space(PLOT_CONFIG.chart_height / 2.0 - 16.0);
                        ui.add(Spinner::new().size(32.0));
                    });
                }
                FetchState::Failed(message) => ui.label_error(message),
                FetchState::Success(points) if points.is_empty() => {
                    ui.label_subdued(&UI_TEXT.chart_empty)
                }
                FetchState::Success(points) => show_price_chart(ui, points, range, fmt),
            }
        });

        back
    }
}

fn render_summary(ui: &mut Ui, coin: &Coin, fmt: &dyn MoneyFormat) {
    ui.horizontal(|ui| {
        ui.add(
            Image::new(coin.image.as_str())
                .fit_to_exact_size(Vec2::splat(UI_CONFIG.detail_icon_size))
                .corner_radius(UI_CONFIG.detail_icon_size / 2.0),
        );
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&coin.name)
                        .size(22.0)
                        .strong()
                        .color(UI_CONFIG.colors.heading),
                );
                ui.label_subdued(coin.ticker());
            });
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(fmt.precise_price(coin.current_price))
                        .size(26.0)
                        .strong()
                        .color(PLOT_CONFIG.color_text_primary),
                );
                let trend = coin.trend();
                ui.label(
                    RichText::new(format!(
                        "{} {}",
                        trend.arrow(),
                        percent(coin.price_change_percentage_24h)
                    ))
                    .size(16.0)
                    .color(trend.color()),
                );
            });
        });
    });
}

fn render_stats(ui: &mut Ui, coin: &Coin, fmt: &dyn MoneyFormat) {
    let neutral = PLOT_CONFIG.color_text_neutral;
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 32.0;
        ui.metric(&UI_TEXT.detail_rank, &coin.rank_label(), neutral);
        ui.metric(&UI_TEXT.detail_market_cap, &fmt.compact(coin.market_cap), neutral);
        ui.metric(&UI_TEXT.detail_volume, &fmt.compact(coin.total_volume), neutral);
        ui.metric(&UI_TEXT.detail_high, &fmt.plain(coin.high_24h), PLOT_CONFIG.color_up);
        ui.metric(&UI_TEXT.detail_low, &fmt.plain(coin.low_24h), PLOT_CONFIG.color_down);
        ui.metric(
            &UI_TEXT.detail_change,
            &percent(coin.price_change_percentage_24h),
            coin.trend().color(),
        );
    });
}

fn render_range_buttons(ui: &mut Ui, current: TimeRange) -> Option<TimeRange> {
    let mut chosen = None;
    ui.horizontal(|ui| {
        for range in TimeRange::iter() {
            let selected = range == current;
            if ui.selectable_label(selected, range.to_string()).clicked() && !selected {
                chosen = Some(range);
            }
        }
    });
    chosen
}
