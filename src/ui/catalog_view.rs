use std::sync::Arc;

use eframe::egui::{Align, Button, Image, Layout, RichText, Sense, Spinner, TextEdit, Ui, Vec2};
use egui_extras::{Column, TableBuilder};

use crate::analysis::catalog::{CatalogPage, CatalogQuery};
use crate::config::{DF, MARKET, PLOT_CONFIG};
use crate::data::{FetchState, MarketDataProvider, Subscription, TaskSpawner};
use crate::domain::Currency;
use crate::models::Coin;
use crate::ui::{TrendColor, UI_CONFIG, UI_TEXT, UiStyleExt};
use crate::utils::{LocaleFormat, MoneyFormat, percent};

/// Top-100 table with search and pagination.
pub(crate) struct CatalogView {
    coins: Subscription<Currency, Vec<Coin>>,
    query: CatalogQuery,
    search_text: String,
}

impl Default for CatalogView {
    fn default() -> Self {
        Self {
            coins: Subscription::new("catalog"),
            query: CatalogQuery::new(MARKET.page_size),
            search_text: String::new(),
        }
    }
}

impl CatalogView {
    /// Fetches once per currency. A fresh coin set starts again at page 1.
    pub(crate) fn sync(
        &mut self,
        currency: Currency,
        provider: &Arc<dyn MarketDataProvider>,
        spawner: &TaskSpawner,
    ) -> bool {
        let provider = Arc::clone(provider);
        let issued = self.coins.sync(currency, spawner, move |&currency| async move {
            provider
                .list_markets(currency, 1, MARKET.catalog_size)
                .await
        });
        if issued {
            #[cfg(debug_assertions)]
            if DF.log_currency {
                log::info!("Catalog refetch for {}; page reset", currency);
            }
            self.query.reset_page();
        }
        issued
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &FetchState<Vec<Coin>> {
        self.coins.state()
    }

    #[cfg(test)]
    pub(crate) fn query(&self) -> &CatalogQuery {
        &self.query
    }

    #[cfg(test)]
    pub(crate) fn query_mut(&mut self) -> &mut CatalogQuery {
        &mut self.query
    }

    #[cfg(test)]
    pub(crate) fn subscription_mut(&mut self) -> &mut Subscription<Currency, Vec<Coin>> {
        &mut self.coins
    }

    /// Draws the catalog and returns the coin whose row was clicked.
    pub(crate) fn show(&mut self, ui: &mut Ui, currency: Currency) -> Option<Coin> {
        let fmt = LocaleFormat::new(currency);

        ui.label(
            RichText::new(&UI_TEXT.catalog_heading)
                .size(20.0)
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.add_space(8.0);

        let search = ui.add(
            TextEdit::singleline(&mut self.search_text)
                .hint_text(&UI_TEXT.catalog_search_hint)
                .desired_width(320.0),
        );
        if search.changed() {
            self.query.set_query(self.search_text.as_str());
        }
        ui.add_space(8.0);

        match self.coins.poll() {
            FetchState::Idle | FetchState::Loading => {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.add(Spinner::new().size(32.0));
                });
                None
            }
            FetchState::Failed(message) => {
                ui.label_error(message);
                None
            }
            FetchState::Success(coins) => {
                let page = crate::trace_time!("Catalog filter", 500, { self.query.apply(coins) });
                if page.is_empty() {
                    ui.add_space(16.0);
                    ui.vertical_centered(|ui| ui.label_subdued(&UI_TEXT.catalog_empty));
                    return None;
                }

                let clicked = UI_CONFIG
                    .card_frame()
                    .show(ui, |ui| render_table(ui, &page, &fmt))
                    .inner;

                if page.needs_pagination() {
                    ui.add_space(8.0);
                    if let Some(target) = render_pagination(ui, &page) {
                        self.query.set_page(target, page.total_pages);
                    }
                }
                clicked
            }
        }
    }
}

fn render_table(ui: &mut Ui, page: &CatalogPage, fmt: &dyn MoneyFormat) -> Option<Coin> {
    let wide = ui.available_width() >= UI_CONFIG.narrow_width;
    let mut clicked = None;

    let mut table = TableBuilder::new(ui)
        .id_salt("coin_catalog")
        .striped(true)
        .sense(Sense::click())
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::exact(36.0))
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(80.0));
    if wide {
        table = table
            .column(Column::auto().at_least(120.0))
            .column(Column::auto().at_least(120.0));
    }

    table
        .header(24.0, |mut header| {
            let mut titles = vec![
                &UI_TEXT.catalog_col_rank,
                &UI_TEXT.catalog_col_coin,
                &UI_TEXT.catalog_col_price,
                &UI_TEXT.catalog_col_change,
            ];
            if wide {
                titles.push(&UI_TEXT.catalog_col_market_cap);
                titles.push(&UI_TEXT.catalog_col_volume);
            }
            for title in titles {
                header.col(|ui| ui.label_subheader(title.as_str()));
            }
        })
        .body(|mut body| {
            for coin in &page.rows {
                body.row(UI_CONFIG.table_row_height, |mut row| {
                    row.col(|ui| ui.label_subdued(coin.rank_label()));
                    row.col(|ui| coin_cell(ui, coin));
                    row.col(|ui| {
                        ui.label(fmt.price(coin.current_price));
                    });
                    row.col(|ui| change_cell(ui, coin));
                    if wide {
                        row.col(|ui| {
                            ui.label(fmt.compact(coin.market_cap));
                        });
                        row.col(|ui| {
                            ui.label(fmt.compact(coin.total_volume));
                        });
                    }
                    if row.response().clicked() {
                        clicked = Some((*coin).clone());
                    }
                });
            }
        });

    clicked
}

fn coin_cell(ui: &mut Ui, coin: &Coin) {
    ui.add(
        Image::new(coin.image.as_str())
            .fit_to_exact_size(Vec2::splat(UI_CONFIG.coin_icon_size))
            .corner_radius(UI_CONFIG.coin_icon_size / 2.0),
    );
    ui.label(RichText::new(&coin.name).strong());
    ui.label_subdued(coin.ticker());
}

pub(crate) fn change_cell(ui: &mut Ui, coin: &Coin) {
    let trend = coin.trend();
    ui.label(
        RichText::new(format!(
            "{} {}",
            trend.arrow(),
            percent(coin.price_change_percentage_24h.abs())
        ))
        .color(trend.color()),
    );
}

/// Prev, numbered pages, Next. Returns the page the user picked.
fn render_pagination(ui: &mut Ui, page: &CatalogPage) -> Option<usize> {
    let mut target = None;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(page.page > 1, Button::new(&UI_TEXT.pagination_prev))
            .clicked()
        {
            target = Some(page.page - 1);
        }
        for n in 1..=page.total_pages {
            let selected = n == page.page;
            if ui
                .interactive_label(
                    &n.to_string(),
                    selected,
                    PLOT_CONFIG.color_text_neutral,
                    eframe::egui::FontId::proportional(14.0),
                )
                .clicked()
                && !selected
            {
                target = Some(n);
            }
        }
        if ui
            .add_enabled(
                page.page < page.total_pages,
                Button::new(&UI_TEXT.pagination_next),
            )
            .clicked()
        {
            target = Some(page.page + 1);
        }
    });
    target
}
