use {
    anyhow::{Context as _, Result},
    eframe::{
        Frame,
        egui::{
            Align, CentralPanel, Context, Frame as PanelFrame, Layout, ScrollArea,
            TopBottomPanel, Visuals,
        },
    },
    std::sync::Arc,
};

use crate::{
    Cli,
    app::AppState,
    config::{DF, TICKER},
    data::{CoinGeckoProvider, MarketDataProvider, TaskSpawner},
    domain::Currency,
    models::Coin,
    ui::{CatalogView, DetailView, TickerPanel, UI_CONFIG, render_header},
    utils::AppInstant,
};

pub struct App {
    state: AppState,
    provider: Arc<dyn MarketDataProvider>,
    spawner: TaskSpawner,
    ticker: TickerPanel,
    catalog: CatalogView,
    detail: DetailView,
    scroll_to_top: bool,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let provider = CoinGeckoProvider::with_base_url(args.api_base_url.as_str())
            .with_context(|| format!("Failed to build HTTP client for {}", args.api_base_url))?;

        #[cfg(not(target_arch = "wasm32"))]
        let spawner = TaskSpawner::native().context("Failed to start network runtime")?;
        #[cfg(target_arch = "wasm32")]
        let spawner = TaskSpawner::web();

        log::info!(
            "Cryptoscope starting: currency={}, api={}",
            args.currency,
            provider.base_url()
        );

        Ok(Self::with_provider(
            args.currency,
            Arc::new(provider),
            spawner.with_repaint(cc.egui_ctx.clone()),
        ))
    }

    pub(crate) fn with_provider(
        currency: Currency,
        provider: Arc<dyn MarketDataProvider>,
        spawner: TaskSpawner,
    ) -> Self {
        Self {
            state: AppState::new(currency),
            provider,
            spawner,
            ticker: TickerPanel::default(),
            catalog: CatalogView::default(),
            detail: DetailView::default(),
            scroll_to_top: false,
        }
    }

    /// Lets every view re-fetch if its inputs changed since the last frame.
    pub(crate) fn sync_views(&mut self) {
        let currency = self.state.currency;
        self.ticker.sync(currency, &self.provider, &self.spawner);
        self.catalog.sync(currency, &self.provider, &self.spawner);
        if let Some(coin) = &self.state.selected {
            self.detail.sync(coin, currency, &self.provider, &self.spawner);
        }
    }

    pub(crate) fn set_currency(&mut self, currency: Currency) {
        self.state.set_currency(currency);
    }

    /// Ticker and catalog clicks both land here. A new selection starts on the default range.
    pub(crate) fn select_coin(&mut self, coin: Coin, reason: &str) {
        self.detail = DetailView::default();
        self.state.select(coin, reason);
        self.scroll_to_top = true;
    }

    pub(crate) fn back_to_list(&mut self) {
        self.state.clear_selection();
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("header")
            .frame(UI_CONFIG.top_panel_frame())
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(currency) = render_header(ui, self.state.currency) {
                    self.set_currency(currency);
                }
            });
    }

    fn render_ticker_panel(&mut self, ctx: &Context) {
        let clicked = TopBottomPanel::top("ticker_panel")
            .frame(PanelFrame::NONE)
            .exact_height(TICKER.height)
            .resizable(false)
            .show(ctx, |ui| self.ticker.show(ui, self.state.currency))
            .inner;

        if let Some(coin) = clicked {
            self.select_coin(coin, "ticker click");
        }
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        let currency = self.state.currency;
        let mut scroll = ScrollArea::vertical().id_salt("main_scroll");
        if std::mem::take(&mut self.scroll_to_top) {
            scroll = scroll.vertical_scroll_offset(0.0);
        }

        let mut go_back = false;
        let mut picked = None;

        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                scroll.show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.set_max_width(UI_CONFIG.max_content_width);
                        ui.with_layout(Layout::top_down(Align::Min), |ui| {
                            match &self.state.selected {
                                Some(coin) => go_back = self.detail.show(ui, coin, currency),
                                None => picked = self.catalog.show(ui, currency),
                            }
                        });
                    });
                });
            });

        if go_back {
            self.back_to_list();
        }
        if let Some(coin) = picked {
            self.select_coin(coin, "catalog row click");
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let start = AppInstant::now();
        setup_custom_visuals(ctx);

        self.sync_views();
        self.render_top_panel(ctx);
        self.render_ticker_panel(ctx);
        self.render_central_panel(ctx);

        let frame_time = start.elapsed().as_micros();
        if frame_time > 50_000 && DF.log_performance {
            log::warn!("🐢 SLOW FRAME: {}us", frame_time);
        }
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.extreme_bg_color = UI_CONFIG.colors.central_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
    ctx.style_mut(|s| s.interaction.selectable_labels = false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MARKET;
    use crate::data::{FetchState, MockProvider, settle};
    use crate::domain::TimeRange;
    use crate::models::sample_coin;

    fn app_with_mock() -> (Arc<MockProvider>, App) {
        let mock = Arc::new(MockProvider::new());
        let spawner = TaskSpawner::from_handle(tokio::runtime::Handle::current());
        let app = App::with_provider(Currency::Usd, mock.clone(), spawner);
        (mock, app)
    }

    async fn settle_lists(app: &mut App) {
        settle(app.catalog.subscription_mut()).await;
        settle(app.ticker.subscription_mut()).await;
    }

    #[tokio::test]
    async fn currency_change_refetches_catalog_and_ticker_once_each() {
        let (mock, mut app) = app_with_mock();
        app.sync_views();
        settle_lists(&mut app).await;
        app.catalog.query_mut().set_page(2, 3);

        app.set_currency(Currency::Inr);
        for _ in 0..5 {
            app.sync_views();
        }
        settle_lists(&mut app).await;

        assert_eq!(mock.market_calls_with(MARKET.catalog_size), 2);
        assert_eq!(mock.market_calls_with(MARKET.ticker_size), 2);
        assert_eq!(app.catalog.query().page(), 1);
    }

    #[tokio::test]
    async fn catalog_failure_leaves_ticker_alone() {
        let (mock, mut app) = app_with_mock();
        mock.fail_markets_with(MARKET.catalog_size);

        app.sync_views();
        settle_lists(&mut app).await;
        for _ in 0..5 {
            app.sync_views();
        }

        assert!(matches!(app.catalog.state(), FetchState::Failed(_)));
        assert_eq!(
            app.ticker.state().data().map(Vec::len),
            Some(MARKET.ticker_size as usize)
        );
        assert_eq!(mock.market_calls(), 2);
    }

    fn selected_id(app: &App) -> Option<&str> {
        app.state.selected.as_ref().map(|c| c.id.as_str())
    }

    #[tokio::test]
    async fn selecting_and_returning_keeps_catalog_data() {
        let (mock, mut app) = app_with_mock();
        app.sync_views();
        settle_lists(&mut app).await;

        app.select_coin(sample_coin("coin-3", "Coin 3", "c3", 3), "test");
        assert!(app.scroll_to_top);
        app.sync_views();
        assert!(app.detail.chart_state().is_loading());
        assert_eq!(selected_id(&app), Some("coin-3"));

        app.back_to_list();
        app.sync_views();
        assert!(app.state.selected.is_none());
        assert!(app.catalog.state().data().is_some());
        assert_eq!(mock.market_calls(), 2);
    }

    #[tokio::test]
    async fn ticker_and_catalog_picks_share_one_selection() {
        let (mock, mut app) = app_with_mock();
        app.sync_views();
        settle_lists(&mut app).await;

        let from_ticker = app.ticker.state().data().expect("ticker loaded")[0].clone();
        app.select_coin(from_ticker, "ticker click");
        app.sync_views();
        settle(app.detail.subscription_mut()).await;
        assert_eq!(selected_id(&app), Some("coin-1"));

        app.back_to_list();
        assert_eq!(selected_id(&app), None);

        let from_catalog = app.catalog.state().data().expect("catalog loaded")[4].clone();
        app.select_coin(from_catalog, "catalog row click");
        app.detail.set_range(TimeRange::Week);
        app.sync_views();
        settle(app.detail.subscription_mut()).await;
        assert_eq!(selected_id(&app), Some("coin-5"));

        // The chart follows whatever the state holds, with no copy of its own.
        app.state.select(sample_coin("coin-9", "Coin 9", "c9", 9), "test");
        app.sync_views();
        settle(app.detail.subscription_mut()).await;

        assert_eq!(mock.history_ids(), vec!["coin-1", "coin-5", "coin-9"]);
    }
}
