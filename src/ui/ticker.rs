use std::sync::Arc;

use eframe::egui::{
    Align, Color32, CornerRadius, FontId, Image, Layout, Pos2, Rect, Sense, TextFormat, Ui,
    UiBuilder, Vec2, text::LayoutJob,
};

use crate::config::{MARKET, TICKER};
use crate::data::{FetchState, MarketDataProvider, Subscription, TaskSpawner};
use crate::domain::Currency;
use crate::models::{Coin, Trend};
use crate::ui::{UI_TEXT, UiStyleExt};
use crate::utils::{LocaleFormat, MoneyFormat, percent};

/// The strip scrolls through the coins followed by the same coins again, so the
/// wrap point is invisible.
pub(crate) fn ticker_sequence(coins: &[Coin]) -> Vec<&Coin> {
    coins.iter().chain(coins.iter()).collect()
}

#[derive(Default)]
pub struct TickerState {
    // Horizontal offset (pixels)
    offset: f32,
    // Interactive state
    is_hovered: bool,
    is_dragging: bool,
}

impl TickerState {
    fn item_job(coin: &Coin, fmt: &dyn MoneyFormat, font_id: &FontId) -> LayoutJob {
        let change_color = match coin.trend() {
            Trend::Up => TICKER.text_color_up,
            Trend::Down => TICKER.text_color_down,
        };
        let mut job = LayoutJob::default();
        let fmt_in = |color: Color32| TextFormat::simple(font_id.clone(), color);
        job.append(&coin.ticker(), 0.0, fmt_in(TICKER.text_color_symbol));
        job.append(&fmt.price(coin.current_price), 8.0, fmt_in(TICKER.text_color_price));
        job.append(
            &percent(coin.price_change_percentage_24h),
            8.0,
            fmt_in(change_color),
        );
        job
    }

    fn render_skeleton(ui: &mut Ui, panel_rect: Rect) {
        let painter = ui.painter().with_clip_rect(panel_rect);
        let block = Vec2::new(120.0, TICKER.font_size + 4.0);
        let y = panel_rect.center().y - block.y / 2.0;
        for idx in 0..TICKER.skeleton_count {
            let x = panel_rect.min.x + idx as f32 * (block.x + TICKER.item_spacing);
            if x > panel_rect.max.x {
                break;
            }
            let rect = Rect::from_min_size(Pos2::new(x, y), block);
            painter.rect_filled(rect, CornerRadius::same(4), TICKER.skeleton_color);
        }
    }

    /// Draws the strip and returns the coin the user clicked, if any.
    pub fn render(
        &mut self,
        ui: &mut Ui,
        coins: &FetchState<Vec<Coin>>,
        fmt: &dyn MoneyFormat,
    ) -> Option<Coin> {
        let rect = ui.available_rect_before_wrap();
        let height = TICKER.height;
        let panel_rect = Rect::from_min_size(rect.min, Vec2::new(rect.width(), height));
        let response = ui.allocate_rect(panel_rect, Sense::click_and_drag());
        ui.painter()
            .rect_filled(panel_rect, 0.0, TICKER.background_color); // Background

        let coins = match coins {
            FetchState::Idle | FetchState::Loading => {
                Self::render_skeleton(ui, panel_rect);
                return None;
            }
            FetchState::Failed(_) => {
                let mut child = ui.new_child(
                    UiBuilder::new()
                        .max_rect(panel_rect.shrink2(Vec2::new(12.0, 0.0)))
                        .layout(Layout::left_to_right(Align::Center)),
                );
                child.label_subdued(&UI_TEXT.ticker_error);
                return None;
            }
            FetchState::Success(coins) => coins,
        };

        // Interaction Logic
        self.is_hovered = response.hovered();
        self.is_dragging = response.dragged();

        if self.is_dragging {
            // Drag to scrub
            self.offset += response.drag_delta().x;
        } else if !self.is_hovered {
            // Clamp dt so a lag spike slows the strip instead of teleporting it.
            let dt = ui.input(|i| i.stable_dt).min(0.05);
            self.offset -= TICKER.speed_pixels_per_sec * dt;
        }

        // Clip Content (Don't draw outside panel)
        let painter = ui.painter().with_clip_rect(panel_rect);
        let font_id = FontId::proportional(TICKER.font_size);
        let sequence = ticker_sequence(coins);

        // Pass 1: lay out once, measure the doubled sequence.
        let items: Vec<_> = sequence
            .iter()
            .map(|coin| {
                let galley = painter.layout_job(Self::item_job(coin, fmt, &font_id));
                let width = TICKER.icon_size + 6.0 + galley.size().x;
                (*coin, galley, width)
            })
            .collect();
        let total_width: f32 = items.iter().map(|(_, _, w)| w + TICKER.item_spacing).sum();

        if total_width < 1.0 {
            return None; // No data
        }

        // The second half repeats the first, so wrap after one half.
        let half_width = total_width / 2.0;
        self.offset %= half_width;
        if self.offset > 0.0 {
            self.offset -= half_width; // Keep it negative-flowing
        }

        let screen_width = panel_rect.width();
        let start_pos = panel_rect.min;
        let loops_needed = (screen_width / total_width).ceil() as i32 + 1;
        let mut clicked = None;

        for loop_idx in 0..loops_needed {
            let mut loop_x = self.offset + (loop_idx as f32 * total_width);

            for (coin, galley, w) in &items {
                if loop_x + w > 0.0 && loop_x < screen_width {
                    let x_snapped = (start_pos.x + loop_x).round();
                    let icon_rect = Rect::from_min_size(
                        Pos2::new(x_snapped, start_pos.y + (height - TICKER.icon_size) / 2.0),
                        Vec2::splat(TICKER.icon_size),
                    );
                    Image::new(coin.image.as_str())
                        .corner_radius(TICKER.icon_size / 2.0)
                        .paint_at(ui, icon_rect);

                    let h = galley.size().y;
                    let text_pos = Pos2::new(
                        icon_rect.max.x + 6.0,
                        (start_pos.y + (height - h) / 2.0).round(),
                    );
                    painter.galley(text_pos, galley.clone(), TICKER.text_color_symbol);

                    // Click Detection
                    if response.clicked() {
                        if let Some(pointer) = response.interact_pointer_pos() {
                            let item_rect = Rect::from_min_size(
                                Pos2::new(x_snapped, start_pos.y),
                                Vec2::new(*w, height),
                            );
                            if item_rect.contains(pointer) {
                                clicked = Some((*coin).clone());
                            }
                        }
                    }
                }

                loop_x += w + TICKER.item_spacing;
            }
        }

        // Keep animating if we are scrolling
        if !self.is_hovered && !self.is_dragging {
            ui.ctx().request_repaint();
        }

        clicked
    }
}

/// Top-N coins for the current currency, scrolled as a strip.
pub(crate) struct TickerPanel {
    coins: Subscription<Currency, Vec<Coin>>,
    strip: TickerState,
}

impl Default for TickerPanel {
    fn default() -> Self {
        Self {
            coins: Subscription::new("ticker"),
            strip: TickerState::default(),
        }
    }
}

impl TickerPanel {
    /// Fetches once per currency.
    pub(crate) fn sync(
        &mut self,
        currency: Currency,
        provider: &Arc<dyn MarketDataProvider>,
        spawner: &TaskSpawner,
    ) -> bool {
        let provider = Arc::clone(provider);
        self.coins.sync(currency, spawner, move |&currency| async move {
            provider
                .list_markets(currency, 1, MARKET.ticker_size)
                .await
        })
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &FetchState<Vec<Coin>> {
        self.coins.state()
    }

    #[cfg(test)]
    pub(crate) fn subscription_mut(&mut self) -> &mut Subscription<Currency, Vec<Coin>> {
        &mut self.coins
    }

    pub(crate) fn show(&mut self, ui: &mut Ui, currency: Currency) -> Option<Coin> {
        let fmt = LocaleFormat::new(currency);
        let state = self.coins.poll();
        self.strip.render(ui, state, &fmt)
    }
}
