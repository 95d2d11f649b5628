use {
    crate::{
        config::PLOT_CONFIG,
        models::Trend,
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{
        Align, Align2, Area, Color32, CornerRadius, FontId, Frame, Id, Key, Layout, Order,
        Response, RichText, Sense, Stroke, Ui, Vec2, WidgetInfo, WidgetType,
    },
};

pub(crate) fn colored_subsection_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into()).color(UI_CONFIG.colors.subsection_heading)
}

pub trait TrendColor {
    fn color(&self) -> Color32;
    fn arrow(&self) -> &'static str;
}

impl TrendColor for Trend {
    fn color(&self) -> Color32 {
        match self {
            Self::Up => PLOT_CONFIG.color_up,
            Self::Down => PLOT_CONFIG.color_down,
        }
    }

    fn arrow(&self) -> &'static str {
        match self {
            Self::Up => UI_TEXT.icon_trend_up.as_str(),
            Self::Down => UI_TEXT.icon_trend_down.as_str(),
        }
    }
}

pub(crate) trait UiStyleExt {
    /// Interactive label acting as button: transparent when idle, gray bg on hover, blue bg when selected.
    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response;

    fn label_subdued(&mut self, text: impl Into<String>);
    fn metric(&mut self, label: &str, value: &str, color: Color32);
    fn label_subheader(&mut self, text: impl Into<String>);
    fn label_error(&mut self, message: &str);
    /// Popup menu under a label, headed by `title`. `content` returns true once a choice is made.
    /// Closes on a choice, the close button, Escape, or a click outside.
    fn custom_dropdown(
        &mut self,
        id_salt: &str,
        title: &str,
        label_text: &str,
        content: impl FnOnce(&mut Ui) -> bool,
    );
}

fn dropdown_slot() -> Id {
    Id::new("open_dropdown")
}

/// One shared slot, so opening a dropdown closes any other.
fn open_dropdown(ui: &Ui) -> Option<Id> {
    ui.data(|d| d.get_temp::<Id>(dropdown_slot()))
}

fn set_open_dropdown(ui: &Ui, popup: Option<Id>) {
    ui.data_mut(|d| match popup {
        Some(id) => d.insert_temp(dropdown_slot(), id),
        None => d.remove::<Id>(dropdown_slot()),
    });
}

impl UiStyleExt for Ui {
    fn custom_dropdown(
        &mut self,
        id_salt: &str,
        title: &str,
        label_text: &str,
        content: impl FnOnce(&mut Ui) -> bool,
    ) {
        let popup_id = self.make_persistent_id(id_salt);
        let trigger = self.interactive_label(
            label_text,
            false,
            PLOT_CONFIG.color_info,
            FontId::proportional(14.0),
        );
        let was_open = open_dropdown(self) == Some(popup_id);
        if trigger.clicked() {
            set_open_dropdown(self, (!was_open).then_some(popup_id));
        }
        if !was_open {
            return;
        }

        let mut close = self.input(|i| i.key_pressed(Key::Escape));
        let popup = Area::new(popup_id)
            .order(Order::Foreground)
            .pivot(Align2::RIGHT_TOP)
            .fixed_pos(trigger.rect.right_bottom())
            .show(self.ctx(), |ui| {
                Frame::popup(ui.style())
                    .stroke(Stroke::new(1.0, PLOT_CONFIG.color_widget_border))
                    .inner_margin(8.0)
                    .show(ui, |ui| {
                        ui.set_min_width(140.0);
                        ui.style_mut().interaction.selectable_labels = false;
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(title).strong().small());
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                close |= ui.small_button(&UI_TEXT.icon_close).clicked();
                            });
                        });
                        ui.separator();
                        close |= content(ui);
                    });
            });

        let click = self.input(|i| {
            i.pointer
                .primary_clicked()
                .then(|| i.pointer.interact_pos())
                .flatten()
        });
        if let Some(pos) = click {
            close |= !popup.response.rect.contains(pos) && !trigger.rect.contains(pos);
        }
        if close {
            set_open_dropdown(self, None);
        }
    }

    fn interactive_label(
        &mut self,
        text: &str,
        is_selected: bool,
        idle_color: Color32,
        font_id: FontId,
    ) -> Response {
        let padding = Vec2::new(6.0, 4.0);
        let galley = self
            .painter()
            .layout_no_wrap(text.to_owned(), font_id, idle_color);
        let (rect, response) =
            self.allocate_exact_size(galley.size() + 2.0 * padding, Sense::click());
        response.widget_info(|| WidgetInfo::selected(WidgetType::Button, true, is_selected, text));
        if !self.is_rect_visible(rect) {
            return response;
        }

        let visuals = &self.style().visuals;
        let hot = response.hovered() || response.has_focus();
        let (fill, text_color) = match (is_selected, hot) {
            (true, _) => (Some(visuals.selection.bg_fill), Color32::WHITE),
            (false, true) => (
                Some(visuals.widgets.hovered.bg_fill),
                PLOT_CONFIG.color_text_primary,
            ),
            (false, false) => (None, idle_color),
        };
        if let Some(fill) = fill {
            self.painter().rect_filled(rect, CornerRadius::same(4), fill);
        }
        self.painter()
            .galley(rect.left_top() + padding, galley, text_color);
        response
    }

    fn label_subdued(&mut self, text: impl Into<String>) {
        self.label(
            RichText::new(text)
                .small()
                .color(PLOT_CONFIG.color_text_subdued),
        );
    }

    fn metric(&mut self, label: &str, value: &str, color: Color32) {
        self.vertical(|ui| {
            ui.spacing_mut().item_spacing.y = 2.0; // Tight spacing
            ui.label_subdued(label);
            ui.label(RichText::new(value).strong().color(color));
        });
    }

    fn label_subheader(&mut self, text: impl Into<String>) {
        self.label(colored_subsection_heading(text));
    }

    fn label_error(&mut self, message: &str) {
        self.label(RichText::new(UI_TEXT.fetch_error(message)).color(PLOT_CONFIG.color_error));
    }
}

#[cfg(test)]
mod tests {
    use eframe::egui::{CentralPanel, Context, Event, Modifiers, RawInput};

    use super::*;

    /// Runs one headless frame and reports whether the dropdown is open afterwards.
    fn frame(ctx: &Context, events: Vec<Event>, open_first: bool) -> bool {
        let mut is_open = false;
        let input = RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let id = ui.make_persistent_id("test_dropdown");
                if open_first {
                    set_open_dropdown(ui, Some(id));
                }
                ui.custom_dropdown("test_dropdown", "Pick one", "Open", |_| false);
                is_open = open_dropdown(ui) == Some(id);
            });
        });
        is_open
    }

    fn escape() -> Event {
        Event::Key {
            key: Key::Escape,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn dropdown_starts_closed() {
        let ctx = Context::default();
        assert!(!frame(&ctx, vec![], false));
    }

    #[test]
    fn dropdown_stays_open_until_escape() {
        let ctx = Context::default();
        assert!(frame(&ctx, vec![], true));
        assert!(frame(&ctx, vec![], false));
        assert!(!frame(&ctx, vec![escape()], false));
    }

    #[test]
    fn choosing_closes_the_dropdown() {
        let ctx = Context::default();
        let mut is_open = true;
        let _ = ctx.run(RawInput::default(), |ctx| {
            CentralPanel::default().show(ctx, |ui| {
                let id = ui.make_persistent_id("picker");
                set_open_dropdown(ui, Some(id));
                ui.custom_dropdown("picker", "Pick one", "Open", |_| true);
                is_open = open_dropdown(ui) == Some(id);
            });
        });
        assert!(!is_open);
    }
}
