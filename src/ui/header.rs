use eframe::egui::{Align, Layout, RichText, Ui};
use strum::IntoEnumIterator;

use crate::domain::Currency;
use crate::ui::{UI_CONFIG, UI_TEXT, UiStyleExt};

/// Title on the left, currency picker on the right. Returns a newly chosen currency.
pub(crate) fn render_header(ui: &mut Ui, current: Currency) -> Option<Currency> {
    let mut chosen = None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new(&UI_TEXT.app_title)
                .heading()
                .strong()
                .color(UI_CONFIG.colors.heading),
        );
        ui.label_subdued(&UI_TEXT.app_tagline);

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            let button_text = UI_TEXT.currency_button(&current.to_string());
            let title = &UI_TEXT.label_currency_select;
            ui.custom_dropdown("currency_dropdown", title, &button_text, |ui| {
                for currency in Currency::iter() {
                    let text = format!("{} {}", currency.symbol(), currency);
                    if ui.selectable_label(currency == current, text).clicked() {
                        chosen = Some(currency);
                    }
                }
                chosen.is_some()
            });
        });
    });

    chosen.filter(|c| *c != current)
}
