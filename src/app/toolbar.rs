//! Toolbar rendering for `TickerApp`.
//!
//! Draws the add-headline and add-ticker-item inputs plus the stats and
//! dark-mode toggles. New elements are pushed straight into the document;
//! the recount ticks pick them up within a second, so no rotation state is
//! touched here.

use eframe::egui;

use tickerdeck::dom::Element;
use tickerdeck::rotation::{HEADLINE_CLASS, TICKER_ITEM_CLASS};

use super::TickerApp;

impl TickerApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            let response = ui.add_sized(
                [220.0, 24.0],
                egui::TextEdit::singleline(&mut self.headline_input)
                    .hint_text("New headline..."),
            );
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            if (ui.button("Add headline").clicked() || submitted)
                && !self.headline_input.trim().is_empty()
            {
                let text = self.headline_input.trim().to_string();
                log::info!("headline added: {}", text);
                self.page.doc.push(
                    Element::new("h2")
                        .with_class(HEADLINE_CLASS)
                        .with_attr("style", "display:none;")
                        .with_text(text),
                );
                self.headline_input.clear();
            }

            ui.separator();

            ui.add_sized(
                [220.0, 24.0],
                egui::TextEdit::singleline(&mut self.ticker_input)
                    .hint_text("New ticker item..."),
            );
            if ui.button("Add item").clicked() && !self.ticker_input.trim().is_empty() {
                let text = self.ticker_input.trim().to_string();
                log::info!("ticker item added: {}", text);
                self.page
                    .doc
                    .push(Element::new("div").with_class(TICKER_ITEM_CLASS).with_text(text));
                self.ticker_input.clear();
            }

            ui.separator();

            ui.toggle_value(&mut self.show_stats, "Stats");

            // Dark mode toggle
            let dark_label = if self.dark_mode { "\u{263E}" } else { "\u{2600}" };
            if ui.button(dark_label).clicked() {
                self.dark_mode = !self.dark_mode;
            }
        });
    }
}
