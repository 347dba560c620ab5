//! Main viewport rendering for `TickerApp`.
//!
//! Draws the clock (with blinking separator), the spotlight headline
//! (click to dismiss), the placeholder while rotation is inactive, the
//! scrolling ticker strip, and the stats panel.

use eframe::egui;

use tickerdeck::clock::{strip_blink, TIMER_ID};
use tickerdeck::dom::ElementStatus;
use tickerdeck::rotation::{HEADLINE_CLASS, PLACEHOLDER_ID, TICKER_ITEM_CLASS};

use super::TickerApp;

impl TickerApp {
    /// Render the clock and the headline spotlight.
    pub fn draw_content(&mut self, ui: &mut egui::Ui) {
        if let Some(timer) = self.page.doc.by_id(TIMER_ID) {
            let text = strip_blink(&timer.text);
            let shown = blinked(&text, blink_on(self.started.elapsed().as_secs()));
            ui.label(egui::RichText::new(shown).monospace().size(20.0));
        }

        ui.add_space(16.0);

        let spotlight = self
            .page
            .rotation
            .visible_headline(&self.page.doc)
            .map(|(index, el)| (index, el.text.clone()));

        if let Some((index, text)) = spotlight {
            let rt = egui::RichText::new(&text).size(28.0).strong();
            let label = ui.add(egui::Label::new(rt).sense(egui::Sense::click()));
            if label
                .on_hover_cursor(egui::CursorIcon::PointingHand)
                .on_hover_text("Click to dismiss")
                .clicked()
            {
                self.page.rotation.click(&mut self.page.doc, index);
            }
        } else if let Some(placeholder) = self.page.doc.by_id(PLACEHOLDER_ID) {
            if placeholder.is_visible() {
                ui.label(egui::RichText::new(&placeholder.text).size(22.0).weak());
            }
        }
    }

    /// Render the scrolling ticker strip along the bottom edge.
    ///
    /// There is no CSS animation engine here; the scroll offset is derived
    /// from elapsed time and the duration the recount applied, so the strip
    /// completes one full loop per animation duration.
    pub fn draw_ticker_strip(&mut self, ui: &mut egui::Ui) {
        let items = self.page.doc.texts_of_class(TICKER_ITEM_CLASS);
        if items.is_empty() {
            return;
        }
        let line = items.join("  +++  ");
        let duration = self.page.rotation.ticker_duration_secs();
        let frac = scroll_fraction(self.started.elapsed().as_secs_f32(), duration);

        let height = 28.0;
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(ui.available_width(), height),
            egui::Sense::hover(),
        );
        let painter = ui.painter_at(rect);
        let color = ui.visuals().strong_text_color();
        let galley = painter.layout_no_wrap(line, egui::FontId::proportional(16.0), color);

        // Enters at the right edge, leaves fully on the left.
        let travel = rect.width() + galley.size().x;
        let x = rect.right() - travel * frac;
        let y = rect.top() + (height - galley.size().y) / 2.0;
        painter.galley(egui::pos2(x, y), galley, color);
    }

    /// Render the stats side panel.
    pub fn draw_stats_panel(&mut self, ui: &mut egui::Ui) {
        let doc = &self.page.doc;
        let rotation = &self.page.rotation;

        ui.heading("Page");
        ui.separator();
        ui.label(format!("Active headlines: {}", rotation.headline_count()));
        let dismissed = doc
            .iter()
            .filter(|e| e.status == ElementStatus::Removed && e.has_class(HEADLINE_CLASS))
            .count();
        ui.label(format!("Dismissed: {}", dismissed));
        ui.label(format!("Cursor: {}", rotation.cursor()));
        ui.add_space(8.0);
        ui.label(format!("Ticker items: {}", rotation.ticker_count()));
        ui.label(format!("Scroll duration: {}s", rotation.ticker_duration_secs()));
        ui.add_space(8.0);
        ui.label(format!("Elements: {}", doc.len()));
    }
}

// ─── Presentation helpers ─────────────────────────────────────────────────────

/// Fraction of the way through one ticker loop at `elapsed` seconds.
/// A non-positive duration pins the strip at its start.
pub fn scroll_fraction(elapsed_secs: f32, duration_secs: f32) -> f32 {
    if duration_secs <= 0.0 {
        return 0.0;
    }
    (elapsed_secs / duration_secs).fract()
}

/// Whether the blink separator is lit this second.
pub fn blink_on(elapsed_secs: u64) -> bool {
    elapsed_secs % 2 == 0
}

/// Blank the hour:minute separator when the blink is off.
pub fn blinked(text: &str, on: bool) -> String {
    if on {
        text.to_string()
    } else {
        text.replacen(':', " ", 1)
    }
}
