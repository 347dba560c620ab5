//! `TickerApp` — the top-level egui application state.
//!
//! This module declares the `TickerApp` struct; drawing is split across the
//! sibling sub-modules:
//!
//! - `toolbar` — add-headline / add-ticker-item controls and view toggles
//! - `content` — clock, spotlight, ticker strip, stats panel

pub mod toolbar;
pub mod content;

use std::time::{Duration, Instant};

use eframe::egui;

use tickerdeck::engine::pipeline::PageState;

// ─── Application state ───────────────────────────────────────────────────────

pub struct TickerApp {
    pub page: PageState,
    pub started: Instant,
    pub dark_mode: bool,
    pub show_stats: bool,
    pub headline_input: String,
    pub ticker_input: String,
}

impl TickerApp {
    pub fn new(page: PageState) -> Self {
        Self {
            page,
            started: Instant::now(),
            dark_mode: true,
            show_stats: false,
            headline_input: String::new(),
            ticker_input: String::new(),
        }
    }
}

impl eframe::App for TickerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Fire due ticks before drawing. All four intervals are polled from
        // this single callback, so component mutations never interleave.
        self.page.poll(self.started.elapsed());

        if self.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::TopBottomPanel::bottom("ticker").show(ctx, |ui| {
            self.draw_ticker_strip(ui);
        });

        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_stats_panel(ui);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_content(ui);
        });

        // Keep ticking and scrolling without user input.
        ctx.request_repaint_after(Duration::from_millis(100));
    }
}
