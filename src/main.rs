use eframe::egui;

mod app;

const DEMO_PAGE: &str = include_str!("../demos/page.html");

fn main() {
    env_logger::init();

    // Page markup: first CLI argument as a path, or the built-in demo page.
    let markup = match std::env::args().nth(1) {
        Some(path) => match std::fs::read_to_string(&path) {
            Ok(markup) => markup,
            Err(e) => {
                log::error!("failed to read {}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => DEMO_PAGE.to_string(),
    };

    let page = match tickerdeck::engine::pipeline::load_page(&markup) {
        Ok(page) => page,
        Err(e) => {
            log::error!("failed to load page: {}", e);
            std::process::exit(1);
        }
    };

    let title = if page.doc.title.is_empty() {
        "Tickerdeck".to_string()
    } else {
        page.doc.title.clone()
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 540.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(app::TickerApp::new(page)))),
    )
    .expect("Failed to start Tickerdeck");
}
