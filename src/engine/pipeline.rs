use std::time::Duration;

use crate::clock::{Clock, ClockReading, TIMER_ID};
use crate::dom::parser::parse_page;
use crate::dom::Document;
use crate::rotation::{Rotation, HEADLINE_CLASS, TICKER_ITEM_CLASS};

/// A loaded page: the element store plus its timer-driven components.
#[derive(Debug)]
pub struct PageState {
    pub doc: Document,
    pub clock: Clock,
    pub rotation: Rotation,
}

impl PageState {
    /// Drive all four intervals from the host loop. Components never
    /// interleave: clock first, then rotation, every poll.
    pub fn poll(&mut self, elapsed: Duration) {
        self.clock.poll(&mut self.doc, elapsed);
        self.rotation.poll(&mut self.doc, elapsed);
    }
}

/// Error while loading a page
#[derive(Debug)]
pub struct PageError {
    pub message: String,
    pub phase: &'static str,
}

impl std::fmt::Display for PageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.phase, self.message)
    }
}

/// The page pipeline: Parse → Assemble → first clock render.
///
/// Missing individual elements are tolerated downstream; the only hard error
/// is markup with nothing for any component to drive.
pub fn load_page(markup: &str) -> Result<PageState, PageError> {
    if markup.trim().is_empty() {
        return Err(PageError {
            message: "empty page markup".into(),
            phase: "parse",
        });
    }

    let mut doc = parse_page(markup);

    if doc.by_id(TIMER_ID).is_none()
        && doc.class_count(HEADLINE_CLASS) == 0
        && doc.class_count(TICKER_ITEM_CLASS) == 0
    {
        return Err(PageError {
            message: "page has no clock display, headlines, or ticker items".into(),
            phase: "assemble",
        });
    }

    // Page-ready render: the clock shows a time before its first tick.
    let clock = Clock::new();
    clock.render(&mut doc, ClockReading::now());

    let rotation = Rotation::init(&mut doc);

    log::info!(
        "page \"{}\" loaded: {} headlines, {} elements",
        doc.title,
        rotation.headline_count(),
        doc.len()
    );

    Ok(PageState {
        doc,
        clock,
        rotation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r#"
    <html>
        <head><title>Evening Edition</title></head>
        <body>
            <div id="timer"></div>
            <h2 id="placeholder">No news yet</h2>
            <h2 class="headline" style="display:none;">First</h2>
            <h2 class="headline" style="display:none;">Second</h2>
            <div class="ticker">
                <div class="ticker__item">One</div>
                <div class="ticker__item">Two</div>
            </div>
        </body>
    </html>
    "#;

    #[test]
    fn load_page_assembles_components() {
        let page = load_page(MARKUP).unwrap();
        assert_eq!(page.doc.title, "Evening Edition");
        assert_eq!(page.rotation.headline_count(), 2);
        // Page-ready clock render happened.
        assert!(!page.doc.by_id(TIMER_ID).unwrap().text.is_empty());
        // First headline is already in the spotlight.
        assert!(page.rotation.visible_headline(&page.doc).is_some());
    }

    #[test]
    fn poll_drives_clock_and_rotation_together() {
        let mut page = load_page(MARKUP).unwrap();
        page.poll(Duration::from_millis(5000));
        let (_, visible) = page.rotation.visible_headline(&page.doc).unwrap();
        assert_eq!(visible.text, "Second");
        assert_eq!(page.rotation.ticker_count(), 2);
    }

    #[test]
    fn empty_markup_is_a_parse_error() {
        let err = load_page("   ").unwrap_err();
        assert_eq!(err.phase, "parse");
    }

    #[test]
    fn markup_without_page_content_is_an_assemble_error() {
        let err = load_page("<html><body><p>hello</p></body></html>").unwrap_err();
        assert_eq!(err.phase, "assemble");
        assert_eq!(
            err.to_string(),
            "[assemble] page has no clock display, headlines, or ticker items"
        );
    }
}
