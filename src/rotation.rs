//! Headline rotation and ticker speed.
//!
//! The only stateful part of the page: a cursor over the active headline set,
//! advanced every rotation tick, plus polled recounts that reconcile
//! externally added or removed elements and derive the ticker's scroll
//! duration from its item count.

use std::time::Duration;

use crate::dom::{Document, Element, ElementStatus};
use crate::schedule::Interval;

/// Class of elements eligible for spotlight rotation.
pub const HEADLINE_CLASS: &str = "headline";
/// Class of the scrolling ticker container.
pub const TICKER_CLASS: &str = "ticker";
/// Class of the items inside the ticker strip.
pub const TICKER_ITEM_CLASS: &str = "ticker__item";
/// Id of the element shown while rotation is inactive.
pub const PLACEHOLDER_ID: &str = "placeholder";

pub const ROTATE_PERIOD: Duration = Duration::from_millis(5000);
pub const RECOUNT_PERIOD: Duration = Duration::from_millis(1000);

/// Seconds of scroll per ticker item. One full ticker loop takes
/// `item_count * SECS_PER_TICKER_ITEM` seconds, so adding items slows the
/// strip down instead of compressing it.
pub const SECS_PER_TICKER_ITEM: f32 = 25.0;

/// Rotation state: the cursor and the last observed collection counts.
///
/// All fields live here rather than in module globals so the whole machine
/// can be driven and inspected without a GUI.
#[derive(Debug)]
pub struct Rotation {
    cursor: usize,
    headline_count: usize,
    ticker_count: usize,
    rotate: Interval,
    headline_recount: Interval,
    ticker_recount: Interval,
}

impl Rotation {
    /// Count the headlines and, when there is more than one, retire the
    /// placeholder and show the first headline. With zero or one headline
    /// the placeholder stays and nothing is shown yet.
    ///
    /// The ticker count starts at zero so the first recount always observes
    /// a change and applies an initial scroll duration.
    pub fn init(doc: &mut Document) -> Self {
        let headline_count = doc.class_count(HEADLINE_CLASS);
        if headline_count > 1 {
            if let Some(placeholder) = doc.by_id_mut(PLACEHOLDER_ID) {
                placeholder.remove();
            }
            if let Some(first) = doc.nth_of_class_mut(HEADLINE_CLASS, 0) {
                first.show();
            }
        }
        log::debug!("rotation initialized with {} headlines", headline_count);
        Self {
            cursor: 0,
            headline_count,
            ticker_count: 0,
            rotate: Interval::new(ROTATE_PERIOD),
            headline_recount: Interval::new(RECOUNT_PERIOD),
            ticker_recount: Interval::new(RECOUNT_PERIOD),
        }
    }

    /// Fire all due ticks for the three intervals.
    pub fn poll(&mut self, doc: &mut Document, elapsed: Duration) {
        for _ in 0..self.rotate.poll(elapsed) {
            self.rotate_once(doc);
        }
        if self.headline_recount.poll(elapsed) > 0 {
            self.recount_headlines(doc);
        }
        if self.ticker_recount.poll(elapsed) > 0 {
            self.recount_ticker(doc);
        }
    }

    /// One rotation tick: hide the element at the cursor, advance modulo the
    /// active count, show the element at the new cursor.
    ///
    /// With zero headlines this is a no-op; the guard keeps the modulo and
    /// the index access out of reach. A cursor pointing past the set (the
    /// set shrank since the last tick) hides nothing and wraps.
    pub fn rotate_once(&mut self, doc: &mut Document) {
        if self.headline_count == 0 {
            return;
        }
        if let Some(current) = doc.nth_of_class_mut(HEADLINE_CLASS, self.cursor) {
            current.hide();
        }
        self.cursor = (self.cursor + 1) % self.headline_count;
        if let Some(next) = doc.nth_of_class_mut(HEADLINE_CLASS, self.cursor) {
            next.show();
        }
    }

    /// Re-scan the headline count and adopt it when changed, keeping the
    /// cursor in bounds. Rotation itself is not restarted.
    pub fn recount_headlines(&mut self, doc: &Document) {
        let count = doc.class_count(HEADLINE_CLASS);
        if count != self.headline_count {
            log::debug!("headline count {} -> {}", self.headline_count, count);
            self.headline_count = count;
            if count > 0 {
                self.cursor %= count;
            }
        }
    }

    /// Re-scan the ticker item count; on change, derive the scroll duration
    /// and write it to the ticker container's style. An unchanged count
    /// writes nothing.
    pub fn recount_ticker(&mut self, doc: &mut Document) {
        let count = doc.class_count(TICKER_ITEM_CLASS);
        if count == self.ticker_count {
            return;
        }
        let secs = count as f32 * SECS_PER_TICKER_ITEM;
        log::info!(
            "ticker items {} -> {}, scroll duration {}s",
            self.ticker_count,
            count,
            secs
        );
        self.ticker_count = count;
        if let Some(ticker) = doc.nth_of_class_mut(TICKER_CLASS, 0) {
            ticker.set_animation_duration(secs);
        }
    }

    /// Dismiss the active headline at `index`: permanently removed, hidden,
    /// and the rotation bound shrinks by one. The spotlight stays empty
    /// until the next rotation tick.
    pub fn click(&mut self, doc: &mut Document, index: usize) {
        let Some(el) = doc.nth_of_class_mut(HEADLINE_CLASS, index) else {
            return;
        };
        log::info!("headline dismissed: {}", el.text);
        el.remove();
        self.headline_count = self.headline_count.saturating_sub(1);
        if self.headline_count > 0 {
            self.cursor %= self.headline_count;
        }
    }

    /// The currently visible headline, with its index in the active set.
    pub fn visible_headline<'a>(&self, doc: &'a Document) -> Option<(usize, &'a Element)> {
        doc.iter()
            .filter(|e| e.has_class(HEADLINE_CLASS) && e.status == ElementStatus::Active)
            .enumerate()
            .find(|(_, e)| e.is_visible())
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn headline_count(&self) -> usize {
        self.headline_count
    }

    pub fn ticker_count(&self) -> usize {
        self.ticker_count
    }

    /// The last applied scroll duration in seconds.
    pub fn ticker_duration_secs(&self) -> f32 {
        self.ticker_count as f32 * SECS_PER_TICKER_ITEM
    }
}
