//! Digital clock component.
//!
//! Once per second, reads the local wall clock and renders `H:MM:SS` into the
//! element with id `timer`. The hour:minute separator is wrapped in blink
//! markup in the document form; the GUI strips it and blinks the separator
//! itself. A missing display element makes the write a silent no-op.

use std::time::Duration;

use chrono::{Local, Timelike};

use crate::dom::Document;
use crate::schedule::Interval;

/// Id of the clock display element.
pub const TIMER_ID: &str = "timer";

pub const CLOCK_PERIOD: Duration = Duration::from_millis(1000);

const BLINK_SPAN: &str = "<span class=\"blink\">:</span>";

/// A stateless snapshot of the wall clock. Nothing is kept between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl ClockReading {
    pub fn now() -> Self {
        let now = Local::now();
        Self {
            hour: now.hour(),
            minute: now.minute(),
            second: now.second(),
        }
    }

    /// Plain `H:MM:SS` — minutes and seconds zero-padded, hour unpadded.
    pub fn text(&self) -> String {
        format!("{}:{:02}:{:02}", self.hour, self.minute, self.second)
    }

    /// Document form: the hour:minute separator carries the blink span.
    pub fn markup(&self) -> String {
        format!(
            "{}{}{:02}:{:02}",
            self.hour, BLINK_SPAN, self.minute, self.second
        )
    }
}

/// Turn the document form back into plain `H:MM:SS`.
pub fn strip_blink(markup: &str) -> String {
    markup.replace(BLINK_SPAN, ":")
}

/// Renders the wall clock into the display element once per second,
/// indefinitely.
#[derive(Debug, Clone)]
pub struct Clock {
    tick: Interval,
}

impl Clock {
    pub fn new() -> Self {
        Self {
            tick: Interval::new(CLOCK_PERIOD),
        }
    }

    /// Write one reading into the display element. No-op when absent.
    pub fn render(&self, doc: &mut Document, reading: ClockReading) {
        if let Some(el) = doc.by_id_mut(TIMER_ID) {
            el.text = reading.markup();
        }
    }

    /// Fire any due ticks. Several missed ticks collapse into one write; the
    /// clock shows current time, not history.
    pub fn poll(&mut self, doc: &mut Document, elapsed: Duration) {
        if self.tick.poll(elapsed) > 0 {
            self.render(doc, ClockReading::now());
        }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::Element;

    fn reading(hour: u32, minute: u32, second: u32) -> ClockReading {
        ClockReading {
            hour,
            minute,
            second,
        }
    }

    #[test]
    fn minutes_and_seconds_are_zero_padded() {
        assert_eq!(reading(9, 5, 3).text(), "9:05:03");
        assert_eq!(reading(0, 0, 0).text(), "0:00:00");
        assert_eq!(reading(23, 59, 59).text(), "23:59:59");
    }

    #[test]
    fn hour_is_not_padded() {
        assert!(reading(7, 30, 0).text().starts_with("7:"));
        assert!(reading(12, 30, 0).text().starts_with("12:"));
    }

    #[test]
    fn markup_wraps_the_hour_minute_separator() {
        let m = reading(9, 5, 3).markup();
        assert_eq!(m, "9<span class=\"blink\">:</span>05:03");
        assert_eq!(strip_blink(&m), "9:05:03");
    }

    #[test]
    fn render_writes_into_the_timer_element() {
        let mut doc = Document::new("test");
        doc.push(Element::new("div").with_attr("id", TIMER_ID));

        let clock = Clock::new();
        clock.render(&mut doc, reading(14, 2, 40));
        assert_eq!(
            strip_blink(&doc.by_id(TIMER_ID).unwrap().text),
            "14:02:40"
        );
    }

    #[test]
    fn missing_display_element_is_a_silent_no_op() {
        let mut doc = Document::new("test");
        let clock = Clock::new();
        clock.render(&mut doc, reading(1, 2, 3));
        assert!(doc.is_empty());
    }

    #[test]
    fn poll_fires_after_one_period() {
        let mut doc = Document::new("test");
        doc.push(Element::new("div").with_attr("id", TIMER_ID));

        let mut clock = Clock::new();
        clock.poll(&mut doc, Duration::from_millis(500));
        assert!(doc.by_id(TIMER_ID).unwrap().text.is_empty());

        clock.poll(&mut doc, Duration::from_millis(1000));
        assert!(!doc.by_id(TIMER_ID).unwrap().text.is_empty());
    }
}
