//! Lightweight inline-style handling.
//!
//! Parses `style=""` attribute values into the small set of properties the
//! page components read and write (`display`, `animation-duration`), and
//! serializes them back so style mutations stay visible as attributes.

/// CSS `display` values the page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Inline,
    Block,
    None,
}

/// Extracted inline-style properties.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleProps {
    pub display: Option<Display>,
    /// Seconds. The standard and `-webkit-` prefixed properties are treated
    /// as one value; serialization emits both.
    pub animation_duration: Option<f32>,
}

/// Parse an inline `style="..."` attribute value.
pub fn parse_inline_style(style: &str) -> StyleProps {
    let mut props = StyleProps::default();
    for decl in style.split(';') {
        let parts: Vec<&str> = decl.splitn(2, ':').collect();
        if parts.len() != 2 {
            continue;
        }
        let prop = parts[0].trim();
        let val = parts[1].trim();
        match prop {
            "display" => props.display = parse_display(val),
            "animation-duration" | "-webkit-animation-duration" => {
                props.animation_duration = parse_duration_secs(val)
            }
            _ => {}
        }
    }
    props
}

/// Serialize properties back into an inline-style string.
///
/// The animation duration is written vendor-prefixed first, then standard,
/// matching how browsers expect the fallback ordering.
pub fn render_inline_style(props: &StyleProps) -> String {
    let mut out = String::new();
    if let Some(display) = props.display {
        let val = match display {
            Display::Inline => "inline",
            Display::Block => "block",
            Display::None => "none",
        };
        out.push_str("display:");
        out.push_str(val);
        out.push(';');
    }
    if let Some(secs) = props.animation_duration {
        out.push_str(&format!(
            "-webkit-animation-duration:{}s;animation-duration:{}s;",
            secs, secs
        ));
    }
    out
}

fn parse_display(val: &str) -> Option<Display> {
    match val.trim().to_lowercase().as_str() {
        "inline" => Some(Display::Inline),
        "block" => Some(Display::Block),
        "none" => Some(Display::None),
        _ => None,
    }
}

/// Parse a CSS time value (`75s`, `1500ms`, or a bare number of seconds).
fn parse_duration_secs(val: &str) -> Option<f32> {
    let v = val.trim().to_lowercase();
    if let Some(ms) = v.strip_suffix("ms") {
        return ms.trim().parse::<f32>().ok().map(|n| n / 1000.0);
    }
    if let Some(s) = v.strip_suffix('s') {
        return s.trim().parse::<f32>().ok();
    }
    v.parse::<f32>().ok()
}
