use crate::data::quake::QuakeEvent;
use serde::{Deserialize, Serialize};

const UNKNOWN_PLACE: &str = "Unknown location";
const UNKNOWN_TIME: &str = "Unknown time";
const UNKNOWN_MAGNITUDE: &str = "unknown";

/// Matches the JavaScript `Date` string layout, pinned to UTC
const OCCURRENCE_FORMAT: &str = "%a %b %d %Y %H:%M:%S UTC";

/// Info bubble bound to a marker, opened on click
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    /// HTML fragment shown inside the bubble
    pub content: String,
    pub max_width: u32,
}

impl Popup {
    pub fn new(content: String) -> Self {
        Self {
            content,
            max_width: 300,
        }
    }

    /// Place heading, human-readable occurrence time and magnitude
    pub fn quake_summary(event: &QuakeEvent) -> Self {
        let place = event
            .place
            .as_deref()
            .map(escape_html)
            .unwrap_or_else(|| UNKNOWN_PLACE.to_string());
        let occurred = event
            .occurred_at()
            .map(|t| t.format(OCCURRENCE_FORMAT).to_string())
            .unwrap_or_else(|| UNKNOWN_TIME.to_string());
        let magnitude = event
            .magnitude
            .map(|m| m.to_string())
            .unwrap_or_else(|| UNKNOWN_MAGNITUDE.to_string());

        Self::new(format!(
            "<h3 align='center'>{}</h3><hr><p><u>Occurrence:</u> {}</p><p><u>Magnitude:</u> {}</p>",
            place, occurred, magnitude
        ))
    }
}

/// Escapes the characters that matter inside HTML text and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_quake_summary() {
        let event = QuakeEvent::new(LatLng::new(10.0, 20.0), Some(3.2))
            .with_place("10km N of Testville")
            .with_time(1_700_000_000_000);

        let popup = Popup::quake_summary(&event);
        assert!(popup.content.contains("<h3 align='center'>10km N of Testville</h3>"));
        assert!(popup.content.contains("Tue Nov 14 2023 22:13:20 UTC"));
        assert!(popup.content.contains("<u>Magnitude:</u> 3.2</p>"));
    }

    #[test]
    fn test_missing_fields_use_fallbacks() {
        let popup = Popup::quake_summary(&QuakeEvent::new(LatLng::default(), None));
        assert!(popup.content.contains("Unknown location"));
        assert!(popup.content.contains("Unknown time"));
        assert!(popup.content.contains("<u>Magnitude:</u> unknown"));
    }

    #[test]
    fn test_place_is_escaped() {
        let event = QuakeEvent::new(LatLng::default(), Some(1.0)).with_place("<script>x</script>");
        let popup = Popup::quake_summary(&event);
        assert!(!popup.content.contains("<script>"));
        assert!(popup.content.contains("&lt;script&gt;"));
    }
}
