//! Magnitude legend, painted once in a corner of the map.

use crate::style::magnitude::{color_for, MagnitudeBracket, MAGNITUDE_BRACKETS};
use crate::ui::controls::Position;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub bracket: MagnitudeBracket,
    pub color: &'static str,
    /// HTML label, e.g. `1&ndash;2` or `4+`
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendControl {
    pub title: String,
    pub position: Position,
    pub entries: Vec<LegendEntry>,
}

impl LegendControl {
    /// One entry per magnitude bracket, in ascending order.
    ///
    /// Swatches are sampled one unit above each bracket's lower end, which
    /// always falls inside the bracket.
    pub fn magnitude() -> Self {
        let entries = MAGNITUDE_BRACKETS
            .iter()
            .map(|bracket| LegendEntry {
                bracket: *bracket,
                color: color_for(Some(bracket.lower + 1.0)),
                label: bracket.label(),
            })
            .collect();

        Self {
            title: "Magnitude".to_string(),
            position: Position::BottomRight,
            entries,
        }
    }

    /// Inner HTML of the legend box
    pub fn to_html(&self) -> String {
        let mut html = format!("<strong>{}</strong><br><hr>", self.title);
        let last = self.entries.len().saturating_sub(1);
        for (i, entry) in self.entries.iter().enumerate() {
            html.push_str(&format!(
                "<i style=\"background:{}\">&nbsp;&nbsp;&nbsp;&nbsp;</i>&nbsp;&nbsp;{}",
                entry.color, entry.label
            ));
            if i < last {
                html.push_str("<br>");
            }
        }
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_entries_last_open_ended() {
        let legend = LegendControl::magnitude();
        assert_eq!(legend.entries.len(), 5);
        assert_eq!(legend.position, Position::BottomRight);

        let last = legend.entries.last().unwrap();
        assert!(last.label.ends_with('+'));
        assert!(!last.label.contains("&ndash;"));
        assert!(last.bracket.upper.is_none());
    }

    #[test]
    fn test_swatches_match_bracket_colors() {
        for entry in LegendControl::magnitude().entries {
            assert_eq!(entry.color, entry.bracket.color);
        }
    }

    #[test]
    fn test_html() {
        let html = LegendControl::magnitude().to_html();
        assert!(html.starts_with("<strong>Magnitude</strong><br><hr>"));
        assert!(html.contains("background:#c2e699"));
        assert!(html.contains("&nbsp;&nbsp;0&ndash;1<br>"));
        assert!(html.ends_with("&nbsp;&nbsp;4+"));
        assert_eq!(html.matches("<i style=").count(), 5);
    }
}
