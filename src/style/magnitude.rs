//! Magnitude classification.
//!
//! Colors follow the ColorBrewer YlOrRd-like sequential ramp: the higher the
//! magnitude, the darker the marker. Upper bounds are inclusive, so `2.0`
//! belongs to the second bracket and `2.01` to the third.

use serde::Serialize;

/// A fixed magnitude range mapped to a display color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MagnitudeBracket {
    /// Lower end used for the legend label (exclusive, except for the first bracket)
    pub lower: f64,
    /// Inclusive upper end; `None` for the open-ended last bracket
    pub upper: Option<f64>,
    pub color: &'static str,
}

impl MagnitudeBracket {
    /// Whether `magnitude` is at or below this bracket's upper end
    pub fn admits(&self, magnitude: f64) -> bool {
        match self.upper {
            Some(upper) => magnitude <= upper,
            None => true,
        }
    }

    /// Legend label: `"lower–upper"`, or `"lower+"` when open-ended
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{}&ndash;{}", self.lower, upper),
            None => format!("{}+", self.lower),
        }
    }
}

/// The five brackets in ascending severity
pub const MAGNITUDE_BRACKETS: [MagnitudeBracket; 5] = [
    MagnitudeBracket { lower: 0.0, upper: Some(1.0), color: "#c2e699" },
    MagnitudeBracket { lower: 1.0, upper: Some(2.0), color: "#fecc5c" },
    MagnitudeBracket { lower: 2.0, upper: Some(3.0), color: "#fd8d3c" },
    MagnitudeBracket { lower: 3.0, upper: Some(4.0), color: "#f03b20" },
    MagnitudeBracket { lower: 4.0, upper: None, color: "#6f0303" },
];

/// Finds the bracket for a magnitude.
///
/// Missing and NaN magnitudes fall into the lowest bracket, as do negative
/// values. Anything above the last finite bound lands in the open-ended one.
pub fn classify(magnitude: Option<f64>) -> &'static MagnitudeBracket {
    let lowest = &MAGNITUDE_BRACKETS[0];
    let Some(m) = magnitude.filter(|m| !m.is_nan()) else {
        return lowest;
    };

    MAGNITUDE_BRACKETS
        .iter()
        .find(|bracket| bracket.admits(m))
        .unwrap_or(&MAGNITUDE_BRACKETS[MAGNITUDE_BRACKETS.len() - 1])
}

/// Color token for a magnitude
pub fn color_for(magnitude: Option<f64>) -> &'static str {
    classify(magnitude).color
}
