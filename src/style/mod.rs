pub mod magnitude;

pub use magnitude::{classify, color_for, MagnitudeBracket, MAGNITUDE_BRACKETS};
