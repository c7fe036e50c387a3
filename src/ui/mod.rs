pub mod controls;
pub mod legend;
pub mod popup;

pub use controls::{LayerControl, Position};
pub use legend::{LegendControl, LegendEntry};
pub use popup::{escape_html, Popup};
