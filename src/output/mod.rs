pub mod html;

pub use html::HtmlExporter;
