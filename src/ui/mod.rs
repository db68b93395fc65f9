pub mod layout;
pub mod renderer;
pub mod span;
pub mod style;
pub mod theme;

pub use renderer::{RenderFrame, Renderer};
pub use span::{Span, SpanLine, Wrap};
pub use style::{Color, Style};
pub use theme::Theme;
