//! OLED display support: driver, font, and screen building

mod font;
mod renderer;
mod ssd1306;

pub use renderer::{RectItem, Renderer, Screen, TextItem};
pub use ssd1306::Ssd1306;
