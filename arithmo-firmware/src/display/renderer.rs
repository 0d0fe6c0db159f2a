//! Screen building for the quiz display
//!
//! The renderer turns game state into a [`Screen`], a small display
//! list of text and rectangle items. The display task owns the I2C
//! hardware and rasterizes the shared screen whenever it is signaled.

use core::fmt::Write;

use heapless::{String, Vec};

use arithmo_core::game::Outcome;

use crate::display::ssd1306::CHAR_WIDTH;

/// One line of text on the screen
#[derive(Debug, Clone)]
pub struct TextItem {
    pub x: u8,
    pub y: u8,
    pub centered: bool,
    pub text: String<24>,
}

/// One rectangle outline on the screen
#[derive(Debug, Clone, Copy)]
pub struct RectItem {
    pub x: u8,
    pub y: u8,
    pub w: u8,
    pub h: u8,
}

/// Display list shared between the game and display tasks
#[derive(Debug, Clone)]
pub struct Screen {
    pub texts: Vec<TextItem, 6>,
    pub rects: Vec<RectItem, 2>,
}

impl Screen {
    pub const fn new() -> Self {
        Self {
            texts: Vec::new(),
            rects: Vec::new(),
        }
    }

    pub fn clear(&mut self) {
        self.texts.clear();
        self.rects.clear();
    }
}

/// Builds screens for each game state
pub struct Renderer {
    screen: Screen,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            screen: Screen::new(),
        }
    }

    /// The most recently built screen
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Boot splash
    pub fn render_boot(&mut self) {
        self.screen.clear();
        self.text_centered(24, "Arithmo");
        self.text_centered(40, "Vamos praticar!");
    }

    /// Question prompt with the answer typed so far
    ///
    /// The question starts at the left edge at vertical offset `y`; the
    /// answer digits continue on the same line, over an entry underline.
    pub fn render_question(&mut self, question: &str, answer: &str, y: u8) {
        self.screen.clear();
        self.text_centered(0, "Resolva a conta:");

        self.text(0, y, question);

        let answer_x = (question.chars().count() * CHAR_WIDTH).min(127) as u8;
        self.text(answer_x, y, answer);

        // Underline marking the answer entry area
        let _ = self.screen.rects.push(RectItem {
            x: answer_x,
            y: y.saturating_add(8),
            w: (9 * CHAR_WIDTH) as u8,
            h: 1,
        });
    }

    /// Correct answer screen
    pub fn render_correct(&mut self) {
        self.screen.clear();
        self.text_centered(8, "Correto! :)");
    }

    /// Wrong answer screen with the expected result
    pub fn render_wrong(&mut self, outcome: &Outcome) {
        self.screen.clear();
        self.text_centered(0, "Errado! :(");

        let mut line: String<24> = String::new();
        let _ = write!(line, "Resp: {}", outcome.expected);
        self.text_centered(16, line.as_str());
    }

    fn text(&mut self, x: u8, y: u8, s: &str) {
        let mut text: String<24> = String::new();
        let _ = text.push_str(s);
        let _ = self.screen.texts.push(TextItem {
            x,
            y,
            centered: false,
            text,
        });
    }

    fn text_centered(&mut self, y: u8, s: &str) {
        let mut text: String<24> = String::new();
        let _ = text.push_str(s);
        let _ = self.screen.texts.push(TextItem {
            x: 0,
            y,
            centered: true,
            text,
        });
    }
}
