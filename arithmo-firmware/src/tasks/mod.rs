//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod buzzer;
pub mod display;
pub mod game;
pub mod keypad;
pub mod led;
pub mod tick;

pub use buzzer::buzzer_task;
pub use display::display_task;
pub use game::game_task;
pub use keypad::keypad_task;
pub use led::led_task;
pub use tick::tick_task;
