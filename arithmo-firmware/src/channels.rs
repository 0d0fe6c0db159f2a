//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy
//! tasks. Uses embassy-sync primitives for safe async communication.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use arithmo_core::feedback::{LedCommand, ToneCommand};
use arithmo_core::input::KeyEvent;

use crate::display::Screen;

/// Channel capacity for keypad events
const KEY_CHANNEL_SIZE: usize = 8;

/// Channel capacity for feedback commands
const FEEDBACK_CHANNEL_SIZE: usize = 4;

/// Raw key press events from the keypad scan task
pub static KEY_CHANNEL: Channel<CriticalSectionRawMutex, KeyEvent, KEY_CHANNEL_SIZE> =
    Channel::new();

/// Tone requests for the buzzer task
pub static TONE_CHANNEL: Channel<CriticalSectionRawMutex, ToneCommand, FEEDBACK_CHANNEL_SIZE> =
    Channel::new();

/// Brightness and blink requests for the LED task
pub static LED_CHANNEL: Channel<CriticalSectionRawMutex, LedCommand, FEEDBACK_CHANNEL_SIZE> =
    Channel::new();

/// Screen contents shared between the game and display tasks
pub static SCREEN: Mutex<CriticalSectionRawMutex, Screen> = Mutex::new(Screen::new());

/// Signal that a screen update is ready to be drawn
pub static SCREEN_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
