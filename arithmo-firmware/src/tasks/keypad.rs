//! Keypad scan task
//!
//! Polls the 4x4 matrix at the game tick rate and forwards raw press
//! events. Debouncing happens in the game context, so every scan a key
//! is down produces an event here.

use defmt::*;
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Ticker};

use arithmo_core::traits::KeySource;
use arithmo_drivers::keypad::MatrixKeypad;

use crate::channels::KEY_CHANNEL;

/// Scan interval in milliseconds
const SCAN_INTERVAL_MS: u64 = 10;

/// Keypad scan task
#[embassy_executor::task]
pub async fn keypad_task(mut keypad: MatrixKeypad<Output<'static>, Input<'static>>) {
    info!("Keypad task started");

    let mut ticker = Ticker::every(Duration::from_millis(SCAN_INTERVAL_MS));

    loop {
        ticker.next().await;

        let event = keypad.scan();
        if event.pressed {
            // A full channel means the game is behind; drop the scan
            let _ = KEY_CHANNEL.try_send(event);
        }
    }
}
