//! Tick task for time-based updates
//!
//! Provides the periodic heartbeat for the game task: animation steps,
//! debounce timing, and the result screen timeout all run off it.

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 10;

/// Signal to notify the game task of a tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));
    let start = Instant::now();

    loop {
        ticker.next().await;

        // Elapsed time since start in milliseconds
        let now_ms = start.elapsed().as_millis() as u32;

        TICK_SIGNAL.signal(now_ms);
    }
}
