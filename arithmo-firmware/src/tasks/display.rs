//! Display update task
//!
//! Waits for screen update signals, rasterizes the shared display list
//! into the frame buffer, and flushes it over I2C.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C1;

use crate::channels::{SCREEN, SCREEN_UPDATE};
use crate::display::Ssd1306;

/// The OLED's I2C bus type
pub type OledI2c = I2c<'static, I2C1, Async>;

/// Display update task
#[embassy_executor::task]
pub async fn display_task(mut display: Ssd1306<OledI2c>) {
    info!("Display task started");

    loop {
        SCREEN_UPDATE.wait().await;

        // Snapshot the screen so the game never blocks on I2C
        let screen = {
            let shared = SCREEN.lock().await;
            shared.clone()
        };

        display.clear();

        for item in &screen.texts {
            if item.centered {
                display.draw_text_centered(item.text.as_str(), item.y as usize);
            } else {
                display.draw_text(item.x as usize, item.y as usize, item.text.as_str());
            }
        }

        for rect in &screen.rects {
            display.draw_rect(
                rect.x as usize,
                rect.y as usize,
                rect.w as usize,
                rect.h as usize,
            );
        }

        if let Err(e) = display.flush().await {
            warn!("OLED flush failed: {:?}", e);
        }
    }
}
