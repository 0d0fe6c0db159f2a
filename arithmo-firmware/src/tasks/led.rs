//! RGB status LED task
//!
//! Receives brightness and blink commands from the game and drives the
//! three LED channels via PWM. Blinking is timestamp-based, so steady
//! levels on the other channels keep updating while one channel blinks.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::{Duration, Instant, Ticker};

use arithmo_core::feedback::{LedChannel, LedCommand};
use arithmo_drivers::led::StatusLed;

use crate::channels::LED_CHANNEL;

/// Update interval while idle (ms)
const UPDATE_INTERVAL_MS: u64 = 10;

/// PWM wrap value; compare equals brightness directly
const LED_PWM_TOP: u16 = 255;

fn index(channel: LedChannel) -> usize {
    match channel {
        LedChannel::Red => 0,
        LedChannel::Green => 1,
        LedChannel::Blue => 2,
    }
}

/// LED task
///
/// `green_pwm` carries the green channel on compare B. `blue_red_pwm`
/// is a shared slice with blue on compare A and red on compare B.
#[embassy_executor::task]
pub async fn led_task(mut green_pwm: Pwm<'static>, mut blue_red_pwm: Pwm<'static>) {
    info!("LED task started");

    let mut leds: [StatusLed; 3] = [StatusLed::new(), StatusLed::new(), StatusLed::new()];

    let mut green_config = PwmConfig::default();
    green_config.top = LED_PWM_TOP;
    let mut blue_red_config = PwmConfig::default();
    blue_red_config.top = LED_PWM_TOP;

    let start = Instant::now();
    let mut ticker = Ticker::every(Duration::from_millis(UPDATE_INTERVAL_MS));

    loop {
        let now_ms = start.elapsed().as_millis() as u32;

        match select(LED_CHANNEL.receive(), ticker.next()).await {
            Either::First(cmd) => {
                trace!("LED command: {:?}", cmd);
                match cmd {
                    LedCommand::Level { channel, value } => {
                        leds[index(channel)].set_level(value);
                    }
                    LedCommand::Blink {
                        channel,
                        times,
                        delay_ms,
                    } => {
                        leds[index(channel)].start_blink(now_ms, times, delay_ms);
                    }
                }
            }
            Either::Second(()) => {}
        }

        let red = leds[0].update(now_ms);
        let green = leds[1].update(now_ms);
        let blue = leds[2].update(now_ms);

        green_config.compare_b = green as u16;
        green_pwm.set_config(&green_config);

        blue_red_config.compare_a = blue as u16;
        blue_red_config.compare_b = red as u16;
        blue_red_pwm.set_config(&blue_red_config);
    }
}
