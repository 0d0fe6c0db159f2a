//! Arithmo - Arithmetic Quiz Firmware
//!
//! Main firmware binary for RP2040-based boards with a 4x4 matrix
//! keypad, 128x64 OLED, passive buzzer, and RGB status LED. Poses
//! random addition problems and checks typed answers.
//!
//! Named after the Greek "arithmos" meaning "number".

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C1;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Instant;
use {defmt_rtt as _, panic_probe as _};

use arithmo_core::config::QuizProfile;
use arithmo_core::feedback::{LedChannel, LedCommand, Melody, ToneCommand};
use arithmo_drivers::keypad::MatrixKeypad;

mod channels;
mod display;
mod tasks;

use crate::channels::{LED_CHANNEL, TONE_CHANNEL};
use crate::display::Ssd1306;

bind_interrupts!(struct Irqs {
    I2C1_IRQ => i2c::InterruptHandler<I2C1>;
});

/// Active difficulty for this build
#[cfg(feature = "simple")]
const PROFILE: QuizProfile = QuizProfile::SIMPLE;
#[cfg(not(feature = "simple"))]
const PROFILE: QuizProfile = QuizProfile::EXTENDED;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Arithmo firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Keypad matrix: columns driven one at a time, rows read back
    // through pull-downs
    let cols = [
        Output::new(p.PIN_17, Level::Low),
        Output::new(p.PIN_18, Level::Low),
        Output::new(p.PIN_19, Level::Low),
        Output::new(p.PIN_20, Level::Low),
    ];
    let rows = [
        Input::new(p.PIN_4, Pull::Down),
        Input::new(p.PIN_8, Pull::Down),
        Input::new(p.PIN_9, Pull::Down),
        Input::new(p.PIN_16, Pull::Down),
    ];
    let keypad = MatrixKeypad::new(cols, rows);

    // Buzzer on GPIO21 (PWM slice 2, channel B)
    let buzzer_pwm = Pwm::new_output_b(p.PWM_SLICE2, p.PIN_21, PwmConfig::default());

    // RGB LED: green on GPIO11 (slice 5 B), blue/red on GPIO12/GPIO13
    // (slice 6 A/B)
    let mut led_config = PwmConfig::default();
    led_config.top = 255;
    let green_pwm = Pwm::new_output_b(p.PWM_SLICE5, p.PIN_11, led_config.clone());
    let blue_red_pwm = Pwm::new_output_ab(p.PWM_SLICE6, p.PIN_12, p.PIN_13, led_config);

    // OLED on I2C1 (SDA=GPIO14, SCL=GPIO15)
    let i2c = I2c::new_async(p.I2C1, p.PIN_15, p.PIN_14, Irqs, i2c::Config::default());
    let mut oled = Ssd1306::new(i2c);
    if let Err(e) = oled.init().await {
        error!("Failed to initialize display: {:?}", e);
    } else {
        info!("OLED initialized");
        oled.clear();
        oled.draw_text_centered("Arithmo", 24);
        oled.draw_text_centered("Vamos praticar!", 40);
        oled.flush().await.ok();
    }

    // Boot time in microseconds varies enough with flash and I2C timing
    // to make a usable seed
    let seed = Instant::now().as_micros() as u32;

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::keypad_task(keypad)).unwrap();
    spawner.spawn(tasks::buzzer_task(buzzer_pwm)).unwrap();
    spawner.spawn(tasks::led_task(green_pwm, blue_red_pwm)).unwrap();
    spawner.spawn(tasks::display_task(oled)).unwrap();
    spawner.spawn(tasks::game_task(PROFILE, seed)).unwrap();

    // Power-on greeting
    let _ = TONE_CHANNEL.try_send(ToneCommand::Melody(Melody::Welcome));
    let _ = LED_CHANNEL.try_send(LedCommand::Blink {
        channel: LedChannel::Red,
        times: 1,
        delay_ms: 100,
    });

    info!("All tasks spawned, firmware running");
}
