//! Buzzer task
//!
//! Receives tone commands from the game and drives the passive buzzer
//! via PWM. One note at a time; commands queued while a melody plays
//! start as soon as it finishes.

use defmt::*;
use embassy_rp::pwm::{Config as PwmConfig, Pwm};
use embassy_time::Timer;
use fixed::traits::ToFixed;

use arithmo_core::feedback::ToneCommand;
use arithmo_drivers::buzzer::{melody_notes, pwm_params, NOTE_GAP_MS};

use crate::channels::TONE_CHANNEL;

/// RP2040 system clock feeding the PWM slices
const SYS_CLK_HZ: u32 = 125_000_000;

/// Buzzer task
///
/// The buzzer sits on an odd GPIO, so the tone goes out on compare B.
#[embassy_executor::task]
pub async fn buzzer_task(mut pwm: Pwm<'static>) {
    info!("Buzzer task started");

    let mut config = PwmConfig::default();

    loop {
        match TONE_CHANNEL.receive().await {
            ToneCommand::Note {
                freq_hz,
                duration_ms,
            } => {
                play_note(&mut pwm, &mut config, freq_hz, duration_ms).await;
            }
            ToneCommand::Melody(melody) => {
                trace!("Playing melody {:?}", melody);
                let notes = melody_notes(melody);
                for (i, note) in notes.iter().enumerate() {
                    play_note(&mut pwm, &mut config, note.freq_hz, note.duration_ms).await;
                    if i + 1 < notes.len() {
                        Timer::after_millis(NOTE_GAP_MS as u64).await;
                    }
                }
            }
        }
    }
}

/// Sound one note at 50% duty, then silence the output
async fn play_note(pwm: &mut Pwm<'static>, config: &mut PwmConfig, freq_hz: u16, duration_ms: u16) {
    let (divider, top) = pwm_params(SYS_CLK_HZ, freq_hz);

    config.divider = divider.to_fixed();
    config.top = top;
    config.compare_b = top / 2;
    pwm.set_config(config);

    Timer::after_millis(duration_ms as u64).await;

    config.compare_b = 0;
    pwm.set_config(config);
}
