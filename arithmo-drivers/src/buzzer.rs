//! Buzzer note tables and PWM tone math
//!
//! The buzzer is a passive piezo driven by a PWM slice. Playing a note
//! means programming the slice for the note's frequency at 50% duty,
//! waiting out the duration, then dropping the duty to zero. The tables
//! here are data; the firmware's buzzer task does the waiting.

use arithmo_core::feedback::Melody;

/// One buzzer note
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    pub freq_hz: u16,
    pub duration_ms: u16,
}

const fn note(freq_hz: u16, duration_ms: u16) -> Note {
    Note {
        freq_hz,
        duration_ms,
    }
}

/// Silence between melody notes (ms)
pub const NOTE_GAP_MS: u16 = 100;

/// Feedback frequency for each key of the 4x4 matrix (Hz)
///
/// A diatonic spread from C4 to D6, one note per key cap. The melodies
/// below are built from entries of this table.
pub const KEY_FREQ_MAP: [[u16; 4]; 4] = [
    [262, 294, 330, 349],   // C4, D4, E4, F4
    [392, 440, 494, 523],   // G4, A4, B4, C5
    [587, 659, 698, 784],   // D5, E5, F5, G5
    [880, 988, 1047, 1175], // A5, B5, C6, D6
];

const C4: u16 = KEY_FREQ_MAP[0][0];
const C5: u16 = KEY_FREQ_MAP[1][3];
const E5: u16 = KEY_FREQ_MAP[2][1];
const G5: u16 = KEY_FREQ_MAP[2][3];
const C6: u16 = KEY_FREQ_MAP[3][2];

/// Power-on greeting: rising C-major arpeggio
pub const WELCOME: &[Note] = &[
    note(C5, 100),
    note(E5, 100),
    note(G5, 100),
    note(C6, 200),
];

/// Correct answer: C5, E5, G5
pub const SUCCESS: &[Note] = &[note(C5, 150), note(E5, 150), note(G5, 150)];

/// Wrong answer: a long low C4
pub const FAILURE: &[Note] = &[note(C4, 500)];

/// Resolve a melody to its note table
pub fn melody_notes(melody: Melody) -> &'static [Note] {
    match melody {
        Melody::Welcome => WELCOME,
        Melody::Success => SUCCESS,
        Melody::Failure => FAILURE,
    }
}

/// Compute PWM clock divider and wrap value for a target frequency
///
/// Picks the smallest integer divider that brings the wrap count into
/// the 16-bit counter, then `top = clock / (divider * freq) - 1`.
/// Returns `(divider, top)`; duty for a square wave is `top / 2`.
pub fn pwm_params(clock_hz: u32, freq_hz: u16) -> (u8, u16) {
    let freq = freq_hz.max(1) as u32;
    let divider = (clock_hz / (freq << 16) + 1).min(255) as u8;
    let top = (clock_hz / (divider as u32 * freq)).saturating_sub(1);
    (divider, top.min(u16::MAX as u32) as u16)
}
