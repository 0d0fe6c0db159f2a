//! Feedback commands emitted by the game
//!
//! The game decides *what* to signal; dedicated peripheral tasks own
//! the buzzer PWM and LED hardware and consume these over channels.

/// Named tone sequences; note tables live with the buzzer driver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Melody {
    /// Power-on greeting
    Welcome,
    /// Correct answer (rising C5-E5-G5)
    Success,
    /// Wrong answer (low C4)
    Failure,
}

/// Command for the buzzer task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ToneCommand {
    /// Single fire-and-forget note
    Note { freq_hz: u16, duration_ms: u16 },
    /// Play a named sequence
    Melody(Melody),
}

/// Short beep confirming an accepted digit
pub const DIGIT_BEEP: ToneCommand = ToneCommand::Note {
    freq_hz: 440,
    duration_ms: 50,
};

/// Lower beep confirming the buffer was cleared
pub const CLEAR_BEEP: ToneCommand = ToneCommand::Note {
    freq_hz: 220,
    duration_ms: 50,
};

/// RGB status LED channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedChannel {
    Red,
    Green,
    Blue,
}

/// Command for the LED task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedCommand {
    /// Set a channel's brightness (PWM duty, 0-255)
    Level { channel: LedChannel, value: u8 },
    /// Blink a channel on/off
    Blink {
        channel: LedChannel,
        times: u8,
        delay_ms: u16,
    },
}

/// One feedback side effect requested by a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    Tone(ToneCommand),
    Led(LedCommand),
}
