//! Audio routing enumerations shared by every chip variant.
//!
//! The amplifier-management layer picks one scene per audio use case and one
//! channel per physical chip; together they select the tuning row a variant
//! loads during power-up. Raw integers from mixer controls or board data
//! enter through the `TryFrom<u8>` conversions, which reject out-of-range
//! values before any bus traffic happens.

// ── Error type ───────────────────────────────────────────────────────────────

/// Error returned when a raw integer does not name a scene or channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct OutOfRangeError {
    /// The value that was rejected.
    pub value: u8,
    /// The largest valid raw value.
    pub max: u8,
}

// ── AudioScene ───────────────────────────────────────────────────────────────

/// Audio use case selecting a tuning row in the variant default tables.
///
/// Raw values follow the platform's mixer-control numbering:
/// playback 0, voice 1, receiver 2, factory 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioScene {
    /// Media playback through the speaker.
    Playback,
    /// Voice-call downlink.
    Voice,
    /// Earpiece / receiver mode.
    Receiver,
    /// Production-line acoustic test.
    Factory,
}

impl AudioScene {
    /// Number of scenes every variant provides tuning rows for.
    pub const COUNT: usize = 4;

    /// All scenes, in raw-value order.
    pub const ALL: [Self; Self::COUNT] =
        [Self::Playback, Self::Voice, Self::Receiver, Self::Factory];
}

impl TryFrom<u8> for AudioScene {
    type Error = OutOfRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Playback),
            1 => Ok(Self::Voice),
            2 => Ok(Self::Receiver),
            3 => Ok(Self::Factory),
            _ => Err(OutOfRangeError { value, max: 3 }),
        }
    }
}

// ── Channel ──────────────────────────────────────────────────────────────────

/// Physical chip position in a stereo pair.
///
/// Raw values: left 0, right 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Left speaker chip.
    Left,
    /// Right speaker chip.
    Right,
}

impl Channel {
    /// Number of channels every variant provides tuning rows for.
    pub const COUNT: usize = 2;

    /// Both channels, in raw-value order.
    pub const ALL: [Self; Self::COUNT] = [Self::Left, Self::Right];
}

impl TryFrom<u8> for Channel {
    type Error = OutOfRangeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Left),
            1 => Ok(Self::Right),
            _ => Err(OutOfRangeError { value, max: 1 }),
        }
    }
}
