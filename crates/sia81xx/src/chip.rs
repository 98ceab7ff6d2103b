//! Chip-variant contract: control trait, static descriptors and the
//! variant registry.
//!
//! Every supported chip ships one [`ChipDescriptor`] (register map, chip-ID
//! windows, default tables) and one driver implementing [`PaDriver`]. The
//! amplifier-management layer never touches variant internals; it resolves a
//! descriptor through [`descriptor_for`] and drives the chip through the
//! trait.

use crate::regmap::RegmapConfig;
use crate::scene::{AudioScene, Channel};

// ── Errors ───────────────────────────────────────────────────────────────────

/// Errors returned by register-control operations.
///
/// `E` is the transport error of the underlying I²C implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// The bus transfer itself failed.
    Bus(E),
    /// The access hit a register the map classifies as not
    /// readable/writeable. Carries the first register of the span.
    Access {
        /// First register of the rejected span.
        reg: u8,
    },
    /// The chip-ID register read back a value outside the accepted ranges.
    UnknownChipId {
        /// The rejected ID value.
        id: u8,
    },
}

impl<E> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Bus(_) => write!(f, "register bus transfer failed"),
            Self::Access { reg } => {
                write!(f, "register {reg:#04x} outside the accessible map")
            }
            Self::UnknownChipId { id } => {
                write!(f, "chip ID {id:#04x} outside the accepted ranges")
            }
        }
    }
}

#[cfg(feature = "std")]
impl<E: core::fmt::Debug> std::error::Error for Error<E> {}

// ── Trimming ─────────────────────────────────────────────────────────────────

/// Outcome of a trimming-checksum validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TrimmingStatus {
    /// Stored checksum matched the trimming bytes; nothing was written.
    Valid,
    /// Checksum mismatch; the fallback values were programmed instead.
    Repaired,
}

// ── Control contract ─────────────────────────────────────────────────────────

/// Control operations every chip-variant driver implements.
///
/// Sequences are fail-fast: the first transport error aborts the remaining
/// steps with no rollback, leaving the chip where the failure left it. All
/// operations take `&mut self`; callers serialise concurrent users.
pub trait PaDriver {
    /// Error type returned by control operations.
    type Error: core::fmt::Debug;

    /// Static description of the chip this driver controls.
    fn descriptor(&self) -> &'static ChipDescriptor;

    /// Read the chip-ID register and match it against the descriptor's
    /// accepted ranges. Single attempt, no retries.
    async fn verify_chip_id(&mut self) -> Result<(), Self::Error>;

    /// Enable the amplifier and load the default row for `scene`/`channel`.
    async fn power_up(&mut self, scene: AudioScene, channel: Channel) -> Result<(), Self::Error>;

    /// Mute and power down the amplifier, then wait for it to settle.
    async fn power_down(&mut self) -> Result<(), Self::Error>;

    /// Whether the amplifier enable bit is currently set.
    ///
    /// A failed read reports `false`.
    async fn is_enabled(&mut self) -> bool;

    /// Check the factory trimming checksum, programming the fallback values
    /// on a mismatch.
    async fn validate_trimming(&mut self) -> Result<TrimmingStatus, Self::Error>;
}

// ── Descriptor data ──────────────────────────────────────────────────────────

/// Inclusive range of chip-ID values a variant accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChipIdRange {
    /// Lowest accepted ID.
    pub first: u8,
    /// Highest accepted ID.
    pub last: u8,
}

impl ChipIdRange {
    /// Whether `id` falls inside this range.
    #[must_use]
    pub const fn contains(self, id: u8) -> bool {
        self.first <= id && id <= self.last
    }
}

/// Default rows for one scene, one row per channel.
#[derive(Debug, Clone, Copy)]
pub struct ChannelDefaults {
    /// Row for the left chip.
    pub left: &'static [u8],
    /// Row for the right chip.
    pub right: &'static [u8],
}

/// Scene/channel default-value tables of one variant.
///
/// Rows are written verbatim to the contiguous register range starting at
/// [`first_register`](Self::first_register). The mapping is spelled out per
/// scene and channel; no row is ever selected by index arithmetic.
#[derive(Debug, Clone, Copy)]
pub struct SceneDefaults {
    /// Register the first row byte maps to.
    pub first_register: u8,
    /// Rows for media playback.
    pub playback: ChannelDefaults,
    /// Rows for voice call.
    pub voice: ChannelDefaults,
    /// Rows for receiver mode.
    pub receiver: ChannelDefaults,
    /// Rows for factory test.
    pub factory: ChannelDefaults,
}

impl SceneDefaults {
    /// Default row for a scene/channel pair.
    #[must_use]
    pub fn values(&self, scene: AudioScene, channel: Channel) -> &'static [u8] {
        let pair = match scene {
            AudioScene::Playback => &self.playback,
            AudioScene::Voice => &self.voice,
            AudioScene::Receiver => &self.receiver,
            AudioScene::Factory => &self.factory,
        };
        match channel {
            Channel::Left => pair.left,
            Channel::Right => pair.right,
        }
    }
}

/// Chip variants this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[non_exhaustive]
pub enum ChipModel {
    /// SIA815T smart PA (I²C control, chip IDs `0x6A..=0x6D`).
    Sia815t,
}

impl ChipModel {
    /// Canonical vendor type name, as it appears in board description data.
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::Sia815t => "sia815T",
        }
    }

    /// Parse a vendor type name.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "sia815T" => Some(Self::Sia815t),
            _ => None,
        }
    }
}

/// Static description of one chip variant.
#[derive(Debug, Clone, Copy)]
pub struct ChipDescriptor {
    /// Variant identity.
    pub model: ChipModel,
    /// Register-map classification.
    pub regmap: RegmapConfig,
    /// Chip-ID values the identity check accepts.
    pub chip_id_ranges: &'static [ChipIdRange],
    /// Scene/channel default rows written at power-up.
    pub defaults: &'static SceneDefaults,
}

/// Look up the descriptor for `model`.
///
/// Returns `None` when the variant's cargo feature is disabled in this
/// build.
#[must_use]
pub fn descriptor_for(model: ChipModel) -> Option<&'static ChipDescriptor> {
    match model {
        #[cfg(feature = "sia815t")]
        ChipModel::Sia815t => Some(&crate::sia815t::DESCRIPTOR),
        #[allow(unreachable_patterns)] // reached when variant features are off
        _ => None,
    }
}
