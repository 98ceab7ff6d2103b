//! SIA815T smart power amplifier (SI-IN).
//!
//! Variant unit: register map, vendor default tables and the control
//! driver. Control runs over I²C; the chip reports IDs in `0x6A..=0x6D`
//! depending on stepping.

pub mod defaults;
pub mod registers;

mod driver;

pub use driver::Sia815t;

use crate::chip::{ChipDescriptor, ChipIdRange, ChipModel};

/// Chip-ID windows across SIA815T steppings.
static CHIP_ID_RANGES: [ChipIdRange; 1] = [ChipIdRange {
    first: 0x6A,
    last: 0x6D,
}];

/// Descriptor registered under [`ChipModel::Sia815t`].
pub static DESCRIPTOR: ChipDescriptor = ChipDescriptor {
    model: ChipModel::Sia815t,
    regmap: registers::REGMAP,
    chip_id_ranges: &CHIP_ID_RANGES,
    defaults: &defaults::DEFAULTS,
};
