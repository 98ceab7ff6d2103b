//! Factory default register tables.
//!
//! One 20-byte row per scene/channel pair, written verbatim to the
//! contiguous range starting at `REG_SYSCTRL` (`0x01`): the first ten bytes
//! map to `REG_SYSCTRL..=REG_CLSD_OCP_CFG`, the rest pad the range through
//! `0x14`. The values are the vendor tuning release and are not edited by
//! hand.

use crate::chip::{ChannelDefaults, SceneDefaults};

use super::registers::{REG_ALGO_CFG2, REG_BST_CFG, REG_SYSCTRL};

/// Registers covered by one default row.
pub const ROW_LEN: usize = 20;

/// Row index of `REG_BST_CFG`, the first byte of the boost burst.
pub(crate) const BST_CFG_INDEX: usize = 2;
/// Bytes in the boost burst (`REG_BST_CFG` and `REG_CLSD_CFG`).
pub(crate) const BST_BURST_LEN: usize = 2;
/// Row index of `REG_ALGO_CFG2`, the first byte of the algorithm burst.
pub(crate) const ALGO_CFG2_INDEX: usize = 5;
/// Bytes in the algorithm burst: the row remainder from `REG_ALGO_CFG2`
/// through the row end.
pub(crate) const ALGO_BURST_LEN: usize = ROW_LEN - ALGO_CFG2_INDEX;

// Burst geometry is fixed by the register map; verify the indices against it.
const _: () = assert!(BST_CFG_INDEX == (REG_BST_CFG - REG_SYSCTRL) as usize);
const _: () = assert!(ALGO_CFG2_INDEX == (REG_ALGO_CFG2 - REG_SYSCTRL) as usize);
const _: () = assert!(BST_CFG_INDEX + BST_BURST_LEN <= ROW_LEN);

static PLAYBACK_LEFT: [u8; ROW_LEN] = [
    0x7C, 0x20, 0xA8, 0xC9, 0x00, 0x28, 0x73, 0x8A, 0x0B, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

static PLAYBACK_RIGHT: [u8; ROW_LEN] = [
    0x7C, 0x20, 0xAE, 0xC9, 0x00, 0x28, 0x73, 0x8A, 0x0B, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

static VOICE_LEFT: [u8; ROW_LEN] = [
    0x7D, 0x00, 0xA8, 0xC9, 0x00, 0x28, 0x73, 0x8A, 0x0B, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

static VOICE_RIGHT: [u8; ROW_LEN] = [
    0x7D, 0x00, 0xAE, 0xC9, 0x00, 0x28, 0x73, 0x8A, 0x0B, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

static RECEIVER_LEFT: [u8; ROW_LEN] = [
    0x6B, 0x00, 0x08, 0xC9, 0x00, 0x28, 0x45, 0x8A, 0x0D, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

static RECEIVER_RIGHT: [u8; ROW_LEN] = [
    0x7D, 0x20, 0x0C, 0xC9, 0x00, 0x28, 0x73, 0x8A, 0x0D, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

static FACTORY_LEFT: [u8; ROW_LEN] = [
    0x7D, 0x20, 0xA8, 0xC9, 0x00, 0x28, 0x73, 0x8A, 0x0B, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

static FACTORY_RIGHT: [u8; ROW_LEN] = [
    0x7D, 0x20, 0xAE, 0xC9, 0x00, 0x28, 0x73, 0x8A, 0x0B, 0xE4, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x80,
];

/// Scene/channel default rows, first register `REG_SYSCTRL`.
pub static DEFAULTS: SceneDefaults = SceneDefaults {
    first_register: REG_SYSCTRL,
    playback: ChannelDefaults {
        left: &PLAYBACK_LEFT,
        right: &PLAYBACK_RIGHT,
    },
    voice: ChannelDefaults {
        left: &VOICE_LEFT,
        right: &VOICE_RIGHT,
    },
    receiver: ChannelDefaults {
        left: &RECEIVER_LEFT,
        right: &RECEIVER_RIGHT,
    },
    factory: ChannelDefaults {
        left: &FACTORY_LEFT,
        right: &FACTORY_RIGHT,
    },
};

/// Split a default row into its boost and algorithm bursts.
///
/// Rows come from [`DEFAULTS`] and are always [`ROW_LEN`] bytes; the split
/// points are bounds-checked against that at compile time.
pub(crate) fn bursts(row: &'static [u8]) -> (&'static [u8], &'static [u8]) {
    let (_, tail) = row.split_at(BST_CFG_INDEX);
    let (boost, _) = tail.split_at(BST_BURST_LEN);
    let (_, tail) = row.split_at(ALGO_CFG2_INDEX);
    let (algo, _) = tail.split_at(ALGO_BURST_LEN);
    (boost, algo)
}
