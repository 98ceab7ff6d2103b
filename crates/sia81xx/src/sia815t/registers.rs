//! SIA815T register map.
//!
//! Addresses and programming patterns follow the vendor register listing.
//! Control registers sit in `0x00..=0x14`, factory trimming in
//! `0x20..=0x22`; everything is 8-bit wide and volatile.

use crate::regmap::RegmapConfig;

/// Chip ID, hardwired per stepping (`0x6A..=0x6D`).
pub const REG_CHIP_ID: u8 = 0x00;
/// System control: power state and mute.
pub const REG_SYSCTRL: u8 = 0x01;
/// Algorithm enable bits.
pub const REG_ALGO_EN: u8 = 0x02;
/// Boost converter configuration.
pub const REG_BST_CFG: u8 = 0x03;
/// Class-D output stage configuration.
pub const REG_CLSD_CFG: u8 = 0x04;
/// Algorithm configuration 1 (bit 0: amplifier enable).
pub const REG_ALGO_CFG1: u8 = 0x05;
/// Algorithm configuration 2 (bit 1: trimming-invalid flag).
pub const REG_ALGO_CFG2: u8 = 0x06;
/// Algorithm configuration 3.
pub const REG_ALGO_CFG3: u8 = 0x07;
/// Algorithm configuration 4.
pub const REG_ALGO_CFG4: u8 = 0x08;
/// Algorithm configuration 5.
pub const REG_ALGO_CFG5: u8 = 0x09;
/// Class-D overcurrent-protection configuration.
pub const REG_CLSD_OCP_CFG: u8 = 0x0A;
/// Status register 1.
pub const REG_STAT1: u8 = 0x10;
/// Status register 2.
pub const REG_STAT2: u8 = 0x11;
/// Test configuration.
pub const REG_TEST_CFG: u8 = 0x12;
/// First factory trimming register.
pub const REG_TRIMMING_BEGIN: u8 = 0x20;
/// Last factory trimming register.
pub const REG_TRIMMING_END: u8 = 0x22;

/// `REG_ALGO_CFG1` bit 0: enables the amplifier and its protection
/// algorithm.
pub const ALGO_CFG1_ENABLE: u8 = 0x01;
/// `REG_ALGO_CFG2` bit 1: set when the factory trimming failed its
/// checksum and the fallback values are in use.
pub const ALGO_CFG2_TRIM_INVALID: u8 = 0x02;
/// `REG_SYSCTRL` pattern written at power-down: muted, analog blocks off.
pub const SYSCTRL_STANDBY: u8 = 0x41;
/// `REG_ALGO_EN` pattern written at power-down: all algorithm stages off.
pub const ALGO_EN_DISABLE: u8 = 0x20;

/// Number of trimming registers (`0x20..=0x22`).
pub const TRIMMING_LEN: usize = 3;
/// Low nibble of the last trimming byte carries the CRC-4/ITU checksum of
/// the other trimming bits.
pub const TRIMMING_CRC_MASK: u8 = 0x0F;
/// Values programmed into `0x20..=0x22` when the stored checksum does not
/// match.
pub const TRIMMING_FALLBACK: [u8; TRIMMING_LEN] = [0x76, 0x66, 0x70];

/// Whether `reg` may be written.
#[must_use]
pub fn is_writeable(reg: u8) -> bool {
    reg <= REG_TRIMMING_END
}

/// Whether `reg` may be read.
///
/// `0x41` is a vendor read-only window outside the writable map.
#[must_use]
pub fn is_readable(reg: u8) -> bool {
    reg <= REG_TRIMMING_END || reg == 0x41
}

/// Whether `reg` must bypass caching. Every SIA815T register is volatile.
#[must_use]
pub fn is_volatile(_reg: u8) -> bool {
    true
}

/// Register-map description published through the chip descriptor.
pub const REGMAP: RegmapConfig = RegmapConfig {
    name: "sia815T",
    reg_bits: 8,
    val_bits: 8,
    readable: is_readable,
    writeable: is_writeable,
    volatile: is_volatile,
};
