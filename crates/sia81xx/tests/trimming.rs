//! Trimming-checksum validation behaviour on a mocked I²C bus.
//!
//! The trimming registers hold three factory bytes whose CRC-4/ITU checksum
//! travels in the low nibble of the last byte. A good checksum must leave
//! the chip untouched; a bad one must flag the failure and program the
//! fallback values.

#![allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::arithmetic_side_effects
)]

use embedded_hal_async::i2c::ErrorKind;
use embedded_hal_mock::eh1::i2c::{Mock as I2cMock, Transaction as I2cTransaction};
use sia81xx::sia815t::registers::{REG_ALGO_CFG2, REG_TRIMMING_BEGIN};
use sia81xx::{Error, PaDriver, Sia815t, TrimmingStatus};

const ADDR: u8 = 0x28;

fn mocked(expectations: &[I2cTransaction]) -> (Sia815t<I2cMock>, I2cMock) {
    let mock = I2cMock::new(expectations);
    (Sia815t::new(mock.clone(), ADDR), mock)
}

#[tokio::test]
async fn valid_checksum_touches_no_registers() {
    // 0x59: data nibble 0x5, stored checksum 0x9 matches the reversed
    // masked buffer.
    let (mut pa, mut i2c) = mocked(&[I2cTransaction::write_read(
        ADDR,
        vec![REG_TRIMMING_BEGIN],
        vec![0x12, 0x34, 0x59],
    )]);
    assert_eq!(pa.validate_trimming().await, Ok(TrimmingStatus::Valid));
    i2c.done();
}

#[tokio::test]
async fn blank_trim_registers_pass_the_check() {
    // All-zero bytes checksum to zero, so an unprogrammed part reads as
    // valid. Matches the chip's behaviour in the field.
    let (mut pa, mut i2c) = mocked(&[I2cTransaction::write_read(
        ADDR,
        vec![REG_TRIMMING_BEGIN],
        vec![0x00, 0x00, 0x00],
    )]);
    assert_eq!(pa.validate_trimming().await, Ok(TrimmingStatus::Valid));
    i2c.done();
}

#[tokio::test]
async fn bad_checksum_flags_the_chip_and_programs_fallbacks() {
    let (mut pa, mut i2c) = mocked(&[
        // Same data bits as the valid vector, wrong stored nibble.
        I2cTransaction::write_read(ADDR, vec![REG_TRIMMING_BEGIN], vec![0x12, 0x34, 0x5A]),
        I2cTransaction::write_read(ADDR, vec![REG_ALGO_CFG2], vec![0x28]),
        I2cTransaction::write(ADDR, vec![REG_ALGO_CFG2, 0x2A]),
        I2cTransaction::write(ADDR, vec![REG_TRIMMING_BEGIN, 0x76, 0x66, 0x70]),
    ]);
    assert_eq!(pa.validate_trimming().await, Ok(TrimmingStatus::Repaired));
    i2c.done();
}

#[tokio::test]
async fn repair_aborts_when_the_flag_read_fails() {
    let (mut pa, mut i2c) = mocked(&[
        I2cTransaction::write_read(ADDR, vec![REG_TRIMMING_BEGIN], vec![0x12, 0x34, 0x5A]),
        I2cTransaction::write_read(ADDR, vec![REG_ALGO_CFG2], vec![0x28])
            .with_error(ErrorKind::Other),
    ]);
    assert!(matches!(pa.validate_trimming().await, Err(Error::Bus(_))));
    // done() fails if the driver had queued the fallback write anyway.
    i2c.done();
}

#[tokio::test]
async fn trimming_read_failure_propagates_before_any_repair() {
    let (mut pa, mut i2c) = mocked(&[I2cTransaction::write_read(
        ADDR,
        vec![REG_TRIMMING_BEGIN],
        vec![0x00, 0x00, 0x00],
    )
    .with_error(ErrorKind::Other)]);
    assert!(matches!(pa.validate_trimming().await, Err(Error::Bus(_))));
    i2c.done();
}

#[tokio::test]
async fn fallback_values_still_fail_a_later_validation() {
    // The fallback bytes do not checksum to their own stored nibble, so a
    // chip running on fallbacks is re-flagged and re-programmed every boot.
    let (mut pa, mut i2c) = mocked(&[
        I2cTransaction::write_read(ADDR, vec![REG_TRIMMING_BEGIN], vec![0x76, 0x66, 0x70]),
        I2cTransaction::write_read(ADDR, vec![REG_ALGO_CFG2], vec![0x2A]),
        I2cTransaction::write(ADDR, vec![REG_ALGO_CFG2, 0x2A]),
        I2cTransaction::write(ADDR, vec![REG_TRIMMING_BEGIN, 0x76, 0x66, 0x70]),
    ]);
    assert_eq!(pa.validate_trimming().await, Ok(TrimmingStatus::Repaired));
    i2c.done();
}

mod crc_properties {
    use proptest::prelude::*;
    use sia81xx::crc::crc4_itu;

    /// The acceptance rule the driver applies to a trimming read.
    fn trimming_accepts(trim: [u8; 3]) -> bool {
        let [first, middle, last] = trim;
        (last & 0x0F) == crc4_itu(&[last & 0xF0, middle, first])
    }

    proptest! {
        #[test]
        fn single_bit_corruption_is_always_detected(
            first in any::<u8>(),
            middle in any::<u8>(),
            high in 0u8..16,
            bit in 0usize..24,
        ) {
            let data_last = high << 4;
            let checksum = crc4_itu(&[data_last, middle, first]);
            let valid = [first, middle, data_last | checksum];
            prop_assert!(trimming_accepts(valid));

            let mut corrupted = valid;
            corrupted[bit / 8] ^= 1 << (bit % 8);
            prop_assert!(!trimming_accepts(corrupted));
        }
    }
}
