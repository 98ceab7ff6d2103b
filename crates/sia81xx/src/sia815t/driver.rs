//! SIA815T control driver.
//!
//! Talks to the chip over `embedded_hal_async::i2c::I2c`, so it is
//! HAL-agnostic while remaining async. Only the control plane passes
//! through here; the audio stream reaches the chip over I²S.
//!
//! Every register access runs through the map classification first, so a
//! bad span fails with [`Error::Access`] before any bus traffic.

use embassy_time::{Duration, Timer};
use embedded_hal_async::i2c::I2c;
use heapless::Vec;

use crate::chip::{ChipDescriptor, Error, PaDriver, TrimmingStatus};
use crate::crc::crc4_itu;
use crate::scene::{AudioScene, Channel};

use super::defaults;
use super::registers::*;
use super::DESCRIPTOR;

/// Wait after the power-down writes for the output stage to discharge.
const POWER_OFF_SETTLE: Duration = Duration::from_millis(1);

/// Wait before a trimming read for the on-chip trim cells to latch.
const TRIMMING_LATCH: Duration = Duration::from_millis(1);

/// Largest write frame: one address byte plus the whole writable span.
const FRAME_CAPACITY: usize = 1 + REG_TRIMMING_END as usize + 1;

/// Whether every register in the `len`-byte span starting at `first`
/// passes `allowed`.
fn span_allowed(first: u8, len: usize, allowed: fn(u8) -> bool) -> bool {
    let Some(count) = len.checked_sub(1) else {
        return false; // empty span, nothing the bus could transfer
    };
    let Ok(count) = u8::try_from(count) else {
        return false;
    };
    let Some(last) = first.checked_add(count) else {
        return false; // span wraps past the 8-bit address space
    };
    (first..=last).all(allowed)
}

/// SIA815T register-control driver.
///
/// Owns the bus handle; `&mut self` on every operation serialises control
/// sequences without any internal locking.
pub struct Sia815t<I> {
    i2c: I,
    address: u8,
}

impl<I: I2c> Sia815t<I> {
    /// Create a driver for the chip at `address`.
    ///
    /// `address` is the chip's 7-bit bus address from the board description
    /// data.
    pub fn new(i2c: I, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Read one register.
    ///
    /// # Errors
    ///
    /// [`Error::Access`] if the map classifies `reg` as not readable,
    /// [`Error::Bus`] if the transfer fails.
    pub async fn read_register(&mut self, reg: u8) -> Result<u8, Error<I::Error>> {
        let mut buf = [0u8; 1];
        self.read_block(reg, &mut buf).await?;
        let [value] = buf;
        Ok(value)
    }

    /// Write one register.
    ///
    /// # Errors
    ///
    /// [`Error::Access`] if the map classifies `reg` as not writeable,
    /// [`Error::Bus`] if the transfer fails.
    pub async fn write_register(&mut self, reg: u8, value: u8) -> Result<(), Error<I::Error>> {
        self.write_block(reg, &[value]).await
    }

    /// Burst-read `buf.len()` registers starting at `first`.
    ///
    /// The chip auto-increments the register address during the read phase.
    async fn read_block(&mut self, first: u8, buf: &mut [u8]) -> Result<(), Error<I::Error>> {
        if !span_allowed(first, buf.len(), is_readable) {
            return Err(Error::Access { reg: first });
        }
        self.i2c
            .write_read(self.address, &[first], buf)
            .await
            .map_err(Error::Bus)
    }

    /// Burst-write `values` starting at `first`.
    async fn write_block(&mut self, first: u8, values: &[u8]) -> Result<(), Error<I::Error>> {
        if !span_allowed(first, values.len(), is_writeable) {
            return Err(Error::Access { reg: first });
        }
        // The classification check bounds the span inside the register
        // file, so the frame always fits.
        let mut frame: Vec<u8, FRAME_CAPACITY> = Vec::new();
        frame.push(first).ok();
        frame.extend_from_slice(values).ok();
        self.i2c
            .write(self.address, &frame)
            .await
            .map_err(Error::Bus)
    }
}

impl<I: I2c> PaDriver for Sia815t<I> {
    type Error = Error<I::Error>;

    fn descriptor(&self) -> &'static ChipDescriptor {
        &DESCRIPTOR
    }

    async fn verify_chip_id(&mut self) -> Result<(), Self::Error> {
        let id = self.read_register(REG_CHIP_ID).await?;
        if DESCRIPTOR.chip_id_ranges.iter().any(|r| r.contains(id)) {
            Ok(())
        } else {
            Err(Error::UnknownChipId { id })
        }
    }

    async fn power_up(&mut self, scene: AudioScene, channel: Channel) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SIA815T power up: {} {}", scene, channel);

        // Enable the protection algorithm before loading the tuning row.
        let cfg1 = self.read_register(REG_ALGO_CFG1).await?;
        self.write_register(REG_ALGO_CFG1, cfg1 | ALGO_CFG1_ENABLE)
            .await?;

        let row = DESCRIPTOR.defaults.values(scene, channel);
        let (boost, algo) = defaults::bursts(row);

        // Boost and class-D configuration in one burst, then the row
        // remainder from ALGO_CFG2. ALGO_CFG1 sits between the two bursts
        // and keeps the value written above.
        self.write_block(REG_BST_CFG, boost).await?;
        self.write_block(REG_ALGO_CFG2, algo).await
    }

    async fn power_down(&mut self) -> Result<(), Self::Error> {
        #[cfg(feature = "defmt")]
        defmt::debug!("SIA815T power down");

        self.write_register(REG_ALGO_CFG1, 0x00).await?;
        self.write_register(REG_SYSCTRL, SYSCTRL_STANDBY).await?;
        self.write_register(REG_ALGO_EN, ALGO_EN_DISABLE).await?;

        // Let the output stage discharge before the caller cuts supplies.
        Timer::after(POWER_OFF_SETTLE).await;
        Ok(())
    }

    async fn is_enabled(&mut self) -> bool {
        match self.read_register(REG_ALGO_CFG1).await {
            Ok(value) => value & ALGO_CFG1_ENABLE != 0,
            Err(_) => false,
        }
    }

    async fn validate_trimming(&mut self) -> Result<TrimmingStatus, Self::Error> {
        Timer::after(TRIMMING_LATCH).await;

        let mut trim = [0u8; TRIMMING_LEN];
        self.read_block(REG_TRIMMING_BEGIN, &mut trim).await?;

        // The checksum travels in the low nibble of the last byte. Mask it
        // out and feed the bytes last register first.
        let [first, middle, last] = trim;
        let stored = last & TRIMMING_CRC_MASK;
        let computed = crc4_itu(&[last & !TRIMMING_CRC_MASK, middle, first]);

        if computed == stored {
            return Ok(TrimmingStatus::Valid);
        }

        #[cfg(feature = "defmt")]
        defmt::warn!(
            "SIA815T trimming check failed: stored {=u8:#x}, computed {=u8:#x}",
            stored,
            computed
        );

        let cfg2 = self.read_register(REG_ALGO_CFG2).await?;
        self.write_register(REG_ALGO_CFG2, cfg2 | ALGO_CFG2_TRIM_INVALID)
            .await?;
        self.write_block(REG_TRIMMING_BEGIN, &TRIMMING_FALLBACK)
            .await?;
        Ok(TrimmingStatus::Repaired)
    }
}
