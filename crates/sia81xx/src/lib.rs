//! Register-level control drivers for SI-IN SIA81xx smart power amplifiers.
//!
//! SIA81xx parts sit between a codec output and the speaker. The audio
//! stream reaches them over I²S and never passes through this crate; what
//! lives here is the I²C control plane the amplifier-management layer uses
//! to bring chips up and down.
//!
//! # Architecture
//!
//! ```text
//! Amplifier management (platform code)
//!         ↓ PaDriver + ChipDescriptor
//! Chip variant units (sia815t, …)
//!         ↓ embedded-hal-async I²C
//! Bus implementation (HAL)
//! ```
//!
//! Each variant is an independent table+logic unit behind its own cargo
//! feature. The shared surface is the [`PaDriver`] trait (chip-ID check,
//! power sequencing, trimming validation, enable query) plus the static
//! [`ChipDescriptor`] (register map, chip-ID windows, default tables)
//! resolved through [`descriptor_for`].
//!
//! # Supported variants
//!
//! | Variant | Feature | Chip IDs |
//! |---------|---------|----------|
//! | SIA815T | `sia815t` (default) | `0x6A..=0x6D` |
//!
//! # Features
//!
//! - `sia815t`: SIA815T variant unit
//! - `defmt`: structured logging through defmt
//! - `std`: `std::error::Error` impls for host-side consumers
//!
//! # Example
//!
//! ```no_run
//! use sia81xx::{AudioScene, Channel, PaDriver, Sia815t};
//!
//! async fn bring_up<I: embedded_hal_async::i2c::I2c>(i2c: I, address: u8) {
//!     let mut pa = Sia815t::new(i2c, address);
//!     if pa.verify_chip_id().await.is_ok() {
//!         let _ = pa.validate_trimming().await;
//!         let _ = pa.power_up(AudioScene::Playback, Channel::Left).await;
//!     }
//! }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(unsafe_op_in_unsafe_fn)]
// Pedantic lints suppressed for this register-driver crate:
#![allow(clippy::doc_markdown)] // hex addresses and register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]
#![allow(async_fn_in_trait)] // single-executor no_std: Send bounds not needed

#[cfg(feature = "std")]
extern crate std;

pub mod chip;
pub mod crc;
pub mod regmap;
pub mod scene;

#[cfg(feature = "sia815t")]
pub mod sia815t;

pub use chip::{
    descriptor_for, ChannelDefaults, ChipDescriptor, ChipIdRange, ChipModel, Error, PaDriver,
    SceneDefaults, TrimmingStatus,
};
pub use regmap::RegmapConfig;
pub use scene::{AudioScene, Channel, OutOfRangeError};

#[cfg(feature = "sia815t")]
pub use sia815t::Sia815t;
