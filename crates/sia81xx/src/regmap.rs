//! Register-map description published by each chip variant.

/// Static register-map description for one chip variant.
///
/// Carries the classification the vendor map defines: which addresses may be
/// written, which may be read, and which must never be served from a cache.
/// The owning driver enforces it before every transfer; the amplifier-
/// management layer reads it for diagnostics such as register dumps.
#[derive(Debug, Clone, Copy)]
pub struct RegmapConfig {
    /// Map name, matching the variant's canonical type name.
    pub name: &'static str,
    /// Register address width in bits.
    pub reg_bits: u8,
    /// Register value width in bits.
    pub val_bits: u8,
    /// Returns `true` if the register may be read.
    pub readable: fn(u8) -> bool,
    /// Returns `true` if the register may be written.
    pub writeable: fn(u8) -> bool,
    /// Returns `true` if the register must bypass any cache.
    pub volatile: fn(u8) -> bool,
}

impl RegmapConfig {
    /// Whether `reg` may be read through this map.
    #[must_use]
    pub fn is_readable(&self, reg: u8) -> bool {
        (self.readable)(reg)
    }

    /// Whether `reg` may be written through this map.
    #[must_use]
    pub fn is_writeable(&self, reg: u8) -> bool {
        (self.writeable)(reg)
    }

    /// Whether `reg` must bypass caching.
    #[must_use]
    pub fn is_volatile(&self, reg: u8) -> bool {
        (self.volatile)(reg)
    }
}
