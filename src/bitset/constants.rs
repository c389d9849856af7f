// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Compile-time constants for the manifold bitsets.
//!
//! This module defines WIDTH (number of columns a bitset can hold) and the
//! constants derived from it. WIDTH can be configured at compile time via
//! cargo features.
//!
//! # Supported WIDTH values
//!
//! - 128: narrow manifolds
//! - 256: puzzle-sized manifolds - **default**
//! - 512: wide manifolds
//!
//! # Example
//!
//! ```bash
//! # Default: WIDTH=256
//! cargo build
//!
//! # Build for WIDTH=512
//! cargo build --features width_512
//! ```

/// Number of columns representable in one [`Bitset`](super::Bitset).
///
/// This is configurable at compile time via cargo features:
/// - `width_128` → WIDTH=128
/// - `width_256` → WIDTH=256 (explicit)
/// - `width_512` → WIDTH=512
/// - (default) → WIDTH=256 (when no feature specified)
#[cfg(not(any(feature = "width_128", feature = "width_256", feature = "width_512")))]
pub const WIDTH: usize = 256;

#[cfg(feature = "width_128")]
pub const WIDTH: usize = 128;

#[cfg(feature = "width_256")]
pub const WIDTH: usize = 256;

#[cfg(feature = "width_512")]
pub const WIDTH: usize = 512;

/// Bits per storage word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of u64 words backing one bitset.
pub const WORDS: usize = WIDTH / WORD_BITS;

/// Maximum number of splitter rows a grid may hold.
pub const MAX_ROWS: usize = 256;

const _: () = assert!(WIDTH % WORD_BITS == 0, "WIDTH must be a multiple of 64");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::assertions_on_constants)] // Validates compile-time constant
    fn test_words_cover_width() {
        assert_eq!(WORDS * WORD_BITS, WIDTH);
        assert!(WORDS >= 2);
    }

    #[test]
    fn test_width() {
        match WORDS {
            2 => assert_eq!(WIDTH, 128),
            4 => assert_eq!(WIDTH, 256),
            8 => assert_eq!(WIDTH, 512),
            _ => unreachable!(),
        }
    }
}
