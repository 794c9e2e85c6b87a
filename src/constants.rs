//! Board-size configuration and crate-wide sizing constants.
//!
//! The board is always square; its side length is a compile-time choice
//! controlled by Cargo features.
//!
//! # Board Size Configuration
//!
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//!
//! ```sh
//! cargo build                                                # 9x9 (default)
//! cargo build --no-default-features --features board13x13    # 13x13
//! ```

#[cfg(feature = "board9x9")]
pub const N: usize = 9;

#[cfg(feature = "board13x13")]
pub const N: usize = 13;

#[cfg(all(feature = "board9x9", feature = "board13x13"))]
compile_error!("Cannot enable both 'board9x9' and 'board13x13' features at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13")))]
compile_error!("Must enable exactly one board size feature: 'board9x9' or 'board13x13'");

/// Number of points on the board (`N` squared).
pub const P: usize = N * N;

/// Column letters, skipping `I` per Go convention. Indexable by column 0..N.
pub const COL_LABELS: &[u8] = b"ABCDEFGHJKLMNOPQRSTUVWXYZ";
