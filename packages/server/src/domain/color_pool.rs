//! Identity color pool.
//!
//! Each color of the palette is either available in the pool or assigned to
//! exactly one identified client. `take` and `give` move tokens between those
//! two states, so the total number of tokens never changes.

use std::collections::HashSet;

use rand::seq::SliceRandom;

use super::{error::ColorPoolError, value_object::ColorToken};

/// Palette used when no colors are configured
pub const DEFAULT_PALETTE: [&str; 7] = [
    "red", "green", "blue", "magenta", "purple", "plum", "orange",
];

/// Shuffled, bounded set of identity colors
#[derive(Debug, Clone)]
pub struct ColorPool {
    /// Every token of the palette, used to validate returned tokens
    palette: HashSet<ColorToken>,
    /// Tokens not assigned to any client
    available: Vec<ColorToken>,
}

impl ColorPool {
    /// Create a pool from the given palette in random order.
    ///
    /// Duplicate labels are collapsed into one token.
    pub fn new(palette: impl IntoIterator<Item = ColorToken>) -> Self {
        let mut pool = Self::ordered(palette);
        pool.available.shuffle(&mut rand::rng());
        pool
    }

    /// Create a pool that hands out tokens in palette order.
    pub fn ordered(palette: impl IntoIterator<Item = ColorToken>) -> Self {
        let mut seen = HashSet::new();
        let mut available = Vec::new();
        for token in palette {
            if seen.insert(token.clone()) {
                available.push(token);
            }
        }
        // `take` pops from the back
        available.reverse();
        Self {
            palette: seen,
            available,
        }
    }

    /// Create a pool with [`DEFAULT_PALETTE`].
    pub fn with_default_palette() -> Self {
        Self::new(
            DEFAULT_PALETTE
                .iter()
                .filter_map(|label| ColorToken::new(*label).ok()),
        )
    }

    /// Remove and return one available token.
    pub fn take(&mut self) -> Result<ColorToken, ColorPoolError> {
        self.available
            .pop()
            .ok_or(ColorPoolError::Exhausted(self.palette.len()))
    }

    /// Return a token to the pool.
    pub fn give(&mut self, token: ColorToken) -> Result<(), ColorPoolError> {
        if !self.palette.contains(&token) {
            return Err(ColorPoolError::UnknownToken(token.into_string()));
        }
        if self.available.contains(&token) {
            return Err(ColorPoolError::AlreadyAvailable(token.into_string()));
        }
        self.available.push(token);
        Ok(())
    }

    /// Number of tokens currently available
    pub fn available(&self) -> usize {
        self.available.len()
    }

    /// Total number of tokens in the palette
    pub fn capacity(&self) -> usize {
        self.palette.len()
    }
}
