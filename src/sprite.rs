use image::GrayImage;
use serde::{Deserialize, Serialize};

use crate::error::SpriteError;

/// Number of rows in a sprite.
pub const SPRITE_ROWS: usize = 8;
/// Number of pixel columns packed into the low bits of each row.
pub const SPRITE_COLS: usize = 5;
/// Total pixel count of a sprite (`8 × 5`).
pub const SPRITE_CELLS: u32 = (SPRITE_ROWS * SPRITE_COLS) as u32;

/// The low 5 bits of every row, replicated across all 8 bytes.
const VISIBLE_MASK: u64 = 0x1F1F_1F1F_1F1F_1F1F;

/// Luma value at or above which an image pixel counts as set.
const LUMA_THRESHOLD: u8 = 128;

// ── Sprite ────────────────────────────────────────────────────────────────────

/// An 8 × 5 monochrome bitmap, one byte per row.
///
/// Only the lowest 5 bits of each row are pixels.  Column 0 is the most
/// significant of those bits, so pixel `(row, col)` lives at bit `4 - col`:
///
/// ```text
/// col:   0 1 2 3 4
/// bit:   4 3 2 1 0      0b10001 = 17 → "#...#"
/// ```
///
/// Bits 5–7 are carried along untouched but never read as pixels.
#[repr(transparent)]
#[derive(
    Copy, Clone, Debug, Default, PartialEq, Eq, Hash,
    bytemuck::Pod, bytemuck::Zeroable, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Sprite(pub [u8; SPRITE_ROWS]);

impl Sprite {
    pub const fn new(rows: [u8; SPRITE_ROWS]) -> Self {
        Self(rows)
    }

    pub fn rows(&self) -> &[u8; SPRITE_ROWS] {
        &self.0
    }

    /// Whether pixel `(row, col)` is set.
    ///
    /// # Panics
    /// Panics if `row >= 8` or `col >= 5`.
    #[inline]
    pub fn pixel(&self, row: usize, col: usize) -> bool {
        assert!(col < SPRITE_COLS, "column {col} out of range");
        (self.0[row] >> (4 - col)) & 1 == 1
    }

    /// Number of set pixels among the 40 visible cells.
    pub fn active_pixels(&self) -> u32 {
        (self.packed() & VISIBLE_MASK).count_ones()
    }

    /// Number of visible cells whose value differs from `other`.
    pub fn mismatches(&self, other: &Sprite) -> u32 {
        ((self.packed() ^ other.packed()) & VISIBLE_MASK).count_ones()
    }

    /// True when every row byte is zero, including the unused high bits.
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&row| row == 0)
    }

    /// Build a sprite from a 5 × 8 grayscale bitmap.
    ///
    /// A pixel is set when its luma is at least 128.
    pub fn from_image(img: &GrayImage) -> Result<Self, SpriteError> {
        let (width, height) = img.dimensions();
        if width as usize != SPRITE_COLS || height as usize != SPRITE_ROWS {
            return Err(SpriteError::ImageSize { width, height });
        }

        let mut rows = [0u8; SPRITE_ROWS];
        for (x, y, px) in img.enumerate_pixels() {
            if px.0[0] >= LUMA_THRESHOLD {
                rows[y as usize] |= 1 << (4 - x);
            }
        }
        Ok(Self(rows))
    }

    /// Decode an encoded image (PNG) and convert it with [`Sprite::from_image`].
    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self, SpriteError> {
        let img = image::load_from_memory(bytes)?;
        Self::from_image(&img.to_luma8())
    }

    #[inline]
    fn packed(&self) -> u64 {
        // Byte order is irrelevant: the mask is the same in every lane.
        bytemuck::cast(self.0)
    }
}

impl From<[u8; SPRITE_ROWS]> for Sprite {
    fn from(rows: [u8; SPRITE_ROWS]) -> Self {
        Self(rows)
    }
}

impl TryFrom<&[u8]> for Sprite {
    type Error = SpriteError;

    fn try_from(rows: &[u8]) -> Result<Self, Self::Error> {
        <[u8; SPRITE_ROWS]>::try_from(rows)
            .map(Self)
            .map_err(|_| SpriteError::InvalidShape { rows: rows.len() })
    }
}

// ── Density ───────────────────────────────────────────────────────────────────

/// How much of a sprite is foreground.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Density {
    pub active_pixels: u32,
    /// `active_pixels / 40 × 100`, unrounded.
    pub percentage: f64,
}

pub fn analyze_density(sprite: &Sprite) -> Density {
    let active_pixels = sprite.active_pixels();
    Density {
        active_pixels,
        percentage: active_pixels as f64 / SPRITE_CELLS as f64 * 100.0,
    }
}

/// True iff every row in `sprite` is zero.
///
/// Works on any number of rows; an empty slice counts as empty.
pub fn is_sprite_empty(sprite: &[u8]) -> bool {
    sprite.iter().all(|&row| row == 0)
}
