use crate::sprite::{Sprite, SPRITE_COLS, SPRITE_ROWS};

// ── Region ────────────────────────────────────────────────────────────────────

/// A named band of the 8 × 5 grid.
///
/// Horizontal bands split the rows (top 0–2, middle 3–4, bottom 5–7);
/// vertical bands split the columns (left 0–1, center 2, right 3–4).
/// Every cell falls in exactly one band of each orientation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Region {
    Top,
    Middle,
    Bottom,
    Left,
    Center,
    Right,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Top,
        Region::Middle,
        Region::Bottom,
        Region::Left,
        Region::Center,
        Region::Right,
    ];

    /// Horizontal bands, top to bottom.
    pub const HORIZONTAL: [Region; 3] = [Region::Top, Region::Middle, Region::Bottom];

    pub fn of_row(row: usize) -> Region {
        match row {
            0..=2 => Region::Top,
            3..=4 => Region::Middle,
            _ => Region::Bottom,
        }
    }

    pub fn of_col(col: usize) -> Region {
        match col {
            0..=1 => Region::Left,
            2 => Region::Center,
            _ => Region::Right,
        }
    }

    /// Spanish label used in user-facing hints.
    pub fn label(self) -> &'static str {
        match self {
            Region::Top => "superior",
            Region::Middle => "media",
            Region::Bottom => "inferior",
            Region::Left => "izquierda",
            Region::Center => "central",
            Region::Right => "derecha",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

// ── RegionStats ───────────────────────────────────────────────────────────────

/// Mismatch counters for one region.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RegionStats {
    pub diff: u32,
    pub total: u32,
    /// `diff / total × 100`, or `0.0` for an empty region.
    pub percentage: f64,
}

/// Per-region statistics for all six bands, indexed by [`Region`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegionalDifferences {
    stats: [RegionStats; 6],
}

impl RegionalDifferences {
    pub fn get(&self, region: Region) -> &RegionStats {
        &self.stats[region.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &RegionStats)> {
        Region::ALL.into_iter().map(move |r| (r, self.get(r)))
    }
}

impl std::ops::Index<Region> for RegionalDifferences {
    type Output = RegionStats;

    fn index(&self, region: Region) -> &RegionStats {
        self.get(region)
    }
}

/// Count mismatching pixels per region.
///
/// Each cell is tallied twice: once into its horizontal band and once into
/// its vertical band.
pub fn analyze_regional_differences(a: &Sprite, b: &Sprite) -> RegionalDifferences {
    let mut stats = [RegionStats::default(); 6];

    for row in 0..SPRITE_ROWS {
        for col in 0..SPRITE_COLS {
            let differs = a.pixel(row, col) != b.pixel(row, col);
            for region in [Region::of_row(row), Region::of_col(col)] {
                let s = &mut stats[region.index()];
                s.total += 1;
                if differs {
                    s.diff += 1;
                }
            }
        }
    }

    for s in &mut stats {
        s.percentage = if s.total > 0 {
            s.diff as f64 / s.total as f64 * 100.0
        } else {
            0.0
        };
    }

    RegionalDifferences { stats }
}
