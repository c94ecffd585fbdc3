use super::{Universe, error::Result};

/// A fixed pattern that can be stamped onto a universe.
/// Offsets are (row, column) pairs relative to the anchor cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub offsets: &'static [(i32, i32)],
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        offsets: &'static [(i32, i32)],
    ) -> Self {
        Self { name, description, offsets }
    }

    /// Number of live cells the pattern sets
    pub fn population(&self) -> usize {
        self.offsets.len()
    }

    /// Stamp the pattern with its anchor at (row, column)
    pub fn place_on(&self, universe: &mut Universe, row: u32, column: u32) -> Result<()> {
        universe.stamp(self, row, column)
    }
}

/// Named patterns the universe knows how to stamp
pub mod presets {
    use super::Pattern;

    /// ```text
    /// XX.
    /// .XX
    /// X..
    /// ```
    const GLIDER: &[(i32, i32)] = &[(-1, -1), (-1, 0), (0, 0), (0, 1), (1, -1)];

    /// ```text
    /// .XXXX
    /// X...X
    /// ....X
    /// X..X.
    /// ```
    const SPACESHIP: &[(i32, i32)] = &[
        (-2, -1), (-2, 0), (-2, 1), (-2, 2),
        (-1, -2), (-1, 2),
        (0, 2),
        (1, -2), (1, 1),
    ];

    /// Glider - moves one cell up and one cell right every 4 generations
    pub const fn glider() -> Pattern {
        Pattern::new("Glider", "Moves diagonally (period 4)", GLIDER)
    }

    /// Lightweight spaceship - moves two cells right every 4 generations
    pub const fn spaceship() -> Pattern {
        Pattern::new("Spaceship", "Lightweight spaceship (period 4)", SPACESHIP)
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![glider(), spaceship()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_sizes() {
        assert_eq!(presets::glider().population(), 5);
        assert_eq!(presets::spaceship().population(), 9);
    }

    #[test]
    fn test_offsets_are_unique() {
        for pattern in presets::all_patterns() {
            let mut offsets = pattern.offsets.to_vec();
            offsets.sort();
            offsets.dedup();
            assert_eq!(offsets.len(), pattern.population(), "{} has duplicates", pattern.name);
        }
    }

    #[test]
    fn test_place_on_sets_cells() {
        let mut universe = Universe::empty(10, 10).unwrap();
        presets::glider().place_on(&mut universe, 5, 5).unwrap();

        assert_eq!(universe.live_count(), 5);
        assert!(universe.get(4, 4).unwrap().is_alive());
        assert!(universe.get(6, 4).unwrap().is_alive());
    }
}
