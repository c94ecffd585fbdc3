use serde::Deserialize;

use super::Cell;

/// Birth/survival rule applied to every cell on a tick
pub trait Rule: Send + Sync {
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// HighLife (B36/S23): Conway plus birth on six neighbors
#[derive(Clone, Copy, Debug, Default)]
pub struct HighLifeRule;

impl Rule for HighLifeRule {
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            (Cell::Alive, 2 | 3) | (Cell::Dead, 3 | 6) => Cell::Alive,
            _ => Cell::Dead,
        }
    }
}

/// Rule selectable from config and the viewer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    #[default]
    Conway,
    HighLife,
}

impl RuleKind {
    pub const ALL: [RuleKind; 2] = [RuleKind::Conway, RuleKind::HighLife];

    pub const fn name(self) -> &'static str {
        match self {
            RuleKind::Conway => "Conway",
            RuleKind::HighLife => "HighLife",
        }
    }

    /// B/S notation
    pub const fn notation(self) -> &'static str {
        match self {
            RuleKind::Conway => "B3/S23",
            RuleKind::HighLife => "B36/S23",
        }
    }

    pub fn rule(self) -> &'static dyn Rule {
        match self {
            RuleKind::Conway => &ConwayRule,
            RuleKind::HighLife => &HighLifeRule,
        }
    }

    /// The rule after this one, wrapping around
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&kind| kind == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conway_table() {
        let rule = ConwayRule;
        let survives: Vec<u8> = (0..=8).filter(|&n| rule.evolve(Cell::Alive, n).is_alive()).collect();
        let born: Vec<u8> = (0..=8).filter(|&n| rule.evolve(Cell::Dead, n).is_alive()).collect();

        assert_eq!(survives, [2, 3]);
        assert_eq!(born, [3]);
    }

    #[test]
    fn test_highlife_table() {
        let rule = HighLifeRule;
        let survives: Vec<u8> = (0..=8).filter(|&n| rule.evolve(Cell::Alive, n).is_alive()).collect();
        let born: Vec<u8> = (0..=8).filter(|&n| rule.evolve(Cell::Dead, n).is_alive()).collect();

        assert_eq!(survives, [2, 3]);
        assert_eq!(born, [3, 6]);
    }

    #[test]
    fn test_kind_dispatches_to_rule() {
        assert_eq!(RuleKind::default(), RuleKind::Conway);
        assert!(!RuleKind::Conway.rule().evolve(Cell::Dead, 6).is_alive());
        assert!(RuleKind::HighLife.rule().evolve(Cell::Dead, 6).is_alive());
    }

    #[test]
    fn test_next_cycles() {
        assert_eq!(RuleKind::Conway.next(), RuleKind::HighLife);
        assert_eq!(RuleKind::HighLife.next(), RuleKind::Conway);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let kind: RuleKind = serde_json::from_str(r#""highlife""#).unwrap();
        assert_eq!(kind, RuleKind::HighLife);
        assert_eq!(kind.notation(), "B36/S23");
    }
}
