use crate::engine::Evaluator;
use crate::logic::board::Board;
use crate::logic::player::Player;
use serde::{Deserialize, Serialize};

/// Which side a search step plays for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Maximizing,
    Minimizing,
}

impl Role {
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Maximizing => Self::Minimizing,
            Self::Minimizing => Self::Maximizing,
        }
    }

    /// Starting value for a step's running best.
    #[must_use]
    pub const fn worst_score(self) -> i32 {
        match self {
            Self::Maximizing => i32::MIN,
            Self::Minimizing => i32::MAX,
        }
    }

    /// Strict improvement, so the first of several equal scores is kept.
    #[must_use]
    pub const fn prefers(self, candidate: i32, incumbent: i32) -> bool {
        match self {
            Self::Maximizing => candidate > incumbent,
            Self::Minimizing => candidate < incumbent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Side {
    pub label: char,
    pub weight: i32,
}

/// Label and score weight of each side, keyed by search role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreTable {
    maximizer: Side,
    minimizer: Side,
}

impl ScoreTable {
    /// The player with the larger weight maximizes.
    #[must_use]
    pub const fn from_players(players: &[Player; 2]) -> Self {
        let [first, second] = players;
        let (max, min) = if first.score >= second.score {
            (first, second)
        } else {
            (second, first)
        };
        Self {
            maximizer: Side {
                label: max.label,
                weight: max.score,
            },
            minimizer: Side {
                label: min.label,
                weight: min.score,
            },
        }
    }

    #[must_use]
    pub const fn side(&self, role: Role) -> Side {
        match role {
            Role::Maximizing => self.maximizer,
            Role::Minimizing => self.minimizer,
        }
    }

    #[must_use]
    pub const fn role_of(&self, label: char) -> Option<Role> {
        if label == self.maximizer.label {
            Some(Role::Maximizing)
        } else if label == self.minimizer.label {
            Some(Role::Minimizing)
        } else {
            None
        }
    }
}

impl Evaluator for ScoreTable {
    /// A completed line belongs to the side that moved last, i.e. the
    /// opponent of `to_move`. The depth term pulls scores toward zero, so
    /// quick wins and slow losses rank first.
    fn evaluate(&self, board: &Board, to_move: Role, depth: i32) -> Option<i32> {
        if board.check_winner().is_some() {
            return Some(match to_move {
                Role::Maximizing => self.minimizer.weight + depth,
                Role::Minimizing => self.maximizer.weight - depth,
            });
        }
        if board.is_full() {
            return Some(0);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ScoreTable {
        ScoreTable::from_players(&Player::default_pair())
    }

    #[test]
    fn test_maximizer_is_positive_weight() {
        let scores = table();
        assert_eq!(scores.side(Role::Maximizing).label, 'O');
        assert_eq!(scores.side(Role::Minimizing).label, 'X');
        assert_eq!(scores.role_of('X'), Some(Role::Minimizing));
        assert_eq!(scores.role_of('O'), Some(Role::Maximizing));
        assert_eq!(scores.role_of('?'), None);

        let [x, o] = Player::default_pair();
        assert_eq!(ScoreTable::from_players(&[o, x]), scores);
    }

    #[test]
    fn test_win_scores_are_depth_biased() {
        let scores = table();
        let o_wins: Board = "OOO/XX./X..".parse().unwrap();
        assert_eq!(scores.evaluate(&o_wins, Role::Minimizing, 0), Some(10));
        assert_eq!(scores.evaluate(&o_wins, Role::Minimizing, 3), Some(7));

        let x_wins: Board = "XXX/OO./O..".parse().unwrap();
        assert_eq!(scores.evaluate(&x_wins, Role::Maximizing, 1), Some(-9));
        assert_eq!(scores.evaluate(&x_wins, Role::Maximizing, 4), Some(-6));
    }

    #[test]
    fn test_tie_scores_zero() {
        let tied: Board = "XOX/XOO/OXX".parse().unwrap();
        assert_eq!(table().evaluate(&tied, Role::Maximizing, 5), Some(0));
    }

    #[test]
    fn test_open_position_is_not_terminal() {
        let open: Board = "XO./.../...".parse().unwrap();
        assert_eq!(table().evaluate(&open, Role::Maximizing, 2), None);
    }

    #[test]
    fn test_role_helpers() {
        assert_eq!(Role::Maximizing.opposite(), Role::Minimizing);
        assert!(Role::Maximizing.prefers(1, 0));
        assert!(!Role::Maximizing.prefers(0, 0));
        assert!(Role::Minimizing.prefers(-1, 0));
        assert!(!Role::Minimizing.prefers(0, 0));
    }
}
