use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub label: char,
    /// Display color for the presentation layer; the engine never reads it.
    pub color: String,
    /// Terminal score weight. The positive-weight player is the maximizing
    /// side of the search.
    pub score: i32,
    #[serde(default = "default_is_human")]
    pub is_human: bool,
}

const fn default_is_human() -> bool {
    true
}

impl Player {
    #[must_use]
    pub fn new(label: char, color: impl Into<String>, score: i32, is_human: bool) -> Self {
        Self {
            label,
            color: color.into(),
            score,
            is_human,
        }
    }

    #[must_use]
    pub fn human(label: char, color: impl Into<String>, score: i32) -> Self {
        Self::new(label, color, score, true)
    }

    #[must_use]
    pub fn computer(label: char, color: impl Into<String>, score: i32) -> Self {
        Self::new(label, color, score, false)
    }

    #[must_use]
    pub fn default_pair() -> [Self; 2] {
        [Self::human('X', "blue", -10), Self::computer('O', "green", 10)]
    }
}

const fn second_starts(players: &[Player; 2], human_first: bool) -> bool {
    let [first, second] = players;
    first.is_human != human_first && second.is_human == human_first
}

/// Two players and a parity bit pointing at whoever moves next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRotation {
    players: [Player; 2],
    second_to_move: bool,
}

impl PlayerRotation {
    /// `human_first` picks the first player whose `is_human` flag matches;
    /// when neither does, the first listed player starts.
    #[must_use]
    pub const fn new(players: [Player; 2], human_first: bool) -> Self {
        let second_to_move = second_starts(&players, human_first);
        Self {
            players,
            second_to_move,
        }
    }

    pub const fn reset_order(&mut self, human_first: bool) {
        self.second_to_move = second_starts(&self.players, human_first);
    }

    #[must_use]
    pub const fn players(&self) -> &[Player; 2] {
        &self.players
    }

    #[must_use]
    pub const fn current(&self) -> &Player {
        let [first, second] = &self.players;
        if self.second_to_move {
            second
        } else {
            first
        }
    }

    pub const fn toggle(&mut self) {
        self.second_to_move = !self.second_to_move;
    }

    #[must_use]
    pub fn find(&self, label: char) -> Option<&Player> {
        self.players.iter().find(|player| player.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pair() {
        let [x, o] = Player::default_pair();
        assert_eq!((x.label, x.score, x.is_human), ('X', -10, true));
        assert_eq!((o.label, o.score, o.is_human), ('O', 10, false));
        assert_eq!(x.color, "blue");
        assert_eq!(o.color, "green");
    }

    #[test]
    fn test_rotation_human_first() {
        let mut rotation = PlayerRotation::new(Player::default_pair(), true);
        assert_eq!(rotation.current().label, 'X');
        rotation.toggle();
        assert_eq!(rotation.current().label, 'O');
        rotation.toggle();
        assert_eq!(rotation.current().label, 'X');
    }

    #[test]
    fn test_rotation_computer_first() {
        let mut rotation = PlayerRotation::new(Player::default_pair(), false);
        assert_eq!(rotation.current().label, 'O');
        rotation.reset_order(true);
        assert_eq!(rotation.current().label, 'X');
    }

    #[test]
    fn test_rotation_without_humans_starts_with_first() {
        let players = [
            Player::computer('A', "red", -1),
            Player::computer('B', "black", 1),
        ];
        assert_eq!(PlayerRotation::new(players.clone(), true).current().label, 'A');
        assert_eq!(PlayerRotation::new(players, false).current().label, 'A');
    }

    #[test]
    fn test_find_by_label() {
        let rotation = PlayerRotation::new(Player::default_pair(), true);
        assert_eq!(rotation.find('O').map(|p| p.score), Some(10));
        assert!(rotation.find('Z').is_none());
    }

    #[test]
    fn test_player_json_defaults_to_human() {
        let player: Player =
            serde_json::from_str(r#"{"label":"Q","color":"pink","score":-3}"#).unwrap();
        assert!(player.is_human);
        assert_eq!(player.label, 'Q');
    }
}
