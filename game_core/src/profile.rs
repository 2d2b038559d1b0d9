use std::ops::{Index, IndexMut};

use crate::{Move, Side};

/// Keys that drive one paddle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    pub up: String,
    pub down: String,
}

impl KeyBindings {
    pub fn new(up: impl Into<String>, down: impl Into<String>) -> Self {
        Self {
            up: up.into(),
            down: down.into(),
        }
    }

    pub fn resolve(&self, key: &str) -> Option<Move> {
        if key == self.up {
            Some(Move::Up)
        } else if key == self.down {
            Some(Move::Down)
        } else {
            None
        }
    }
}

/// Per-side player identity plus cumulative results
#[derive(Debug, Clone)]
pub struct PlayerProfile {
    pub name: String,
    pub score: u32,
    pub total_wins: u32,
    pub total_games: u32,
    pub color: String,
    pub controls: KeyBindings,
}

impl PlayerProfile {
    pub fn new(name: impl Into<String>, color: impl Into<String>, controls: KeyBindings) -> Self {
        Self {
            name: name.into(),
            score: 0,
            total_wins: 0,
            total_games: 0,
            color: color.into(),
            controls,
        }
    }

    /// Win percentage over all recorded games, 0 before the first game
    pub fn win_rate(&self) -> f32 {
        if self.total_games == 0 {
            0.0
        } else {
            self.total_wins as f32 / self.total_games as f32 * 100.0
        }
    }
}

/// Both players, addressable by [`Side`]
#[derive(Debug, Clone)]
pub struct Players {
    pub left: PlayerProfile,
    pub right: PlayerProfile,
}

impl Default for Players {
    fn default() -> Self {
        Self {
            left: PlayerProfile::new("Player 1", "cyan", KeyBindings::new("w", "s")),
            right: PlayerProfile::new("Player 2", "magenta", KeyBindings::new("Up", "Down")),
        }
    }
}

impl Players {
    pub fn new() -> Self {
        Self::default()
    }

    /// Find which paddle a key press belongs to
    pub fn resolve_key(&self, key: &str) -> Option<(Side, Move)> {
        Side::BOTH
            .into_iter()
            .find_map(|side| self[side].controls.resolve(key).map(|mv| (side, mv)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Side, &PlayerProfile)> {
        [(Side::Left, &self.left), (Side::Right, &self.right)].into_iter()
    }
}

impl Index<Side> for Players {
    type Output = PlayerProfile;

    fn index(&self, side: Side) -> &PlayerProfile {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl IndexMut<Side> for Players {
    fn index_mut(&mut self, side: Side) -> &mut PlayerProfile {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_players() {
        let players = Players::new();
        assert_eq!(players.left.name, "Player 1");
        assert_eq!(players.right.name, "Player 2");
        assert_eq!(players[Side::Left].color, "cyan");
        assert_eq!(players[Side::Right].color, "magenta");
        assert_eq!(players.left.total_games, 0);
    }

    #[test]
    fn test_resolve_key() {
        let players = Players::new();
        assert_eq!(players.resolve_key("w"), Some((Side::Left, Move::Up)));
        assert_eq!(players.resolve_key("s"), Some((Side::Left, Move::Down)));
        assert_eq!(players.resolve_key("Up"), Some((Side::Right, Move::Up)));
        assert_eq!(players.resolve_key("Down"), Some((Side::Right, Move::Down)));
        assert_eq!(players.resolve_key("q"), None);
    }

    #[test]
    fn test_win_rate() {
        let mut profile = Players::new().left;
        assert_eq!(profile.win_rate(), 0.0, "No games means 0%");
        profile.total_games = 4;
        profile.total_wins = 1;
        assert_eq!(profile.win_rate(), 25.0);
    }
}
