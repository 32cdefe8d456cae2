//! Question context: who played the position and where.

use serde::{Deserialize, Serialize};

/// Names of the two players, as free text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Players {
    pub white: String,
    pub black: String,
}

/// The position context a question is asked about.
///
/// The position itself is carried as an opaque FEN string; only the
/// player names and the tournament name take part in scoring.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fen: Option<String>,
    pub players: Players,
    pub tournament: String,
}

impl PositionContext {
    /// Create a context without a FEN.
    pub fn new(
        white: impl Into<String>,
        black: impl Into<String>,
        tournament: impl Into<String>,
    ) -> Self {
        Self {
            fen: None,
            players: Players {
                white: white.into(),
                black: black.into(),
            },
            tournament: tournament.into(),
        }
    }

    /// Attach a FEN string.
    pub fn with_fen(mut self, fen: impl Into<String>) -> Self {
        self.fen = Some(fen.into());
        self
    }

    /// The three free-text fields a player/tournament guess is matched against.
    pub fn searchable_fields(&self) -> [&str; 3] {
        [
            self.players.white.as_str(),
            self.players.black.as_str(),
            self.tournament.as_str(),
        ]
    }

    /// Side to move according to the FEN, if one is present and well-formed.
    pub fn side_to_move(&self) -> Option<Side> {
        self.fen.as_deref().and_then(Side::from_fen)
    }
}

/// A side of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    White,
    Black,
}

impl Side {
    /// Read the active colour field (second field) of a FEN string.
    pub fn from_fen(fen: &str) -> Option<Self> {
        match fen.split_whitespace().nth(1)? {
            "w" => Some(Self::White),
            "b" => Some(Self::Black),
            _ => None,
        }
    }

    /// Sign that turns a score from this side's point of view into a
    /// white-positive score.
    pub fn perspective(self) -> f64 {
        match self {
            Self::White => 1.0,
            Self::Black => -1.0,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_side_from_fen() {
        assert_eq!(Side::from_fen(START), Some(Side::White));
        assert_eq!(
            Side::from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"),
            Some(Side::Black)
        );
        assert_eq!(Side::from_fen("8/8/8/8/8/8/8/8"), None);
        assert_eq!(Side::from_fen("8/8/8/8/8/8/8/8 x - - 0 1"), None);
    }

    #[test]
    fn test_side_to_move_requires_fen() {
        let context = PositionContext::new("Magnus Carlsen", "Hikaru Nakamura", "Norway Chess");
        assert_eq!(context.side_to_move(), None);
        assert_eq!(context.with_fen(START).side_to_move(), Some(Side::White));
    }

    #[test]
    fn test_searchable_fields_order() {
        let context = PositionContext::new("A B", "C", "D E");
        assert_eq!(context.searchable_fields(), ["A B", "C", "D E"]);
    }

    #[test]
    fn test_deserialize_without_fen() {
        let json = r#"{"players":{"white":"Magnus Carlsen","black":"Ding Liren"},"tournament":"Tata Steel"}"#;
        let context: PositionContext = serde_json::from_str(json).unwrap();
        assert_eq!(context.fen, None);
        assert_eq!(context.players.black, "Ding Liren");
    }
}
