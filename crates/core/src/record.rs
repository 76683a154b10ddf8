use crate::types::DEFAULT_PLAYER_NAME;

/// Final result of a game, handed to whatever stores scores
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameRecord {
    pub player: String,
    pub score: u32,
    pub level: u32,
    pub lines_cleared: u32,
}

impl GameRecord {
    /// Blank player names are recorded as [`DEFAULT_PLAYER_NAME`]
    pub fn new(player: &str, score: u32, level: u32, lines_cleared: u32) -> Self {
        let player = match player.trim() {
            "" => DEFAULT_PLAYER_NAME,
            name => name,
        };
        Self {
            player: player.to_string(),
            score,
            level,
            lines_cleared,
        }
    }
}
