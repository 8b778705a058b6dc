mod player;
mod player_name;
mod score;
mod score_value;

pub use player::Player;
pub use player_name::{MAX_PLAYER_NAME_LENGTH, PlayerName};
pub use score::{LeaderboardRow, RankedScore, Score};
pub use score_value::{MAX_SCORE, ScoreValue};
