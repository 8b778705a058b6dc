pub mod health;
pub mod leaderboard;
pub mod players;
pub mod scores;
