pub mod leaderboard_view;
pub mod player_registry;
pub mod ranking;
pub mod score_ledger;
