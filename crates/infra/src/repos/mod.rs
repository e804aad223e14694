pub mod clubs;
pub mod competitions;
pub mod player_stats;
pub mod players;
pub mod teams;

pub use clubs::ClubData;
pub use competitions::{
    CompetitionKind, CompetitionStatus, CreateCompetitionData, UpdateCompetitionData,
};
pub use player_stats::PlayerStatsData;
pub use players::{PlayerData, PlayerFilter};
pub use teams::TeamData;
