//! The "create league" workflow: pick a division, assemble a roster of
//! teams from that division, choose a start date, and submit.

pub mod division;
pub mod error;
pub mod filter;
pub mod gate;
pub mod registry;
pub mod roster;
pub mod selection;
pub mod session;

pub use division::{same_division, Division};
pub use error::SetupError;
pub use filter::{candidates, filter_by_division};
pub use gate::{build_league, validate, LeagueStore, NewLeague};
pub use registry::SetupSessions;
pub use roster::RosterStore;
pub use selection::SelectionSet;
pub use session::{LeagueSetup, SetupPhase};
