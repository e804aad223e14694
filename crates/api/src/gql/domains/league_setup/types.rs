use async_graphql::{Enum, SimpleObject, ID};
use chrono::NaiveDate;

use crate::gql::domains::teams::types::Team;
use crate::league_setup::{LeagueSetup, SetupPhase as Phase};

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum SetupPhase {
    Empty,
    DivisionChosen,
    TeamsChosen,
    Submitting,
}

impl From<Phase> for SetupPhase {
    fn from(phase: Phase) -> Self {
        match phase {
            Phase::Empty => SetupPhase::Empty,
            Phase::DivisionChosen => SetupPhase::DivisionChosen,
            Phase::TeamsChosen => SetupPhase::TeamsChosen,
            Phase::Submitting => SetupPhase::Submitting,
        }
    }
}

/// An open "create league" form as the client should render it.
#[derive(SimpleObject, Clone, Debug)]
pub struct LeagueSetupView {
    pub id: ID,
    pub phase: SetupPhase,
    pub division: String,
    pub start_date: Option<NaiveDate>,
    /// Selected ids in selection order, including teams since deleted.
    pub selected_team_ids: Vec<ID>,
    pub selected_teams: Vec<Team>,
    /// Teams of the chosen division that can still be selected.
    pub candidates: Vec<Team>,
    /// Set once the roster feed has failed.
    pub roster_error: Option<String>,
    /// Message of the last failed submission.
    pub last_error: Option<String>,
}

impl From<&LeagueSetup> for LeagueSetupView {
    fn from(setup: &LeagueSetup) -> Self {
        Self {
            id: setup.id().into(),
            phase: setup.phase().into(),
            division: setup.division().to_string(),
            start_date: setup.start_date(),
            selected_team_ids: setup.selection().ids().iter().map(|id| (*id).into()).collect(),
            selected_teams: setup.selected_teams().into_iter().map(Team::from).collect(),
            candidates: setup.candidates().into_iter().map(Team::from).collect(),
            roster_error: setup.roster_error().map(str::to_string),
            last_error: setup.last_error().map(str::to_string),
        }
    }
}
