use std::time::{Duration, Instant};

use chrono::NaiveDate;
use uuid::Uuid;

use infra::models::TeamRow;

use super::error::SetupError;
use super::filter;
use super::gate::{self, NewLeague};
use super::roster::RosterStore;
use super::selection::SelectionSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupPhase {
    Empty,
    DivisionChosen,
    TeamsChosen,
    Submitting,
}

/// One open "create league" form.
///
/// The phase is derived from the form contents, so it cannot disagree
/// with them. Cancelling is dropping the value.
pub struct LeagueSetup {
    id: Uuid,
    roster: RosterStore,
    division: String,
    start_date: Option<NaiveDate>,
    selection: SelectionSet,
    submitting: bool,
    last_error: Option<String>,
    last_activity: Instant,
}

impl LeagueSetup {
    pub fn open(roster: RosterStore) -> Self {
        Self {
            id: Uuid::new_v4(),
            roster,
            division: String::new(),
            start_date: None,
            selection: SelectionSet::new(),
            submitting: false,
            last_error: None,
            last_activity: Instant::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn phase(&self) -> SetupPhase {
        if self.submitting {
            SetupPhase::Submitting
        } else if !self.selection.is_empty() {
            SetupPhase::TeamsChosen
        } else if !self.division.trim().is_empty() {
            SetupPhase::DivisionChosen
        } else {
            SetupPhase::Empty
        }
    }

    pub fn division(&self) -> &str {
        &self.division
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn roster_error(&self) -> Option<&str> {
        self.roster.error()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn idle_for(&self) -> Duration {
        self.last_activity.elapsed()
    }

    /// Pull in roster updates that arrived since the last interaction.
    pub fn sync(&mut self) {
        self.roster.sync();
    }

    /// Teams in the chosen division that are not selected yet.
    pub fn candidates(&self) -> Vec<TeamRow> {
        filter::candidates(self.roster.teams(), &self.division, &self.selection)
    }

    /// Selected teams still present in the roster, in selection order.
    pub fn selected_teams(&self) -> Vec<TeamRow> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.roster.find(*id).cloned())
            .collect()
    }

    /// Choose a division. Always discards the current team selection.
    pub fn choose_division(&mut self, division: &str) -> Result<(), SetupError> {
        self.touch()?;
        self.division = division.trim().to_string();
        self.selection.clear();
        Ok(())
    }

    pub fn pick_start_date(&mut self, date: NaiveDate) -> Result<(), SetupError> {
        self.touch()?;
        self.start_date = Some(date);
        Ok(())
    }

    /// Select an available team, or deselect a selected one.
    /// Returns whether the team is selected afterwards.
    pub fn toggle_team(&mut self, team_id: Uuid) -> Result<bool, SetupError> {
        self.touch()?;
        if !self.selection.contains(team_id)
            && !self.candidates().iter().any(|team| team.id == team_id)
        {
            return Err(SetupError::TeamNotAvailable(team_id));
        }
        Ok(self.selection.toggle(team_id))
    }

    /// Validate and enter the submitting phase. A denied submission
    /// changes nothing.
    pub fn begin_submit(&mut self) -> Result<NewLeague, SetupError> {
        self.touch()?;
        let league = gate::build_league(&self.division, self.start_date, &self.selection)?;
        self.submitting = true;
        self.last_error = None;
        Ok(league)
    }

    /// The store rejected the request: keep the form for a retry.
    pub fn fail_submit(&mut self, message: impl Into<String>) {
        self.submitting = false;
        self.last_error = Some(message.into());
        self.last_activity = Instant::now();
    }

    fn touch(&mut self) -> Result<(), SetupError> {
        if self.submitting {
            return Err(SetupError::SubmissionInProgress);
        }
        self.last_activity = Instant::now();
        self.roster.sync();
        Ok(())
    }
}
