use async_graphql::{Context, Object, Result};
use chrono::NaiveDate;
use uuid::Uuid;

use super::types::LeagueSetupView;
use crate::gql::domains::competitions::publish_competitions;
use crate::gql::domains::competitions::types::Competition;
use crate::gql::error::setup_error;
use crate::state::AppState;

#[derive(Default)]
pub struct LeagueSetupQuery;

#[Object]
impl LeagueSetupQuery {
    /// Current state of an open league form, with the latest roster applied.
    async fn league_setup(&self, ctx: &Context<'_>, id: Uuid) -> Result<LeagueSetupView> {
        let state = ctx.data::<AppState>()?;
        state
            .setups()
            .with(id, |setup| {
                setup.sync();
                Ok(LeagueSetupView::from(&*setup))
            })
            .map_err(setup_error)
    }
}

#[derive(Default)]
pub struct LeagueSetupMutation;

#[Object]
impl LeagueSetupMutation {
    /// Open an empty league form subscribed to the live roster.
    async fn open_league_setup(&self, ctx: &Context<'_>) -> Result<LeagueSetupView> {
        let state = ctx.data::<AppState>()?;
        let id = state.setups().open(state.teams());
        state
            .setups()
            .with(id, |setup| Ok(LeagueSetupView::from(&*setup)))
            .map_err(setup_error)
    }

    /// Choose the division. Clears any selected teams.
    async fn choose_league_division(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        division: String,
    ) -> Result<LeagueSetupView> {
        let state = ctx.data::<AppState>()?;
        state
            .setups()
            .with(id, |setup| {
                setup.choose_division(&division)?;
                Ok(LeagueSetupView::from(&*setup))
            })
            .map_err(setup_error)
    }

    async fn pick_league_start_date(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        start_date: NaiveDate,
    ) -> Result<LeagueSetupView> {
        let state = ctx.data::<AppState>()?;
        state
            .setups()
            .with(id, |setup| {
                setup.pick_start_date(start_date)?;
                Ok(LeagueSetupView::from(&*setup))
            })
            .map_err(setup_error)
    }

    /// Select a candidate team, or deselect a selected one.
    async fn toggle_league_team(
        &self,
        ctx: &Context<'_>,
        id: Uuid,
        team_id: Uuid,
    ) -> Result<LeagueSetupView> {
        let state = ctx.data::<AppState>()?;
        state
            .setups()
            .with(id, |setup| {
                setup.toggle_team(team_id)?;
                Ok(LeagueSetupView::from(&*setup))
            })
            .map_err(setup_error)
    }

    /// Create the league. The form closes on success and is kept for a
    /// retry when the write fails.
    async fn submit_league_setup(&self, ctx: &Context<'_>, id: Uuid) -> Result<Competition> {
        let state = ctx.data::<AppState>()?;
        let record = state
            .setups()
            .submit(id, &state.db)
            .await
            .map_err(setup_error)?;

        publish_competitions(state).await;
        Ok(record.into())
    }

    /// Discard a form. Returns false when it was already closed.
    async fn cancel_league_setup(&self, ctx: &Context<'_>, id: Uuid) -> Result<bool> {
        let state = ctx.data::<AppState>()?;
        Ok(state.setups().cancel(id))
    }
}
