use async_graphql::MergedObject;

use crate::gql::domains::clubs::ClubQuery;
use crate::gql::domains::competitions::CompetitionQuery;
use crate::gql::domains::league_setup::LeagueSetupQuery;
use crate::gql::domains::players::PlayerQuery;
use crate::gql::domains::stats::StatsQuery;
use crate::gql::domains::teams::TeamQuery;

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    ClubQuery,
    CompetitionQuery,
    LeagueSetupQuery,
    PlayerQuery,
    StatsQuery,
    TeamQuery,
);
