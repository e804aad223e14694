use async_graphql::MergedObject;

use crate::gql::domains::clubs::ClubMutation;
use crate::gql::domains::competitions::CompetitionMutation;
use crate::gql::domains::league_setup::LeagueSetupMutation;
use crate::gql::domains::players::PlayerMutation;
use crate::gql::domains::stats::StatsMutation;
use crate::gql::domains::teams::TeamMutation;

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    ClubMutation,
    CompetitionMutation,
    LeagueSetupMutation,
    PlayerMutation,
    StatsMutation,
    TeamMutation,
);
