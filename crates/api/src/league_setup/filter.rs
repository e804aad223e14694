use infra::models::TeamRow;

use super::division::same_division;
use super::selection::SelectionSet;

/// Teams of `roster` in `division`, in roster order.
///
/// A blank division yields no teams: selection is disabled until a
/// division is chosen.
pub fn filter_by_division(roster: &[TeamRow], division: &str) -> Vec<TeamRow> {
    roster
        .iter()
        .filter(|team| same_division(division, &team.division))
        .cloned()
        .collect()
}

/// Teams still available for selection: in the division and not yet chosen.
pub fn candidates(roster: &[TeamRow], division: &str, selection: &SelectionSet) -> Vec<TeamRow> {
    filter_by_division(roster, division)
        .into_iter()
        .filter(|team| !selection.contains(team.id))
        .collect()
}
