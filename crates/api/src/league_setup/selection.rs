use uuid::Uuid;

/// Ordered set of team ids chosen for a new league.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: Vec<Uuid>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a selection from ids, keeping the first occurrence of each.
    pub fn from_ids(ids: impl IntoIterator<Item = Uuid>) -> Self {
        let mut set = Self::new();
        for id in ids {
            if !set.contains(id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Remove the team if present, otherwise append it.
    /// Returns whether the team is selected afterwards.
    pub fn toggle(&mut self, team_id: Uuid) -> bool {
        if let Some(pos) = self.ids.iter().position(|id| *id == team_id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(team_id);
            true
        }
    }

    pub fn contains(&self, team_id: Uuid) -> bool {
        self.ids.contains(&team_id)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[Uuid] {
        &self.ids
    }
}
