use crate::error::{ContestError, ContestResult};
use crate::models::Team;
use std::collections::HashMap;

/// Owns every registered team. Teams are addressed by a stable index;
/// the name map only resolves identities. Iteration order is insertion
/// order and carries no ranking meaning. Nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct TeamStore {
    teams: Vec<Team>,
    by_name: HashMap<String, usize>,
}

impl TeamStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a team. Fails if the name is already taken.
    pub fn add(&mut self, name: &str, problem_count: usize) -> ContestResult<usize> {
        if self.by_name.contains_key(name) {
            return Err(ContestError::DuplicateTeam);
        }
        let idx = self.teams.len();
        self.teams.push(Team::new(name, problem_count));
        self.by_name.insert(name.to_string(), idx);
        Ok(idx)
    }

    pub fn find(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    pub fn team(&self, idx: usize) -> &Team {
        &self.teams[idx]
    }

    pub fn team_mut(&mut self, idx: usize) -> &mut Team {
        &mut self.teams[idx]
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Team> {
        self.teams.iter_mut()
    }

    /// Stable team indices, insertion order.
    pub fn indices(&self) -> impl Iterator<Item = usize> {
        0..self.teams.len()
    }
}
