use super::problem::ProblemState;
use super::submission::{Submission, Verdict};
use serde::{Deserialize, Serialize};

/// One registered team: scoring state per problem, the full submission
/// ledger, and the derived ranking metrics.
///
/// The metric fields (`solved`, `penalty`, `solve_times_desc`) are
/// rebuilt from the problem states on every board publication. They are
/// never maintained incrementally because freeze and reveal transitions
/// flip per-problem visibility between publications.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub problems: Vec<ProblemState>,
    /// Complete submission history in arrival order. Consulted only by
    /// the submission query, never by ranking.
    pub submissions: Vec<Submission>,

    pub solved: u32,
    pub penalty: u64,
    /// Solve times sorted descending, for the ranking tie-break.
    pub solve_times_desc: Vec<u32>,
}

impl Team {
    pub fn new(name: impl Into<String>, problem_count: usize) -> Self {
        Self {
            name: name.into(),
            problems: vec![ProblemState::default(); problem_count],
            submissions: Vec::new(),
            solved: 0,
            penalty: 0,
            solve_times_desc: Vec::new(),
        }
    }

    /// Whether any problem still hides post-freeze results.
    pub fn has_hidden_problem(&self) -> bool {
        self.problems.iter().any(|p| p.is_hidden())
    }

    /// Lowest-indexed hidden problem, the one a scroll step reveals next.
    pub fn first_hidden_problem(&self) -> Option<usize> {
        self.problems.iter().position(|p| p.is_hidden())
    }

    /// Newest-first scan of the ledger. `None` filters match anything.
    pub fn find_submission(
        &self,
        problem: Option<usize>,
        verdict: Option<Verdict>,
    ) -> Option<&Submission> {
        self.submissions.iter().rev().find(|s| {
            problem.is_none_or(|p| s.problem == p) && verdict.is_none_or(|v| s.verdict == v)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team_with_ledger() -> Team {
        let mut team = Team::new("moscow_su", 3);
        team.submissions.push(Submission::new(0, Verdict::WrongAnswer, 10));
        team.submissions.push(Submission::new(1, Verdict::Accepted, 20));
        team.submissions.push(Submission::new(0, Verdict::Accepted, 30));
        team.submissions.push(Submission::new(2, Verdict::TimeLimitExceeded, 40));
        team
    }

    #[test]
    fn test_find_submission_newest_first() {
        let team = team_with_ledger();
        let found = team.find_submission(None, None).unwrap();
        assert_eq!((found.problem, found.time), (2, 40));
    }

    #[test]
    fn test_find_submission_with_filters() {
        let team = team_with_ledger();
        let found = team.find_submission(Some(0), None).unwrap();
        assert_eq!(found.time, 30);

        let found = team.find_submission(Some(0), Some(Verdict::WrongAnswer)).unwrap();
        assert_eq!(found.time, 10);

        assert!(team.find_submission(Some(1), Some(Verdict::RuntimeError)).is_none());
    }

    #[test]
    fn test_first_hidden_problem_is_lowest_index() {
        let mut team = Team::new("ustc", 3);
        for problem in &mut team.problems {
            problem.begin_freeze();
        }
        team.problems[2].buffer_hidden(Submission::new(2, Verdict::WrongAnswer, 250));
        team.problems[1].buffer_hidden(Submission::new(1, Verdict::Accepted, 251));

        assert!(team.has_hidden_problem());
        assert_eq!(team.first_hidden_problem(), Some(1));
    }
}
