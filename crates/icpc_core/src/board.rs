//! Board rows and problem cells as printed by FLUSH-style publications.

use crate::models::{ProblemState, Team};
use serde::Serialize;
use std::fmt;

/// One problem cell on the published board.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum Cell {
    /// No attempts, unsolved, nothing hidden.
    Untouched,
    /// Unsolved with `wrong` rejecting attempts.
    Failed { wrong: u32 },
    /// Solved after `wrong` rejecting attempts.
    Solved { wrong: u32 },
    /// Frozen: `wrong` pre-freeze rejections, `pending` hidden submissions.
    Frozen { wrong: u32, pending: usize },
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Cell::Untouched => write!(f, "."),
            Cell::Failed { wrong } => write!(f, "-{}", wrong),
            Cell::Solved { wrong: 0 } => write!(f, "+"),
            Cell::Solved { wrong } => write!(f, "+{}", wrong),
            Cell::Frozen { wrong: 0, pending } => write!(f, "0/{}", pending),
            Cell::Frozen { wrong, pending } => write!(f, "-{}/{}", wrong, pending),
        }
    }
}

impl Cell {
    /// Render one problem state. The frozen form applies only while the
    /// board is frozen and the problem actually hides submissions; a
    /// hidden-pending problem with no post-freeze activity renders like
    /// any other unsolved problem.
    pub fn for_problem(state: &ProblemState, frozen: bool) -> Self {
        if frozen && state.is_hidden() {
            // is_hidden guarantees at least one pending submission.
            let (wrong, pending) = state.frozen_counts().unwrap_or((0, 0));
            return Cell::Frozen { wrong, pending };
        }
        match (state.first_accept_time, state.wrong_before_accept) {
            (Some(_), wrong) => Cell::Solved { wrong },
            (None, 0) => Cell::Untouched,
            (None, wrong) => Cell::Failed { wrong },
        }
    }
}

/// One published scoreboard line.
#[derive(Debug, Clone, Serialize)]
pub struct BoardRow {
    pub team: String,
    /// 1-based position.
    pub rank: usize,
    pub solved: u32,
    pub penalty: u64,
    pub cells: Vec<Cell>,
}

impl BoardRow {
    pub fn from_team(team: &Team, rank: usize, frozen: bool) -> Self {
        Self {
            team: team.name.clone(),
            rank,
            solved: team.solved,
            penalty: team.penalty,
            cells: team.problems.iter().map(|p| Cell::for_problem(p, frozen)).collect(),
        }
    }
}

impl fmt::Display for BoardRow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} {}", self.team, self.rank, self.solved, self.penalty)?;
        for cell in &self.cells {
            write!(f, " {}", cell)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Submission, Verdict};

    #[test]
    fn test_cell_display_forms() {
        assert_eq!(Cell::Untouched.to_string(), ".");
        assert_eq!(Cell::Failed { wrong: 3 }.to_string(), "-3");
        assert_eq!(Cell::Solved { wrong: 0 }.to_string(), "+");
        assert_eq!(Cell::Solved { wrong: 2 }.to_string(), "+2");
        assert_eq!(Cell::Frozen { wrong: 0, pending: 2 }.to_string(), "0/2");
        assert_eq!(Cell::Frozen { wrong: 1, pending: 3 }.to_string(), "-1/3");
    }

    #[test]
    fn test_frozen_cell_requires_hidden_activity() {
        let mut state = ProblemState::default();
        state.apply_live(&Submission::new(0, Verdict::WrongAnswer, 10));
        state.begin_freeze();

        // No post-freeze submissions: plain unsolved cell even while frozen.
        assert_eq!(Cell::for_problem(&state, true), Cell::Failed { wrong: 1 });

        state.buffer_hidden(Submission::new(0, Verdict::Accepted, 250));
        assert_eq!(Cell::for_problem(&state, true), Cell::Frozen { wrong: 1, pending: 1 });
    }

    #[test]
    fn test_solved_before_freeze_stays_plain() {
        let mut state = ProblemState::default();
        state.apply_live(&Submission::new(0, Verdict::Accepted, 10));
        state.begin_freeze();
        assert_eq!(Cell::for_problem(&state, true), Cell::Solved { wrong: 0 });
    }

    #[test]
    fn test_row_display() {
        let mut team = Team::new("hdu", 2);
        team.solved = 1;
        team.penalty = 40;
        team.problems[0].apply_live(&Submission::new(0, Verdict::WrongAnswer, 10));
        team.problems[0].apply_live(&Submission::new(0, Verdict::Accepted, 20));

        let row = BoardRow::from_team(&team, 1, false);
        assert_eq!(row.to_string(), "hdu 1 1 40 +1 .");
    }
}
