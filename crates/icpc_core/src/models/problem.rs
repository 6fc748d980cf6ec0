use super::submission::Submission;
use serde::{Deserialize, Serialize};

/// Visibility regime of one problem for one team.
///
/// `HiddenPending` exists only for problems that were unsolved at the
/// instant the scoreboard froze, so "hidden but already scored" is not
/// representable. Problems solved before the freeze never leave `Live`:
/// their post-freeze submissions apply immediately.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ProblemPhase {
    Live,
    HiddenPending {
        /// Wrong attempts latched at the instant of freezing.
        wrong_before_freeze: u32,
        /// Every post-freeze submission in arrival order, replayed on
        /// reveal. Accepting submissions are buffered too.
        hidden: Vec<Submission>,
    },
}

/// Per-team, per-problem scoring state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProblemState {
    /// Rejecting attempts before the first acceptance.
    pub wrong_before_accept: u32,
    /// Contest minute of the first acceptance, if any.
    pub first_accept_time: Option<u32>,
    pub phase: ProblemPhase,
}

impl Default for ProblemState {
    fn default() -> Self {
        Self { wrong_before_accept: 0, first_accept_time: None, phase: ProblemPhase::Live }
    }
}

impl ProblemState {
    pub fn solved(&self) -> bool {
        self.first_accept_time.is_some()
    }

    /// Whether the problem currently hides post-freeze activity from the
    /// visible board. True only once at least one submission arrived
    /// after the freeze.
    pub fn is_hidden(&self) -> bool {
        matches!(&self.phase, ProblemPhase::HiddenPending { hidden, .. } if !hidden.is_empty())
    }

    /// Live-regime scoring rule: the first acceptance fixes the solve
    /// time; rejections before it count as wrong attempts; everything
    /// after the first acceptance leaves the score untouched.
    pub fn apply_live(&mut self, submission: &Submission) {
        if self.solved() {
            return;
        }
        if submission.verdict.is_accepted() {
            self.first_accept_time = Some(submission.time);
        } else {
            self.wrong_before_accept += 1;
        }
    }

    /// Latch the freeze snapshot. Solved problems stay `Live`; unsolved
    /// ones start buffering.
    pub fn begin_freeze(&mut self) {
        if !self.solved() {
            self.phase = ProblemPhase::HiddenPending {
                wrong_before_freeze: self.wrong_before_accept,
                hidden: Vec::new(),
            };
        }
    }

    /// Buffer a submission that arrived while this problem is frozen.
    pub fn buffer_hidden(&mut self, submission: Submission) {
        if let ProblemPhase::HiddenPending { hidden, .. } = &mut self.phase {
            hidden.push(submission);
        }
    }

    /// Replay the buffered submissions under the live rule and return the
    /// problem to `Live`.
    pub fn reveal(&mut self) {
        if let ProblemPhase::HiddenPending { hidden, .. } =
            std::mem::replace(&mut self.phase, ProblemPhase::Live)
        {
            for submission in &hidden {
                self.apply_live(submission);
            }
        }
    }

    /// Drop any residual freeze bookkeeping without replaying. Used when
    /// the scroll ends for problems that never received hidden activity.
    pub fn thaw(&mut self) {
        self.phase = ProblemPhase::Live;
    }

    /// Freeze-cell counters `(wrong_before_freeze, hidden_count)`, if the
    /// problem is in the hidden-pending phase.
    pub fn frozen_counts(&self) -> Option<(u32, usize)> {
        match &self.phase {
            ProblemPhase::HiddenPending { wrong_before_freeze, hidden } => {
                Some((*wrong_before_freeze, hidden.len()))
            }
            ProblemPhase::Live => None,
        }
    }
}
