//! The scoreboard state machine: applies administrative and submission
//! events, tracks the freeze regime, and rebuilds visible metrics for
//! every board publication.

use crate::board::BoardRow;
use crate::error::{ContestError, ContestResult};
use crate::models::{ProblemPhase, ProblemState, Submission, Verdict};
use crate::ranking;
use crate::reveal::{self, ScrollReport};
use crate::store::TeamStore;

/// Ranking-query answer: 1-based position in the last published order,
/// plus a staleness flag while the board is frozen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankingReport {
    pub rank: usize,
    pub frozen: bool,
}

/// The contest scoreboard. Owns every team; all mutation happens here,
/// one event at a time.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    pub(crate) store: TeamStore,
    pub(crate) started: bool,
    pub(crate) frozen: bool,
    pub(crate) duration: u32,
    pub(crate) problem_count: usize,
    /// Team indices in the order of the most recent FLUSH or scroll
    /// publication. Ranking queries answer from this snapshot, never
    /// from a fresh recomputation.
    pub(crate) published: Option<Vec<usize>>,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn frozen(&self) -> bool {
        self.frozen
    }

    pub fn problem_count(&self) -> usize {
        self.problem_count
    }

    /// Contest duration in minutes, fixed at start.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn store(&self) -> &TeamStore {
        &self.store
    }

    /// Register a team. Only possible before the contest starts.
    pub fn add_team(&mut self, name: &str) -> ContestResult<()> {
        if self.started {
            return Err(ContestError::AlreadyStarted);
        }
        self.store.add(name, self.problem_count)?;
        Ok(())
    }

    /// Start the contest, fixing the problem count for the run.
    pub fn start(&mut self, duration: u32, problem_count: usize) -> ContestResult<()> {
        if self.started {
            return Err(ContestError::AlreadyStarted);
        }
        self.started = true;
        self.duration = duration;
        self.problem_count = problem_count;
        for team in self.store.iter_mut() {
            team.problems = vec![ProblemState::default(); problem_count];
        }
        log::info!("contest started: {} minutes, {} problems", duration, problem_count);
        Ok(())
    }

    /// Apply one judged submission. The ledger records it
    /// unconditionally; the scoring effect depends on the problem's
    /// current phase: `Live` applies the first-accept rule immediately,
    /// `HiddenPending` buffers it for the reveal.
    pub fn submit(
        &mut self,
        problem: usize,
        team_name: &str,
        verdict: Verdict,
        time: u32,
    ) -> ContestResult<()> {
        let idx = self
            .store
            .find(team_name)
            .ok_or_else(|| ContestError::TeamNotFound { name: team_name.to_string() })?;
        let submission = Submission::new(problem, verdict, time);
        let team = self.store.team_mut(idx);
        team.submissions.push(submission);
        if let Some(state) = team.problems.get_mut(problem) {
            if matches!(state.phase, ProblemPhase::Live) {
                state.apply_live(&submission);
            } else {
                state.buffer_hidden(submission);
            }
        }
        Ok(())
    }

    /// Freeze the board: latch every unsolved problem into the
    /// hidden-pending phase. Problems already solved stay live.
    pub fn freeze(&mut self) -> ContestResult<()> {
        if self.frozen {
            return Err(ContestError::AlreadyFrozen);
        }
        for team in self.store.iter_mut() {
            for state in &mut team.problems {
                state.begin_freeze();
            }
        }
        self.frozen = true;
        log::info!("scoreboard frozen");
        Ok(())
    }

    /// Rebuild the visible metrics and publish the current ranking
    /// snapshot.
    pub fn flush(&mut self) {
        self.recompute_visible_metrics();
        self.publish();
        log::debug!("scoreboard flushed");
    }

    /// Scroll the frozen board: reveal hidden problems one at a time,
    /// worst-ranked team first, narrating each rank improvement.
    pub fn scroll(&mut self) -> ContestResult<ScrollReport> {
        reveal::scroll(self)
    }

    /// Full rebuild of every team's visible metrics. Hidden problems
    /// contribute nothing; each solved problem contributes one solve and
    /// `20 * wrong + solve_time` penalty. Idempotent between events.
    pub fn recompute_visible_metrics(&mut self) {
        let frozen = self.frozen;
        for team in self.store.iter_mut() {
            team.solved = 0;
            team.penalty = 0;
            team.solve_times_desc.clear();
            for state in &team.problems {
                if frozen && state.is_hidden() {
                    continue;
                }
                if let Some(time) = state.first_accept_time {
                    team.solved += 1;
                    team.penalty += 20 * u64::from(state.wrong_before_accept) + u64::from(time);
                    team.solve_times_desc.push(time);
                }
            }
            team.solve_times_desc.sort_unstable_by(|a, b| b.cmp(a));
        }
    }

    /// Board rows in comparator order over the current visible metrics.
    pub fn render_board(&self) -> Vec<BoardRow> {
        ranking::ranking_order(&self.store)
            .iter()
            .enumerate()
            .map(|(i, &idx)| BoardRow::from_team(self.store.team(idx), i + 1, self.frozen))
            .collect()
    }

    /// Current board as a JSON array, one object per row. For consumers
    /// that want structured output instead of the text protocol.
    pub fn render_board_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.render_board())
    }

    /// 1-based rank per the last published order; lexicographic by name
    /// if nothing has been published yet.
    pub fn query_ranking(&self, team_name: &str) -> ContestResult<RankingReport> {
        let idx = self
            .store
            .find(team_name)
            .ok_or_else(|| ContestError::TeamNotFound { name: team_name.to_string() })?;
        let rank = match &self.published {
            Some(order) => position_of(order, idx),
            None => position_of(&ranking::lexicographic_order(&self.store), idx),
        };
        Ok(RankingReport { rank, frozen: self.frozen })
    }

    /// Newest-first ledger lookup. `None` filters match any value.
    pub fn query_submission(
        &self,
        team_name: &str,
        problem: Option<usize>,
        verdict: Option<Verdict>,
    ) -> ContestResult<Option<Submission>> {
        let idx = self
            .store
            .find(team_name)
            .ok_or_else(|| ContestError::TeamNotFound { name: team_name.to_string() })?;
        Ok(self.store.team(idx).find_submission(problem, verdict).copied())
    }

    pub(crate) fn publish(&mut self) {
        self.published = Some(ranking::ranking_order(&self.store));
    }
}

fn position_of(order: &[usize], idx: usize) -> usize {
    order.iter().position(|&i| i == idx).unwrap_or(order.len()) + 1
}
