//! The scroll procedure: reveals frozen results one problem at a time.
//!
//! Every iteration picks the worst-ranked team that still hides results
//! and reveals only its lowest-indexed hidden problem, because a single
//! reveal can reshuffle the ranking and change which team is worst next.

use crate::board::BoardRow;
use crate::engine::Scoreboard;
use crate::error::{ContestError, ContestResult};
use crate::ranking;
use serde::Serialize;

/// One narrated rank change: `team` leapt into the position that
/// `displaced` held immediately before the reveal step.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RevealEvent {
    pub team: String,
    pub displaced: String,
    pub solved: u32,
    pub penalty: u64,
}

/// Everything a scroll produces: the frozen board as it stood before
/// revealing, one event per improving reveal step, and the final board.
#[derive(Debug, Clone, Serialize)]
pub struct ScrollReport {
    pub before: Vec<BoardRow>,
    pub reveals: Vec<RevealEvent>,
    pub after: Vec<BoardRow>,
}

pub(crate) fn scroll(board: &mut Scoreboard) -> ContestResult<ScrollReport> {
    if !board.frozen {
        return Err(ContestError::NotFrozen);
    }

    // Publish the frozen board first; this is the "before" picture.
    board.recompute_visible_metrics();
    board.publish();
    let before = board.render_board();

    let mut ordered = ranking::ranking_order(board.store());
    let mut reveals = Vec::new();

    loop {
        // Worst-ranked team with hidden results, then its lowest-indexed
        // hidden problem.
        let next = ordered
            .iter()
            .rev()
            .find_map(|&idx| board.store().team(idx).first_hidden_problem().map(|p| (idx, p)));
        let Some((target, problem)) = next else {
            break;
        };

        board.store.team_mut(target).problems[problem].reveal();
        board.recompute_visible_metrics();
        let reordered = ranking::ranking_order(board.store());

        let old_pos = position_of(&ordered, target);
        let new_pos = position_of(&reordered, target);
        if new_pos < old_pos {
            // The displaced team is whoever held the revealed team's new
            // position in the pre-step ordering.
            let displaced = board.store().team(ordered[new_pos]).name.clone();
            let team = board.store().team(target);
            log::debug!(
                "reveal: {} problem {} climbs {} -> {}",
                team.name,
                problem,
                old_pos + 1,
                new_pos + 1
            );
            reveals.push(RevealEvent {
                team: team.name.clone(),
                displaced,
                solved: team.solved,
                penalty: team.penalty,
            });
        }
        ordered = reordered;
    }

    // All hidden results are out; render the final board, then drop the
    // freeze and the residual per-problem bookkeeping.
    let after = board.render_board();
    board.frozen = false;
    for team in board.store.iter_mut() {
        for state in &mut team.problems {
            state.thaw();
        }
    }
    board.publish();
    log::info!("scroll complete: {} rank changes", reveals.len());

    Ok(ScrollReport { before, reveals, after })
}

fn position_of(order: &[usize], idx: usize) -> usize {
    order.iter().position(|&i| i == idx).unwrap_or(order.len())
}
