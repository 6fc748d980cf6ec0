pub mod problem;
pub mod submission;
pub mod team;

pub use problem::{ProblemPhase, ProblemState};
pub use submission::{Submission, Verdict};
pub use team::Team;
