use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Judge verdict for a single submission.
///
/// Wire names match the contest command protocol (`Time_Limit_Exceed`
/// is the protocol's spelling, kept verbatim).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    #[serde(rename = "Accepted")]
    Accepted,
    #[serde(rename = "Wrong_Answer")]
    WrongAnswer,
    #[serde(rename = "Runtime_Error")]
    RuntimeError,
    #[serde(rename = "Time_Limit_Exceed")]
    TimeLimitExceeded,
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }

    pub fn is_rejected(&self) -> bool {
        !self.is_accepted()
    }

    /// Canonical protocol string (e.g., "Wrong_Answer").
    pub fn code(&self) -> &'static str {
        match self {
            Verdict::Accepted => "Accepted",
            Verdict::WrongAnswer => "Wrong_Answer",
            Verdict::RuntimeError => "Runtime_Error",
            Verdict::TimeLimitExceeded => "Time_Limit_Exceed",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Verdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Accepted" => Ok(Verdict::Accepted),
            "Wrong_Answer" => Ok(Verdict::WrongAnswer),
            "Runtime_Error" => Ok(Verdict::RuntimeError),
            "Time_Limit_Exceed" => Ok(Verdict::TimeLimitExceeded),
            other => Err(format!("unknown verdict: {}", other)),
        }
    }
}

/// One judged submission, immutable once recorded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Submission {
    /// Zero-based problem index ('A' = 0).
    pub problem: usize,
    pub verdict: Verdict,
    /// Contest minute, >= 1.
    pub time: u32,
}

impl Submission {
    pub fn new(problem: usize, verdict: Verdict, time: u32) -> Self {
        Self { problem, verdict, time }
    }

    /// Problem letter as printed by the protocol.
    pub fn problem_letter(&self) -> char {
        (b'A' + self.problem as u8) as char
    }
}
