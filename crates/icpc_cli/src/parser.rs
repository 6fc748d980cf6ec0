//! Line parser for the contest command protocol.
//!
//! Grammar (one command per line, fields separated by whitespace):
//!
//! ```text
//! ADDTEAM <name>
//! START DURATION <minutes> PROBLEM <count>
//! SUBMIT <letter> BY <team> WITH <verdict> AT <minute>
//! FLUSH | FREEZE | SCROLL | END
//! QUERY_RANKING <team>
//! QUERY_SUBMISSION <team> WHERE PROBLEM=<letter|ALL> AND STATUS=<verdict|ALL>
//! ```

use anyhow::{bail, Context, Result};
use icpc_core::Verdict;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddTeam { name: String },
    Start { duration: u32, problem_count: usize },
    Submit { problem: usize, team: String, verdict: Verdict, time: u32 },
    Flush,
    Freeze,
    Scroll,
    QueryRanking { team: String },
    QuerySubmission { team: String, problem: Option<usize>, verdict: Option<Verdict> },
    End,
}

pub fn parse_line(line: &str) -> Result<Command> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&keyword, args)) = tokens.split_first() else {
        bail!("empty command line");
    };
    match keyword {
        "ADDTEAM" => match args {
            [name] => Ok(Command::AddTeam { name: (*name).to_string() }),
            _ => bail!("ADDTEAM expects a team name"),
        },
        "START" => match args {
            ["DURATION", duration, "PROBLEM", count] => Ok(Command::Start {
                duration: duration.parse().context("invalid duration")?,
                problem_count: count.parse().context("invalid problem count")?,
            }),
            _ => bail!("malformed START command"),
        },
        "SUBMIT" => match args {
            [letter, "BY", team, "WITH", verdict, "AT", time] => Ok(Command::Submit {
                problem: problem_index(letter)?,
                team: (*team).to_string(),
                verdict: verdict.parse::<Verdict>().map_err(anyhow::Error::msg)?,
                time: time.parse().context("invalid submit time")?,
            }),
            _ => bail!("malformed SUBMIT command"),
        },
        "FLUSH" => Ok(Command::Flush),
        "FREEZE" => Ok(Command::Freeze),
        "SCROLL" => Ok(Command::Scroll),
        "QUERY_RANKING" => match args {
            [team] => Ok(Command::QueryRanking { team: (*team).to_string() }),
            _ => bail!("QUERY_RANKING expects a team name"),
        },
        "QUERY_SUBMISSION" => match args {
            [team, "WHERE", problem_field, "AND", status_field] => {
                let problem = field_value(problem_field, "PROBLEM=")?;
                let verdict = field_value(status_field, "STATUS=")?;
                Ok(Command::QuerySubmission {
                    team: (*team).to_string(),
                    problem: match problem {
                        "ALL" => None,
                        letter => Some(problem_index(letter)?),
                    },
                    verdict: match verdict {
                        "ALL" => None,
                        code => Some(code.parse::<Verdict>().map_err(anyhow::Error::msg)?),
                    },
                })
            }
            _ => bail!("malformed QUERY_SUBMISSION command"),
        },
        "END" => Ok(Command::End),
        other => bail!("unknown command: {}", other),
    }
}

fn problem_index(token: &str) -> Result<usize> {
    match token.as_bytes() {
        [letter @ b'A'..=b'Z'] => Ok(usize::from(letter - b'A')),
        _ => bail!("invalid problem letter: {}", token),
    }
}

fn field_value<'a>(token: &'a str, prefix: &str) -> Result<&'a str> {
    token
        .strip_prefix(prefix)
        .with_context(|| format!("expected {}<value>, got {}", prefix, token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add_team_and_start() {
        assert_eq!(
            parse_line("ADDTEAM moscow_su").unwrap(),
            Command::AddTeam { name: "moscow_su".into() }
        );
        assert_eq!(
            parse_line("START DURATION 300 PROBLEM 10").unwrap(),
            Command::Start { duration: 300, problem_count: 10 }
        );
    }

    #[test]
    fn test_parse_submit() {
        assert_eq!(
            parse_line("SUBMIT C BY tsinghua WITH Time_Limit_Exceed AT 87").unwrap(),
            Command::Submit {
                problem: 2,
                team: "tsinghua".into(),
                verdict: Verdict::TimeLimitExceeded,
                time: 87,
            }
        );
    }

    #[test]
    fn test_parse_query_submission_filters() {
        assert_eq!(
            parse_line("QUERY_SUBMISSION pku WHERE PROBLEM=ALL AND STATUS=Accepted").unwrap(),
            Command::QuerySubmission {
                team: "pku".into(),
                problem: None,
                verdict: Some(Verdict::Accepted),
            }
        );
        assert_eq!(
            parse_line("QUERY_SUBMISSION pku WHERE PROBLEM=B AND STATUS=ALL").unwrap(),
            Command::QuerySubmission { team: "pku".into(), problem: Some(1), verdict: None }
        );
    }

    #[test]
    fn test_parse_bare_commands() {
        assert_eq!(parse_line("FLUSH").unwrap(), Command::Flush);
        assert_eq!(parse_line("FREEZE").unwrap(), Command::Freeze);
        assert_eq!(parse_line("SCROLL").unwrap(), Command::Scroll);
        assert_eq!(parse_line("END").unwrap(), Command::End);
    }

    #[test]
    fn test_parse_rejects_malformed_lines() {
        assert!(parse_line("").is_err());
        assert!(parse_line("SUBMIT C BY x WITH Accepted").is_err());
        assert!(parse_line("SUBMIT CC BY x WITH Accepted AT 1").is_err());
        assert!(parse_line("QUERY_SUBMISSION x WHERE STATUS=ALL AND PROBLEM=ALL").is_err());
        assert!(parse_line("DANCE").is_err());
    }
}
