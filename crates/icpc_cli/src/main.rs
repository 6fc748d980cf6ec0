//! ICPC scoreboard CLI
//!
//! Reads the contest command stream (stdin or a file), drives the
//! scoreboard engine, and prints the protocol's exact response lines.

mod parser;

use anyhow::{Context, Result};
use clap::Parser;
use icpc_core::{BoardRow, ContestError, Scoreboard, Submission};
use parser::Command;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "icpc")]
#[command(about = "ICPC contest scoreboard over a textual command stream", long_about = None)]
struct Cli {
    /// Command stream file; reads stdin when omitted
    input: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Stop,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.input {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("cannot open {:?}", path))?;
            run(BufReader::new(file), &mut out)
        }
        None => run(io::stdin().lock(), &mut out),
    }
}

fn run(reader: impl BufRead, out: &mut impl Write) -> Result<()> {
    let mut board = Scoreboard::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let command = parser::parse_line(&line).with_context(|| format!("bad line: {}", line))?;
        if execute(&mut board, command, out)? == Flow::Stop {
            break;
        }
    }
    out.flush()?;
    Ok(())
}

fn execute(board: &mut Scoreboard, command: Command, out: &mut impl Write) -> Result<Flow> {
    match command {
        Command::AddTeam { name } => match board.add_team(&name) {
            Ok(()) => writeln!(out, "[Info]Add successfully.")?,
            Err(ContestError::AlreadyStarted) => {
                writeln!(out, "[Error]Add failed: competition has started.")?;
            }
            Err(_) => writeln!(out, "[Error]Add failed: duplicated team name.")?,
        },
        Command::Start { duration, problem_count } => match board.start(duration, problem_count) {
            Ok(()) => writeln!(out, "[Info]Competition starts.")?,
            Err(_) => writeln!(out, "[Error]Start failed: competition has started.")?,
        },
        Command::Submit { problem, team, verdict, time } => {
            // Submissions are pre-validated by the problem statement; an
            // unknown team is silently ignored like any other no-op.
            let _ = board.submit(problem, &team, verdict, time);
        }
        Command::Flush => {
            board.flush();
            writeln!(out, "[Info]Flush scoreboard.")?;
        }
        Command::Freeze => match board.freeze() {
            Ok(()) => writeln!(out, "[Info]Freeze scoreboard.")?,
            Err(_) => writeln!(out, "[Error]Freeze failed: scoreboard has been frozen.")?,
        },
        Command::Scroll => match board.scroll() {
            Ok(report) => {
                writeln!(out, "[Info]Scroll scoreboard.")?;
                print_board(out, &report.before)?;
                for event in &report.reveals {
                    writeln!(
                        out,
                        "{} {} {} {}",
                        event.team, event.displaced, event.solved, event.penalty
                    )?;
                }
                print_board(out, &report.after)?;
            }
            Err(_) => writeln!(out, "[Error]Scroll failed: scoreboard has not been frozen.")?,
        },
        Command::QueryRanking { team } => match board.query_ranking(&team) {
            Ok(report) => {
                writeln!(out, "[Info]Complete query ranking.")?;
                if report.frozen {
                    writeln!(
                        out,
                        "[Warning]Scoreboard is frozen. The ranking may be inaccurate \
                         until it were scrolled."
                    )?;
                }
                writeln!(out, "{} NOW AT RANKING {}", team, report.rank)?;
            }
            Err(_) => writeln!(out, "[Error]Query ranking failed: cannot find the team.")?,
        },
        Command::QuerySubmission { team, problem, verdict } => {
            match board.query_submission(&team, problem, verdict) {
                Ok(found) => {
                    writeln!(out, "[Info]Complete query submission.")?;
                    match found {
                        Some(submission) => print_submission(out, &team, &submission)?,
                        None => writeln!(out, "Cannot find any submission.")?,
                    }
                }
                Err(_) => writeln!(out, "[Error]Query submission failed: cannot find the team.")?,
            }
        }
        Command::End => {
            writeln!(out, "[Info]Competition ends.")?;
            return Ok(Flow::Stop);
        }
    }
    Ok(Flow::Continue)
}

fn print_board(out: &mut impl Write, rows: &[BoardRow]) -> Result<()> {
    for row in rows {
        writeln!(out, "{}", row)?;
    }
    Ok(())
}

fn print_submission(out: &mut impl Write, team: &str, submission: &Submission) -> Result<()> {
    writeln!(
        out,
        "{} {} {} {}",
        team,
        submission.problem_letter(),
        submission.verdict,
        submission.time
    )?;
    Ok(())
}
