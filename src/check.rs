use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use chrono::{DateTime, Local};
use colored::Colorize;
use duel_driver::{RunSummary, Status};
use serde::Serialize;

use crate::{config::HarnessConfig, problem::Problem};

#[derive(Debug, Serialize)]
struct CaseDetail {
    index: usize,
    status: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct CheckSummary {
    problem: String,
    signature: String,
    started_at: DateTime<Local>,
    finished_at: DateTime<Local>,
    total: usize,
    passed: usize,
    failed: usize,
    log_file: PathBuf,
    cases: Vec<CaseDetail>,
}

/// Runs the reference solution of each problem through the driver.
///
/// Protocol lines go to `out` only when a single problem is checked, since
/// every problem numbers its cases from 1. Each problem's records are always
/// kept in its run log next to `last_run.json` under the logs directory.
/// Fails if any case failed.
pub fn run_check(
    problems: &[Problem],
    workspace: &Path,
    config: &HarnessConfig,
    out: &mut dyn Write,
) -> Result<()> {
    let mut sink = io::sink();
    let out: &mut dyn Write = if problems.len() == 1 { out } else { &mut sink };

    let mut failed_problems = Vec::new();
    for problem in problems {
        let summary = check_problem(*problem, workspace, config, out)?;
        if !summary.all_passed() {
            failed_problems.push(problem.display_name());
        }
    }

    if !failed_problems.is_empty() {
        bail!("reference check failed for {}", failed_problems.join(", "));
    }
    Ok(())
}

fn check_problem(
    problem: Problem,
    workspace: &Path,
    config: &HarnessConfig,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    let logs_root = config.logs_root(workspace).join(problem.slug());
    let timestamp = Local::now().format("%Y%m%d-%H%M%S").to_string();
    let run_dir = logs_root.join(&timestamp);
    fs::create_dir_all(&run_dir)
        .with_context(|| format!("failed to create log dir {}", run_dir.display()))?;
    let log_path = run_dir.join("check.log");
    let mut log = File::create(&log_path)
        .with_context(|| format!("failed to create {}", log_path.display()))?;
    let start = Local::now();

    writeln!(log, "[check] {} - {}", problem.display_name(), problem.signature())?;

    let mut protocol = Vec::new();
    let summary = problem.run_reference(&mut protocol)?;
    out.write_all(&protocol)
        .and_then(|()| out.flush())
        .context("failed to write protocol output")?;
    log.write_all(&protocol)?;

    for outcome in &summary.outcomes {
        if outcome.message.is_empty() {
            writeln!(log, "[case] {} {}", outcome.index, outcome.status)?;
        } else {
            writeln!(
                log,
                "[case] {} {} - {}",
                outcome.index, outcome.status, outcome.message
            )?;
        }
    }
    writeln!(
        log,
        "[check] {}/{} passed (exit {})",
        summary.passed(),
        summary.total(),
        summary.exit_code()
    )?;

    let record = CheckSummary {
        problem: problem.slug().to_string(),
        signature: problem.signature().to_string(),
        started_at: start,
        finished_at: Local::now(),
        total: summary.total(),
        passed: summary.passed(),
        failed: summary.failed(),
        log_file: rel_path(&log_path, workspace),
        cases: summary
            .outcomes
            .iter()
            .map(|outcome| CaseDetail {
                index: outcome.index,
                status: outcome.status.to_string(),
                message: outcome.message.clone(),
            })
            .collect(),
    };
    let summary_path = logs_root.join("last_run.json");
    fs::write(&summary_path, serde_json::to_string_pretty(&record)?)
        .with_context(|| format!("failed to write {}", summary_path.display()))?;

    let verdict = if summary.all_passed() {
        Status::Pass.as_str().green().bold()
    } else {
        Status::Fail.as_str().red().bold()
    };
    eprintln!(
        "{} {}: {}/{} passed. Log: {}",
        verdict,
        problem.display_name(),
        summary.passed(),
        summary.total(),
        record.log_file.display()
    );

    Ok(summary)
}

pub fn rel_path(path: &Path, workspace: &Path) -> PathBuf {
    path.strip_prefix(workspace).unwrap_or(path).to_path_buf()
}
