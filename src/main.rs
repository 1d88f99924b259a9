mod check;
mod config;
mod problem;

use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use colored::Colorize;
use duel_driver::{
    Status,
    protocol::{SubmissionReport, SubmissionStatus},
    template::Template,
};

use crate::{check::run_check, config::load_config, problem::Problem};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let workspace = fs::canonicalize(&cli.workspace)
        .with_context(|| format!("failed to resolve workspace {}", cli.workspace.display()))?;
    let config = load_config(&workspace)?;

    match cli.action {
        Action::List => {
            list_problems(&workspace, &config);
            Ok(())
        }
        Action::Render { problem, code, out } => {
            render_submission(problem, &code, out.as_deref(), &workspace, &config)
        }
        Action::Check { problem } => {
            let problems = match problem {
                Some(problem) => vec![problem],
                None => Problem::ALL.to_vec(),
            };
            run_check(&problems, &workspace, &config, &mut io::stdout().lock())
        }
        Action::Parse {
            stdout,
            exit_code,
            stderr,
        } => parse_run(&stdout, exit_code, stderr.as_deref()),
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "duel-harness",
    version,
    about = "Driver templates and reference checks for duel problems"
)]
struct Cli {
    #[command(subcommand)]
    action: Action,
    #[arg(long, global = true, default_value = ".")]
    workspace: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Action {
    /// List supported problems and the signature each expects.
    List,
    /// Substitute submitted code into a problem's driver template.
    Render {
        #[arg(value_enum)]
        problem: Problem,
        /// File holding the submitted code, or `-` for stdin.
        code: PathBuf,
        /// Write the program here instead of stdout.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Run reference solutions through the driver.
    Check {
        #[arg(value_enum)]
        problem: Option<Problem>,
    },
    /// Classify the captured output of a rendered program.
    Parse {
        /// File holding the program's stdout, or `-` for stdin.
        stdout: PathBuf,
        #[arg(long, allow_negative_numbers = true)]
        exit_code: i32,
        /// File holding the program's stderr.
        #[arg(long)]
        stderr: Option<PathBuf>,
    },
}

fn list_problems(workspace: &Path, config: &config::HarnessConfig) {
    let templates_root = config.templates_root(workspace);
    for problem in Problem::ALL {
        println!("{} ({})", problem.display_name().bold(), problem.slug());
        println!("    {}", problem.signature());
        println!(
            "    template: {}",
            check::rel_path(&problem.template_path(&templates_root), workspace).display()
        );
    }
}

fn render_submission(
    problem: Problem,
    code_path: &Path,
    out: Option<&Path>,
    workspace: &Path,
    config: &config::HarnessConfig,
) -> Result<()> {
    let template_path = problem.template_path(&config.templates_root(workspace));
    let template = Template::load(&template_path, &config.placeholder)?;
    let code = read_input(code_path)?;
    let program = template
        .render(&code, config.max_code_length)
        .with_context(|| format!("cannot render {}", problem.display_name()))?;

    match out {
        Some(path) => fs::write(path, program)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{program}"),
    }
    Ok(())
}

fn parse_run(stdout_path: &Path, exit_code: i32, stderr_path: Option<&Path>) -> Result<()> {
    if stderr_path.is_some_and(|path| path == Path::new("-")) && stdout_path == Path::new("-") {
        bail!("stdout and stderr cannot both be read from stdin");
    }
    let stdout = read_input(stdout_path)?;
    let stderr = match stderr_path {
        Some(path) => read_input(path)?,
        None => String::new(),
    };

    let report = SubmissionReport::from_run(&stdout, &stderr, exit_code);
    println!("{}", serde_json::to_string_pretty(&report)?);

    let label = match report.status {
        SubmissionStatus::Success => report.status.as_str().green().bold(),
        _ => report.status.as_str().red().bold(),
    };
    eprintln!("{label}: {}/{} passed", report.passed(), report.tests.len());
    for (number, case) in &report.tests {
        let status = match case.status {
            Some(Status::Pass) => Status::Pass.as_str().green(),
            Some(status) => status.as_str().red(),
            None => "MISSING".yellow(),
        };
        match case.message.as_deref() {
            Some(message) if !message.is_empty() => eprintln!("  {number}: {status} {message}"),
            _ => eprintln!("  {number}: {status}"),
        }
    }
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("failed to read stdin")?;
        return Ok(buffer);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}
