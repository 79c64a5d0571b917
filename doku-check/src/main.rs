// These Clippy lints are disabled because this is a CLI binary, not a library:
// - print_stdout/print_stderr: CLI tools are expected to print to stdout/stderr for user output.
// - exit: Calling `std::process::exit()` is standard for CLI apps to signal failure to the shell.
// - unwrap_used/expect_used: In a CLI binary, panicking on unrecoverable errors is acceptable.
#![allow(
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::exit,
    clippy::unwrap_used,
    clippy::expect_used
)]

use std::io;
use std::path::PathBuf;

use clap::Parser;

use doku_check::{CheckConfig, ConsistencyReport, PlanDocError, output};

/// Exit code when all checks pass.
const EXIT_OK: i32 = 0;
/// Exit code when at least one check found an inconsistency.
const EXIT_FINDINGS: i32 = 1;
/// Exit code when the plan document is missing or unreadable.
const EXIT_FATAL: i32 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "doku-check",
    version,
    about = "Consistency checks for Markdown project documentation"
)]
struct Cli {
    /// Repository root to check
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Plan document path (default: `PLAN_PHASES.md` under the root)
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Glob pattern excluded from the Markdown walk (repeatable)
    #[arg(long)]
    exclude: Vec<String>,

    /// Output machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Increase diagnostic output on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn config_from(cli: &Cli) -> CheckConfig {
    let mut config = CheckConfig::default();
    config.root = cli.root.clone();
    config.plan = cli.plan.clone();
    config.exclude = cli.exclude.clone();
    config
}

fn write_report(cli: &Cli, report: &ConsistencyReport) -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    if cli.json {
        output::write_json(report, &mut stdout)
    } else {
        output::write_human(report, &mut stdout)
    }
}

fn run(cli: &Cli) -> i32 {
    let config = config_from(cli);

    if cli.verbose > 0 {
        eprintln!(
            "Checking {} (plan: {})",
            config.root.display(),
            config.plan_path().display()
        );
    }

    let report = match doku_check::check_repo(&config) {
        Ok(report) => report,
        Err(PlanDocError::Missing(path)) => {
            println!("ERROR: {} nicht gefunden.", path.display());
            return EXIT_FATAL;
        }
        Err(PlanDocError::Unreadable { path, source }) => {
            println!(
                "ERROR: {} konnte nicht gelesen werden: {source}",
                path.display()
            );
            return EXIT_FATAL;
        }
    };

    if cli.verbose > 0 {
        eprintln!(
            "Scanned {} Markdown file(s), {} finding(s)",
            report.links.scanned_files,
            report.findings_count()
        );
    }

    if let Err(err) = write_report(cli, &report) {
        eprintln!("Error: {err}");
        return EXIT_FINDINGS;
    }

    if report.ok { EXIT_OK } else { EXIT_FINDINGS }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use doku_check::PLAN_FILE_NAME;
    use tempfile::TempDir;

    fn cli_for(root: &Path) -> Cli {
        Cli {
            root: root.to_path_buf(),
            plan: None,
            exclude: Vec::new(),
            json: false,
            verbose: 0,
        }
    }

    #[test]
    fn test_run_exits_fatal_when_plan_missing() {
        let dir = TempDir::new().unwrap();

        assert_eq!(run(&cli_for(dir.path())), EXIT_FATAL);
    }

    #[test]
    fn test_run_exits_findings_on_inconsistent_repo() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PLAN_FILE_NAME),
            "#### Stream A (\u{2705} ABGESCHLOSSEN)\n\n- [ ] offen\n",
        )
        .unwrap();

        assert_eq!(run(&cli_for(dir.path())), EXIT_FINDINGS);
    }

    #[test]
    fn test_run_exits_ok_on_clean_repo() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(PLAN_FILE_NAME),
            "#### Stream A (\u{2705} ABGESCHLOSSEN)\n\n- [x] erledigt\n",
        )
        .unwrap();

        assert_eq!(run(&cli_for(dir.path())), EXIT_OK);
    }
}
