//! CLI entry point for metalint.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `metalint-app` crate.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{ArgAction, Parser, ValueEnum};
use metalint_app::{
    CheckInput, ExplainOutput, format_explanation, format_not_found, render_annotations,
    render_markdown, render_text, run_check, run_explain, runtime_error_report, serialize_report,
    to_renderable, verdict_exit_code, write_report,
};
use metalint_domain::RuleConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "metalint",
    version,
    about = "Conformance checker for desktop-application AppStream metainfo documents"
)]
struct Cli {
    /// Metainfo document to validate (e.g. org.example.App.metainfo.xml).
    #[arg(value_name = "FILE", required_unless_present = "explain")]
    file: Option<Utf8PathBuf>,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also write the JSON report to this path.
    #[arg(long, value_name = "PATH")]
    report_out: Option<Utf8PathBuf>,

    /// Explain a check_id or code (e.g. "component.kind" or "unsupported_kind") and exit.
    #[arg(long, value_name = "ID")]
    explain: Option<String>,

    /// Enable verbose logging on stderr. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// `Error:` / `Warning:` lines followed by `Validation complete.` on acceptance.
    Text,
    /// The `metalint.report.v1` JSON report.
    Json,
    /// Markdown summary, e.g. for a PR comment.
    Markdown,
    /// GitHub Actions workflow annotations.
    Github,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<u8> {
    if let Some(identifier) = &cli.explain {
        return Ok(cmd_explain(identifier));
    }

    let document = cli.file.as_deref().context("missing document path")?;
    cmd_check(cli, document)
}

fn cmd_check(cli: &Cli, document: &Utf8Path) -> anyhow::Result<u8> {
    tracing::debug!(document = %document, "checking document");

    let input = CheckInput {
        document_path: document,
        config: &RuleConfig::DEFAULT,
    };

    let report = match run_check(input) {
        Ok(output) => output.report,
        Err(err) => {
            tracing::error!("{err:#}");
            runtime_error_report(document.as_str(), &format!("{err:#}"))
        }
    };

    if let Some(path) = &cli.report_out {
        write_report(path, &report)?;
        tracing::debug!(path = %path, "wrote report");
    }

    let mut stdout = std::io::stdout().lock();
    match cli.format {
        OutputFormat::Text => {
            write!(stdout, "{}", render_text(&to_renderable(&report)))?;
        }
        OutputFormat::Json => {
            stdout.write_all(&serialize_report(&report)?)?;
            writeln!(stdout)?;
        }
        OutputFormat::Markdown => {
            write!(stdout, "{}", render_markdown(&to_renderable(&report)))?;
        }
        OutputFormat::Github => {
            for annotation in render_annotations(&to_renderable(&report), usize::MAX) {
                writeln!(stdout, "{}", annotation)?;
            }
        }
    }
    stdout.flush().context("flush stdout")?;

    Ok(exit_code(verdict_exit_code(report.verdict)))
}

fn cmd_explain(identifier: &str) -> u8 {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", format_explanation(&exp));
            0
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                format_not_found(&identifier, available_check_ids, available_codes)
            );
            1
        }
    }
}

fn exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(1)
}
