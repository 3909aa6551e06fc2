//! Developer tasks (schema generation, golden fixture updates, conformance).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use metalint_app::{CheckInput, run_check, runtime_error_report};
use metalint_domain::RuleConfig;
use metalint_test_util::{EXPECTED_REPORT, fixture_document, normalize_nondeterministic};
use metalint_types::MetalintReport;
use schemars::schema_for;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or(manifest_dir)
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

fn fixtures_dir() -> PathBuf {
    project_root().join("tests").join("fixtures")
}

/// Schema definition with its target filename.
struct SchemaSpec {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(MetalintReport)
}

fn schema_specs() -> Vec<SchemaSpec> {
    vec![SchemaSpec {
        filename: "metalint.report.v1.json",
        generate: generate_report_schema,
    }]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for spec in schema_specs() {
        let json = serialize_schema(&(spec.generate)())?;
        let path = dir.join(spec.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}

fn fixture_dirs() -> anyhow::Result<Vec<PathBuf>> {
    let mut dirs: Vec<PathBuf> = fs::read_dir(fixtures_dir())
        .context("Failed to read tests/fixtures/")?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.is_dir())
        .collect();
    dirs.sort();
    Ok(dirs)
}

/// Run the check use case in-process the way the CLI does from inside the fixture directory.
fn check_fixture(dir: &Path) -> anyhow::Result<MetalintReport> {
    let document = fixture_document(dir)
        .with_context(|| format!("no document in fixture {}", dir.display()))?;
    let name = document
        .file_name()
        .and_then(|n| n.to_str())
        .context("fixture document name is not UTF-8")?;
    let name = Utf8PathBuf::from(name);

    std::env::set_current_dir(dir)
        .with_context(|| format!("enter fixture {}", dir.display()))?;

    let report = match run_check(CheckInput {
        document_path: &name,
        config: &RuleConfig::DEFAULT,
    }) {
        Ok(output) => output.report,
        Err(err) => runtime_error_report(name.as_str(), &format!("{err:#}")),
    };
    Ok(report)
}

/// Validate every golden report against the report schema and compare it with a fresh run.
fn conform() -> anyhow::Result<()> {
    let schema = serde_json::to_value(generate_report_schema()).context("schema to json")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile schema: {}", e))?;

    let mut errors = Vec::new();
    let mut checked = 0;

    for dir in fixture_dirs()? {
        let golden_path = dir.join(EXPECTED_REPORT);
        if !golden_path.exists() {
            continue;
        }
        let fixture = dir.file_name().unwrap_or_default().to_string_lossy().to_string();

        let golden: serde_json::Value = serde_json::from_str(&fs::read_to_string(&golden_path)?)
            .with_context(|| format!("parse golden for fixture '{}'", fixture))?;

        let actual = serde_json::to_value(check_fixture(&dir)?)?;
        for err in validator.iter_errors(&actual) {
            errors.push(format!("fixture '{}': schema validation: {}", fixture, err));
        }

        if normalize_nondeterministic(actual) != normalize_nondeterministic(golden) {
            errors.push(format!("fixture '{}': output differs from {}", fixture, EXPECTED_REPORT));
        } else {
            println!("  fixture '{}' matches golden report", fixture);
        }
        checked += 1;
    }

    if !errors.is_empty() {
        for err in &errors {
            eprintln!("  - {}", err);
        }
        bail!("Conformance failed with {} errors", errors.len());
    }

    println!("\n{} golden reports conform.", checked);
    Ok(())
}

/// Rewrite existing golden reports from a fresh, normalized run.
fn update_goldens() -> anyhow::Result<()> {
    for dir in fixture_dirs()? {
        let golden_path = dir.join(EXPECTED_REPORT);
        if !golden_path.exists() {
            continue;
        }

        let report = serde_json::to_value(check_fixture(&dir)?)?;
        let mut json = serde_json::to_string_pretty(&normalize_nondeterministic(report))?;
        json.push('\n');
        fs::write(&golden_path, json)
            .with_context(|| format!("write {}", golden_path.display()))?;
        println!("Wrote {}", golden_path.display());
    }
    Ok(())
}

/// Validate that all check IDs and codes have complete explanations.
fn explain_coverage() -> anyhow::Result<()> {
    let check_ids = metalint_types::explain::all_check_ids();
    let codes = metalint_types::explain::all_codes();
    let mut errors = Vec::new();

    for id in check_ids.iter().chain(codes) {
        let Some(exp) = metalint_types::explain::lookup_explanation(id) else {
            errors.push(format!("'{}' has no explanation", id));
            continue;
        };
        for (field, value) in [
            ("title", exp.title),
            ("description", exp.description),
            ("remediation", exp.remediation),
            ("example before", exp.examples.before),
            ("example after", exp.examples.after),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("'{}' has empty {}", id, field));
            }
        }
    }

    if errors.is_empty() {
        println!("{} check IDs have explanations", check_ids.len());
        println!("{} codes have explanations", codes.len());
        Ok(())
    } else {
        for error in &errors {
            eprintln!("  - {}", error);
        }
        bail!("Explain coverage failed with {} errors", errors.len())
    }
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help              Show this message");
    eprintln!("  emit-schemas      Generate JSON schemas from Rust types to schemas/");
    eprintln!("  print-schema-ids  Print known schema IDs");
    eprintln!("  conform           Validate golden reports against the schema and a fresh run");
    eprintln!("  update-goldens    Regenerate existing expected.report.json files");
    eprintln!("  explain-coverage  Validate all check IDs and codes have explanations");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "conform" => conform(),
        "update-goldens" => update_goldens(),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", metalint_types::SCHEMA_REPORT_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
