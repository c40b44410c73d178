//! Rule induction command

use super::util::{flag_value, has_flag, parse_output_arg, positional, write_output};
use greedy_rules::*;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::warn;

pub fn cmd_induce(args: &[String]) -> Result<()> {
    let files = positional(args);
    if files.is_empty() {
        return Err("Usage: greedy-rules induce <table.csv>... [--decision <column>] \
                    [--kind <kind>] [--config <config.yaml>] [--json|--yaml]"
            .into());
    }

    let options = reader_options(args)?;
    let kind: TableKind = flag_value(args, &["--kind", "-k"])
        .unwrap_or("decision-table")
        .parse()?;

    let mut config = match flag_value(args, &["--config", "-c"]) {
        Some(path) => InductionConfig::load(Path::new(path))?,
        None => InductionConfig::default(),
    };
    if has_flag(args, "--sequential") {
        config = config.sequential();
    }

    let report = induce_files(&files, &options, kind, &config)?;

    let content = if has_flag(args, "--json") {
        serde_json::to_string_pretty(&report)?
    } else if has_flag(args, "--yaml") {
        serde_norway::to_string(&report)?
    } else {
        report.to_report()
    };
    write_output(&parse_output_arg(args), &content)?;

    if report.is_ok() {
        Ok(())
    } else {
        Err(format!("{} table(s) rejected", report.failures.len()).into())
    }
}

/// Read and induce every file; a file that cannot be read is recorded as a
/// failure under its path and does not stop the others
fn induce_files(
    files: &[&str],
    options: &ReaderOptions,
    kind: TableKind,
    config: &InductionConfig,
) -> Result<InductionReport> {
    let mut sources = Vec::with_capacity(files.len());
    let mut unreadable = BTreeMap::new();
    for file in files {
        match read_csv(Path::new(file), options) {
            Ok(source) => sources.push(source),
            Err(e) => {
                warn!(file, error = %e, "table file rejected");
                unreadable.insert(file.to_string(), e);
            }
        }
    }

    let tables = table_map(sources, kind)?;
    let mut report = calculate_decision_rules(&tables, config);
    for (file, error) in unreadable {
        report.failures.entry(file).or_insert(error);
    }
    Ok(report)
}

fn reader_options(args: &[String]) -> Result<ReaderOptions> {
    let mut options = ReaderOptions {
        header: !has_flag(args, "--no-header"),
        decision: flag_value(args, &["--decision", "-d"]).map(str::to_string),
        ..ReaderOptions::default()
    };
    if let Some(delimiter) = flag_value(args, &["--delimiter"]) {
        let mut chars = delimiter.chars();
        options.delimiter = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ if delimiter == "\\t" => '\t',
            _ => {
                return Err(Error::Config(format!(
                    "Delimiter must be one character, got '{}'",
                    delimiter
                )))
            }
        };
    }
    Ok(options)
}
