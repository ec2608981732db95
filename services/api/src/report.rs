use crate::infra::{matcher_for, parse_threshold};
use clap::Args;
use name_match::config::AppConfig;
use name_match::error::AppError;
use name_match::matching::{DuplicateThreshold, NameComparison};
use name_match::roster::{dedupe, DedupeReport, RosterEntry, RosterImporter, DEFAULT_NAME_COLUMN};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CompareArgs {
    /// First name as it appears in the source record
    pub(crate) left: String,
    /// Second name as it appears in the source record
    pub(crate) right: String,
    /// Duplicate threshold between 0 and 1 (defaults to MATCH_DUPLICATE_THRESHOLD or 0.7)
    #[arg(long, value_parser = parse_threshold)]
    pub(crate) threshold: Option<DuplicateThreshold>,
    /// Print the comparison as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct DedupeArgs {
    /// CSV export containing one person name per row
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Header of the column holding names (case-insensitive)
    #[arg(long, default_value = DEFAULT_NAME_COLUMN)]
    pub(crate) column: String,
    /// Duplicate threshold between 0 and 1 (defaults to MATCH_DUPLICATE_THRESHOLD or 0.7)
    #[arg(long, value_parser = parse_threshold)]
    pub(crate) threshold: Option<DuplicateThreshold>,
    /// Print the report as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_compare(args: CompareArgs) -> Result<(), AppError> {
    let CompareArgs {
        left,
        right,
        threshold,
        json,
    } = args;

    let config = AppConfig::load()?;
    let matcher = matcher_for(&config.matching, threshold);
    let comparison = matcher.compare(&left, &right);

    if json {
        print_json(&comparison);
    } else {
        print!("{}", render_comparison(&comparison));
    }

    Ok(())
}

pub(crate) fn run_dedupe(args: DedupeArgs) -> Result<(), AppError> {
    let DedupeArgs {
        csv,
        column,
        threshold,
        json,
    } = args;

    let config = AppConfig::load()?;
    let matcher = matcher_for(&config.matching, threshold);
    let entries = RosterImporter::from_path(&csv, &column)?;
    let report = dedupe(&entries, &matcher);

    if json {
        print_json(&report);
    } else {
        print!("{}", render_dedupe_report(&entries, &report));
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{json}"),
        Err(err) => eprintln!("unable to serialize output: {err}"),
    }
}

pub(crate) fn render_comparison(comparison: &NameComparison) -> String {
    let breakdown = &comparison.breakdown;
    let mut lines = vec![
        format!("\"{}\" vs \"{}\"", comparison.left, comparison.right),
        format!(
            "Normalized: \"{}\" | \"{}\"",
            breakdown.left_normalized, breakdown.right_normalized
        ),
        format!("Method: {}", breakdown.method.label()),
    ];

    if let (Some(words), Some(chars)) = (breakdown.word_similarity, breakdown.char_similarity) {
        lines.push(format!("Word similarity: {:.3}", words));
        lines.push(format!("Character similarity: {:.3}", chars));
    }

    let verdict = if comparison.duplicate {
        "duplicate"
    } else {
        "distinct"
    };
    lines.push(format!("Score: {:.3}", breakdown.score));
    lines.push(format!(
        "Verdict: {} (threshold {:.2})",
        verdict, comparison.threshold
    ));

    lines.join("\n") + "\n"
}

pub(crate) fn render_dedupe_report(entries: &[RosterEntry], report: &DedupeReport) -> String {
    let names: HashMap<usize, &str> = entries
        .iter()
        .map(|entry| (entry.row, entry.name.as_str()))
        .collect();
    let mut lines = vec![format!(
        "Scanned {} names (threshold {:.2})",
        report.total, report.threshold
    )];

    if report.pairs.is_empty() {
        lines.push("\nLikely duplicates: none".to_string());
    } else {
        lines.push("\nLikely duplicates".to_string());
        for pair in &report.pairs {
            lines.push(format!(
                "- row {} \"{}\" <-> row {} \"{}\": {:.3} ({})",
                pair.left.row,
                pair.left.name,
                pair.right.row,
                pair.right.name,
                pair.score,
                pair.method.label()
            ));
        }
    }

    let groups: Vec<_> = report
        .clusters
        .iter()
        .filter(|cluster| cluster.len() > 1)
        .collect();
    if !groups.is_empty() {
        lines.push("\nGroups".to_string());
        for cluster in groups {
            let members: Vec<String> = cluster
                .iter()
                .map(|row| format!("{} (row {})", names.get(row).copied().unwrap_or("?"), row))
                .collect();
            lines.push(format!("- {}", members.join(", ")));
        }
    }

    lines.join("\n") + "\n"
}
