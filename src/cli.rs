use anyhow::{bail, Result};

use crate::config;
use crate::jql;
use crate::model::filter::{ComponentFilter, FilterSelection, Industry, StatusGroup};
use crate::tracker::{self, jira::JiraClient};

/// Parse CLI args for `usecases count` and print the count (and, for a single
/// component, the issue list) without entering the TUI.
pub async fn handle_count(args: &[String]) -> Result<()> {
    let selection = parse_count_args(args)?;
    let query = jql::build_jql(&selection);

    let jira = config::load_jira_config()?;
    let client = JiraClient::new(jira.base_url, jira.email, jira.api_token);

    println!("JQL: {query}");

    let total = tracker::count(&client, &query).await?;
    println!(
        "Total use cases in {} for {} with {} status: {total}",
        selection.component, selection.industry, selection.status
    );

    if !selection.component.is_wildcard() {
        let issues = tracker::fetch_all(&client, &query).await?;
        if issues.is_empty() {
            println!("No issues found for the selected filters.");
        } else {
            for issue in issues {
                println!("  {} — {}", issue.key, issue.summary);
            }
        }
    }

    Ok(())
}

/// Resolve `--industry`, `--component` and `--status` labels against the
/// fixed option sets. Omitted flags keep the default selection.
pub fn parse_count_args(args: &[String]) -> Result<FilterSelection> {
    let mut selection = FilterSelection::default();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "-i" | "--industry" => {
                let value = flag_value(args, &mut i, "--industry")?;
                selection.industry = match Industry::from_label(value) {
                    Some(industry) => industry,
                    None => bail!(
                        "Unknown industry {value:?}. Valid options:\n{}",
                        option_lines(Industry::ALL.iter().map(|o| o.label()))
                    ),
                };
            }
            "-c" | "--component" => {
                let value = flag_value(args, &mut i, "--component")?;
                selection.component = match ComponentFilter::from_label(value) {
                    Some(component) => component,
                    None => bail!(
                        "Unknown component {value:?}. Valid options:\n{}",
                        option_lines(ComponentFilter::options().iter().map(|o| o.label()))
                    ),
                };
            }
            "-s" | "--status" => {
                let value = flag_value(args, &mut i, "--status")?;
                selection.status = match StatusGroup::from_label(value) {
                    Some(status) => status,
                    None => bail!(
                        "Unknown status {value:?}. Valid options:\n{}",
                        option_lines(StatusGroup::ALL.iter().map(|o| o.label()))
                    ),
                };
            }
            other => bail!("Unknown argument {other:?}. See `usecases --help`."),
        }
        i += 1;
    }

    Ok(selection)
}

fn flag_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str> {
    *i += 1;
    match args.get(*i) {
        Some(value) => Ok(value),
        None => bail!("Missing value for {flag}"),
    }
}

fn option_lines<'a>(labels: impl Iterator<Item = &'a str>) -> String {
    labels
        .map(|l| format!("  {l}"))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_help() {
    println!("usecases — terminal dashboard for counting Jira use cases\n");
    println!("USAGE:");
    println!("  usecases                Launch the TUI dashboard");
    println!("  usecases count [FLAGS]  Print the count for one filter selection");
    println!();
    println!("COUNT FLAGS:");
    println!("  -i, --industry <label>   Industry, e.g. \"Fashion (FSH)\"");
    println!("  -c, --component <label>  Component, e.g. \"Order to Cash\" or \"All\"");
    println!("  -s, --status <label>     Status group, e.g. \"Resolved & Reopened\"");
    println!();
    println!("EXAMPLES:");
    println!("  usecases count -i \"Fashion (FSH)\" -c \"Order to Cash\" -s Resolved");
}
