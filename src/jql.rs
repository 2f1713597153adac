//! JQL construction for the use-case dashboard.
//!
//! Pure string assembly over the closed filter sets in [`crate::model::filter`].
//! The enumerated values contain no characters that need escaping, so quoting
//! is literal: components and industries are quoted, status keywords are not.

use crate::model::filter::{Component, ComponentFilter, FilterSelection, StatusGroup};

const PROJECT_NAME: &str = "Industry Process Content Team";
const PRODUCT_VALUE: &str = "M3";
const ISSUE_TYPE: &str = "Use Case";
const PRODUCT_FIELD: &str = "product(s)[select list (multiple choices)]";
const INDUSTRY_FIELD: &str = "industry / cloudsuite categories[select list (multiple choices)]";

/// Build the one JQL query for a filter selection.
///
/// Clause order is fixed: project, product, type, industry, component,
/// status, then `ORDER BY created DESC`.
pub fn build_jql(selection: &FilterSelection) -> String {
    format!(
        "project = \"{PROJECT_NAME}\" \
         AND \"{PRODUCT_FIELD}\" = {PRODUCT_VALUE} \
         AND type = \"{ISSUE_TYPE}\" \
         AND \"{INDUSTRY_FIELD}\" = \"{industry}\" \
         AND {component} \
         AND {status} \
         ORDER BY created DESC",
        industry = selection.industry.label(),
        component = component_clause(selection.component),
        status = status_clause(selection.status),
    )
}

/// Either a membership clause over the complete component list (wildcard) or
/// an equality clause for the single selected component. Components are
/// string values in Jira, so every name is double-quoted.
fn component_clause(filter: ComponentFilter) -> String {
    match filter {
        ComponentFilter::All => {
            let quoted: Vec<String> = Component::ALL
                .iter()
                .map(|c| format!("\"{}\"", c.label()))
                .collect();
            format!("component IN ({})", quoted.join(", "))
        }
        ComponentFilter::Only(component) => {
            format!("component = \"{}\"", component.label())
        }
    }
}

/// Equality for a single status, membership for several. Statuses are Jira
/// keywords, never quoted.
fn status_clause(group: StatusGroup) -> String {
    let statuses = group.statuses();
    if statuses.len() > 1 {
        format!("status IN ({})", statuses.join(", "))
    } else {
        format!("status = {}", statuses[0])
    }
}
