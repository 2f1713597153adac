/// Read-only snapshot of a matched issue: the tracker-assigned key plus the
/// summary line. Everything else Jira returns is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSummary {
    pub key: String,
    pub summary: String,
}
