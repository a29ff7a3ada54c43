use crate::report::ReportKind;

pub fn to_json(report: &ReportKind) -> Result<String, serde_json::Error> {
    match report {
        ReportKind::Base(report) => serde_json::to_string_pretty(report),
        ReportKind::Enhanced(report) => serde_json::to_string_pretty(report),
        ReportKind::Ranking(report) => serde_json::to_string_pretty(report),
        ReportKind::Leaderboard(report) => serde_json::to_string_pretty(report),
    }
}
