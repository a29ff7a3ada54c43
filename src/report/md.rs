use crate::report::ReportKind;
use crate::types::report::{EnhancedReport, Leaderboard, RankingReport, ScoreReport};

pub fn to_markdown(report: &ReportKind) -> String {
    match report {
        ReportKind::Base(report) => base_markdown(report),
        ReportKind::Enhanced(report) => enhanced_markdown(report),
        ReportKind::Ranking(report) => ranking_markdown(report),
        ReportKind::Leaderboard(report) => leaderboard_markdown(report),
    }
}

fn base_markdown(report: &ScoreReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Contractor Score: {}\n\n",
        report.contractor_name
    ));
    output.push_str(&format!(
        "Overall: {} (grade {})\n\n",
        report.overall_score, report.grade
    ));
    output.push_str("## Sub-scores\n\n");
    let s = &report.subscores;
    output.push_str(&format!(
        "- reviews: {:.1} ({} reviews)\n- on-time: {:.1}\n- budget: {:.1}\n- safety: {:.1}\n- communication: {:.1}\n- risk: {:.1}\n- insurance: {:.1}\n- experience: {:.1}\n",
        s.reviews, report.sample_size, s.on_time, s.budget, s.safety, s.communication, s.risk,
        s.insurance, s.experience
    ));
    output
}

fn enhanced_markdown(report: &EnhancedReport) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "# Contractor Score: {}\n\n",
        report.contractor_name
    ));
    output.push_str(&format!(
        "Overall: {} (grade {}), permit-verified\n",
        report.enhanced_score, report.grade
    ));
    output.push_str(&format!(
        "Legacy score: {} (grade {})\n\n",
        report.base.overall_score, report.base.grade
    ));
    output.push_str("## Permit metrics\n\n");
    let m = &report.permit_metrics;
    output.push_str(&format!(
        "- permits on record: {}\n- completion rate: {:.1}\n- average timeline: {:.1} days\n- efficiency: {:.1}\n- compliance: {:.1}\n- permit score: {:.1}\n\n",
        m.total_permits,
        m.completion_rate,
        m.average_timeline_days,
        m.efficiency,
        m.compliance_rate,
        m.overall
    ));
    output.push_str("## Verification signals\n\n");
    output.push_str(&format!(
        "- specialization: {:.1}\n- insurance correlation: {:.1}\n- project verification: {:.1}\n\n",
        report.specialization_score,
        report.insurance_correlation_score,
        report.project_verification_score
    ));
    output.push_str("## Legacy sub-scores\n\n");
    let s = &report.base.subscores;
    output.push_str(&format!(
        "- reviews: {:.1}\n- on-time: {:.1}\n- budget: {:.1}\n- safety: {:.1}\n- communication: {:.1}\n- risk: {:.1}\n- insurance: {:.1}\n- experience: {:.1}\n",
        s.reviews, s.on_time, s.budget, s.safety, s.communication, s.risk, s.insurance,
        s.experience
    ));
    output
}

fn ranking_markdown(report: &RankingReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Peer Ranking: {}\n\n", report.contractor_name));
    if report.total == 0 {
        output.push_str("No peers share this contractor's trades and experience bracket.\n");
        return output;
    }
    output.push_str(&format!(
        "Score: {} (grade {})\n\nRank {} of {} in the {} year bracket ({}th percentile).\n",
        report.score, report.grade, report.rank, report.total, report.bracket, report.percentile
    ));
    output
}

fn leaderboard_markdown(report: &Leaderboard) -> String {
    let mut output = String::new();
    output.push_str("# Contractor Leaderboard\n\n");
    output.push_str("| # | Contractor | Score | Grade | Permit-verified |\n");
    output.push_str("|---|------------|-------|-------|------------------|\n");
    for (index, entry) in report.entries.iter().enumerate() {
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            index + 1,
            entry.contractor_name,
            entry.score,
            entry.grade,
            if entry.permit_verified { "yes" } else { "no" }
        ));
    }
    output
}
