//! Input records for the scoring engine.
//!
//! These mirror the JSON shape exported by the platform's contractor
//! aggregation endpoint: camelCase fields, SCREAMING_SNAKE enum variants,
//! every collection optional and defaulting to empty. The engine reads these
//! records but never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything known about one contractor, assembled by the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractorRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub years_in_business: f64,
    #[serde(default)]
    pub total_projects: u32,
    /// Lifetime contract value in dollars.
    #[serde(default)]
    pub total_value: f64,
    #[serde(default)]
    pub trades: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
    #[serde(default)]
    pub legal_events: Vec<LegalEvent>,
    #[serde(default)]
    pub insurance_policies: Vec<InsurancePolicy>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub permits: Vec<Permit>,
    #[serde(default)]
    pub specializations: Vec<WorkSpecialization>,
    #[serde(default)]
    pub insurance_correlations: Vec<InsurancePermitCorrelation>,
}

impl ContractorRecord {
    /// Whether any permit-derived signal exists. Decides which score is
    /// surfaced as authoritative (enhanced vs. base).
    pub fn has_permit_signal(&self) -> bool {
        !self.permits.is_empty()
            || !self.specializations.is_empty()
            || !self.insurance_correlations.is_empty()
    }

    /// True when the two contractors share at least one trade.
    pub fn shares_trade_with(&self, other: &ContractorRecord) -> bool {
        self.trades
            .iter()
            .any(|trade| other.trades.iter().any(|peer| peer == trade))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    /// Star rating, 1-5.
    pub stars: f64,
    /// Optional communication rating, 1-5.
    #[serde(default)]
    pub communication: Option<f64>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LegalSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalEvent {
    pub severity: LegalSeverity,
    /// Filing date when known; decay falls back to `created_at`.
    #[serde(default)]
    pub filed_on: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl LegalEvent {
    pub fn effective_date(&self) -> DateTime<Utc> {
        self.filed_on.unwrap_or(self.created_at)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsuranceType {
    #[serde(rename = "GL")]
    GeneralLiability,
    #[serde(rename = "WC")]
    WorkersComp,
    #[serde(rename = "AUTO")]
    Auto,
    #[serde(rename = "UMBRELLA")]
    Umbrella,
    #[serde(rename = "OTHER")]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePolicy {
    #[serde(rename = "type")]
    pub policy_type: InsuranceType,
    #[serde(default)]
    pub coverage_each_occurrence: f64,
    pub expires_on: DateTime<Utc>,
}

impl InsurancePolicy {
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_on > now
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProjectStatus {
    Planned,
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInspection {
    #[serde(default)]
    pub violations: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub status: ProjectStatus,
    #[serde(default)]
    pub planned_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub actual_end: Option<DateTime<Utc>>,
    #[serde(default)]
    pub budget_planned: Option<f64>,
    #[serde(default)]
    pub budget_actual: Option<f64>,
    #[serde(default)]
    pub inspections: Vec<ProjectInspection>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PermitStatus {
    Applied,
    Issued,
    InProgress,
    Completed,
    Expired,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InspectionStatus {
    Passed,
    Failed,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermitInspection {
    pub status: InspectionStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permit {
    pub status: PermitStatus,
    #[serde(default)]
    pub requested_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed_date: Option<DateTime<Utc>>,
    pub permit_type: String,
    /// Links the permit to one of the contractor's projects.
    #[serde(default)]
    pub project_id: Option<String>,
    #[serde(default)]
    pub inspections: Vec<PermitInspection>,
}

impl Permit {
    /// Timeline in days for a completed permit with both dates present.
    pub fn timeline_days(&self) -> Option<f64> {
        if self.status != PermitStatus::Completed {
            return None;
        }
        match (self.requested_date, self.completed_date) {
            (Some(requested), Some(completed)) => {
                Some((completed - requested).num_seconds() as f64 / 86_400.0)
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSpecialization {
    pub specialization: String,
    #[serde(default)]
    pub permit_count: u32,
    /// Percent of permits in this specialization that closed successfully.
    #[serde(default)]
    pub success_rate: f64,
    /// Mean permit duration in days.
    #[serde(default)]
    pub average_duration: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CorrelationType {
    AddedBeforePermit,
    AddedDuringWork,
    AddedAfterPermit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsurancePermitCorrelation {
    pub correlation_type: CorrelationType,
    pub risk_level: RiskLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_parses_from_minimal_json() {
        let raw = r#"{
            "id": "c-1",
            "name": "Acme Remodeling"
        }"#;
        let record: ContractorRecord = serde_json::from_str(raw).expect("record should parse");
        assert_eq!(record.id, "c-1");
        assert_eq!(record.years_in_business, 0.0);
        assert!(record.reviews.is_empty());
        assert!(!record.has_permit_signal());
    }

    #[test]
    fn record_parses_wire_enums() {
        let raw = r#"{
            "id": "c-2",
            "name": "Bolt Electric",
            "trades": ["electrical"],
            "legalEvents": [
                {"severity": "CRITICAL", "createdAt": "2024-01-10T00:00:00Z"}
            ],
            "insurancePolicies": [
                {"type": "GL", "coverageEachOccurrence": 1000000.0,
                 "expiresOn": "2030-01-01T00:00:00Z"}
            ],
            "insuranceCorrelations": [
                {"correlationType": "ADDED_BEFORE_PERMIT", "riskLevel": "LOW"}
            ]
        }"#;
        let record: ContractorRecord = serde_json::from_str(raw).expect("record should parse");
        assert_eq!(record.legal_events[0].severity, LegalSeverity::Critical);
        assert_eq!(
            record.insurance_policies[0].policy_type,
            InsuranceType::GeneralLiability
        );
        assert_eq!(
            record.insurance_correlations[0].correlation_type,
            CorrelationType::AddedBeforePermit
        );
        assert!(record.has_permit_signal());
    }

    #[test]
    fn permit_timeline_requires_completion_and_both_dates() {
        let raw = r#"{
            "status": "COMPLETED",
            "requestedDate": "2024-01-01T00:00:00Z",
            "completedDate": "2024-01-31T00:00:00Z",
            "permitType": "electrical"
        }"#;
        let permit: Permit = serde_json::from_str(raw).expect("permit should parse");
        assert_eq!(permit.timeline_days(), Some(30.0));

        let open = Permit {
            status: PermitStatus::InProgress,
            ..permit.clone()
        };
        assert_eq!(open.timeline_days(), None);
    }

    #[test]
    fn shared_trades_require_nonempty_intersection() {
        let base = ContractorRecord {
            id: "a".into(),
            name: "A".into(),
            years_in_business: 2.0,
            total_projects: 0,
            total_value: 0.0,
            trades: vec!["plumbing".into(), "hvac".into()],
            reviews: vec![],
            legal_events: vec![],
            insurance_policies: vec![],
            projects: vec![],
            permits: vec![],
            specializations: vec![],
            insurance_correlations: vec![],
        };
        let mut peer = base.clone();
        peer.trades = vec!["hvac".into()];
        assert!(base.shares_trade_with(&peer));
        peer.trades = vec!["roofing".into()];
        assert!(!base.shares_trade_with(&peer));
    }
}
