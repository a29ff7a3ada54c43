//! Peer ranking within trade/experience cohorts.
//!
//! Ranking is competition-style: rank = 1 + the number of strictly higher
//! scorers, so equal scores share a rank and no further tiebreak is applied.

use crate::types::contractor::ContractorRecord;

/// Years-in-business brackets. Boundary years (3, 6, 10) belong to two
/// brackets for cohort membership; a contractor's own bracket is the first
/// match, and anything below the first bracket defaults into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExperienceBracket {
    pub min: f64,
    pub max: f64,
    pub label: &'static str,
}

pub const BRACKETS: [ExperienceBracket; 4] = [
    ExperienceBracket {
        min: 1.0,
        max: 3.0,
        label: "1-3",
    },
    ExperienceBracket {
        min: 3.0,
        max: 6.0,
        label: "3-6",
    },
    ExperienceBracket {
        min: 6.0,
        max: 10.0,
        label: "6-10",
    },
    ExperienceBracket {
        min: 10.0,
        max: f64::INFINITY,
        label: "10+",
    },
];

pub fn bracket_for(years_in_business: f64) -> ExperienceBracket {
    BRACKETS
        .iter()
        .copied()
        .find(|bracket| bracket.contains(years_in_business))
        .unwrap_or(BRACKETS[0])
}

impl ExperienceBracket {
    pub fn contains(&self, years_in_business: f64) -> bool {
        years_in_business >= self.min && years_in_business <= self.max
    }

    /// Cohort membership test. Years below the first bracket's floor
    /// default into it, so brand-new contractors rank among the 1-3 group.
    pub fn admits(&self, years_in_business: f64) -> bool {
        self.contains(years_in_business)
            || (years_in_business < BRACKETS[0].min && self.label == BRACKETS[0].label)
    }

    pub fn by_label(label: &str) -> Option<ExperienceBracket> {
        BRACKETS.iter().copied().find(|bracket| bracket.label == label)
    }
}

/// A contractor paired with its authoritative score, as ranked.
#[derive(Debug, Clone)]
pub struct ScoredContractor<'a> {
    pub record: &'a ContractorRecord,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerRanking {
    pub rank: usize,
    pub total: usize,
    pub percentile: u32,
}

/// Rank `target` against the cohort drawn from `scored`: contractors
/// admitted to the target's bracket whose trades intersect the target's.
/// `scored` is the whole data set, target entry included; the target joins
/// its own cohort through the same filter, so a contractor with no listed
/// trades has an empty cohort. Empty cohort -> all zeroes.
pub fn peer_ranking(
    target: &ContractorRecord,
    target_score: f64,
    scored: &[ScoredContractor<'_>],
) -> PeerRanking {
    peer_ranking_in_bracket(
        target,
        target_score,
        scored,
        bracket_for(target.years_in_business),
    )
}

/// Like [`peer_ranking`], but against an explicitly chosen experience
/// bracket instead of the one derived from the target's years. A target
/// the bracket does not admit is not rankable there and gets the
/// empty-cohort zeroes; rank never exceeds the cohort size.
pub fn peer_ranking_in_bracket(
    target: &ContractorRecord,
    target_score: f64,
    scored: &[ScoredContractor<'_>],
    bracket: ExperienceBracket,
) -> PeerRanking {
    if !bracket.admits(target.years_in_business) {
        return PeerRanking {
            rank: 0,
            total: 0,
            percentile: 0,
        };
    }
    let cohort: Vec<&ScoredContractor<'_>> = scored
        .iter()
        .filter(|peer| {
            bracket.admits(peer.record.years_in_business) && target.shares_trade_with(peer.record)
        })
        .collect();

    let total = cohort.len();
    if total == 0 {
        return PeerRanking {
            rank: 0,
            total: 0,
            percentile: 0,
        };
    }
    let better = cohort
        .iter()
        .filter(|peer| peer.record.id != target.id && peer.score > target_score)
        .count();
    let rank = (better + 1).min(total);
    let percentile = (((total + 1 - rank) as f64 / total as f64) * 100.0).round() as u32;
    PeerRanking {
        rank,
        total,
        percentile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contractor(id: &str, years: f64, trades: &[&str]) -> ContractorRecord {
        ContractorRecord {
            id: id.into(),
            name: id.to_uppercase(),
            years_in_business: years,
            total_projects: 0,
            total_value: 0.0,
            trades: trades.iter().map(|t| t.to_string()).collect(),
            reviews: vec![],
            legal_events: vec![],
            insurance_policies: vec![],
            projects: vec![],
            permits: vec![],
            specializations: vec![],
            insurance_correlations: vec![],
        }
    }

    #[test]
    fn brackets_cover_the_year_axis() {
        assert_eq!(bracket_for(0.0).label, "1-3");
        assert_eq!(bracket_for(2.0).label, "1-3");
        assert_eq!(bracket_for(3.0).label, "1-3");
        assert_eq!(bracket_for(4.5).label, "3-6");
        assert_eq!(bracket_for(8.0).label, "6-10");
        assert_eq!(bracket_for(10.0).label, "6-10");
        assert_eq!(bracket_for(25.0).label, "10+");
    }

    #[test]
    fn distinct_scores_rank_top_and_bottom() {
        let records: Vec<ContractorRecord> = (0..5)
            .map(|i| contractor(&format!("c{i}"), 5.0, &["plumbing"]))
            .collect();
        let scores = [90.0, 80.0, 70.0, 60.0, 50.0];
        let scored: Vec<ScoredContractor<'_>> = records
            .iter()
            .zip(scores)
            .map(|(record, score)| ScoredContractor { record, score })
            .collect();

        let top = peer_ranking(&records[0], 90.0, &scored);
        assert_eq!(top.rank, 1);
        assert_eq!(top.total, 5);
        assert_eq!(top.percentile, 100);

        let bottom = peer_ranking(&records[4], 50.0, &scored);
        assert_eq!(bottom.rank, 5);
        assert_eq!(bottom.percentile, 20);
    }

    #[test]
    fn equal_scores_share_a_rank() {
        let records: Vec<ContractorRecord> = (0..3)
            .map(|i| contractor(&format!("c{i}"), 5.0, &["hvac"]))
            .collect();
        let scored: Vec<ScoredContractor<'_>> = records
            .iter()
            .map(|record| ScoredContractor {
                record,
                score: 75.0,
            })
            .collect();

        for record in &records {
            let ranking = peer_ranking(record, 75.0, &scored);
            assert_eq!(ranking.rank, 1);
            assert_eq!(ranking.total, 3);
            assert_eq!(ranking.percentile, 100);
        }
    }

    #[test]
    fn cohort_requires_shared_trade_and_bracket() {
        let target = contractor("t", 5.0, &["plumbing"]);
        let same = contractor("a", 4.0, &["plumbing", "hvac"]);
        let other_trade = contractor("b", 5.0, &["roofing"]);
        let other_bracket = contractor("c", 20.0, &["plumbing"]);
        let records = [&target, &same, &other_trade, &other_bracket];
        let scored: Vec<ScoredContractor<'_>> = records
            .iter()
            .map(|&record| ScoredContractor {
                record,
                score: 99.0,
            })
            .collect();

        let ranking = peer_ranking(&target, 10.0, &scored);
        // Only "a" joins the cohort alongside the target.
        assert_eq!(ranking.total, 2);
        assert_eq!(ranking.rank, 2);
        assert_eq!(ranking.percentile, 50);
    }

    #[test]
    fn lone_contractor_tops_its_own_cohort() {
        let target = contractor("t", 2.0, &["tile"]);
        let scored = [ScoredContractor {
            record: &target,
            score: 42.0,
        }];
        let ranking = peer_ranking(&target, 42.0, &scored);
        assert_eq!(ranking.rank, 1);
        assert_eq!(ranking.total, 1);
        assert_eq!(ranking.percentile, 100);
    }

    #[test]
    fn no_listed_trades_means_no_cohort() {
        let target = contractor("t", 2.0, &[]);
        let peer = contractor("p", 2.0, &["tile"]);
        let scored = [
            ScoredContractor {
                record: &target,
                score: 42.0,
            },
            ScoredContractor {
                record: &peer,
                score: 90.0,
            },
        ];
        let ranking = peer_ranking(&target, 42.0, &scored);
        assert_eq!(
            ranking,
            PeerRanking {
                rank: 0,
                total: 0,
                percentile: 0
            }
        );
    }

    #[test]
    fn brackets_resolve_by_label() {
        assert_eq!(ExperienceBracket::by_label("6-10"), Some(BRACKETS[2]));
        assert_eq!(ExperienceBracket::by_label("veteran"), None);
    }

    #[test]
    fn explicit_bracket_overrides_the_derived_one() {
        let target = contractor("t", 2.0, &["hvac"]);
        let senior = contractor("s", 12.0, &["hvac"]);
        let scored = [
            ScoredContractor {
                record: &target,
                score: 60.0,
            },
            ScoredContractor {
                record: &senior,
                score: 90.0,
            },
        ];

        // Derived bracket (1-3) excludes the senior peer entirely.
        assert_eq!(peer_ranking(&target, 60.0, &scored).total, 1);

        // The 10+ bracket does not admit a 2-year target, so it is not
        // rankable there.
        let forced = peer_ranking_in_bracket(&target, 60.0, &scored, BRACKETS[3]);
        assert_eq!(
            forced,
            PeerRanking {
                rank: 0,
                total: 0,
                percentile: 0
            }
        );
    }

    #[test]
    fn brand_new_contractors_rank_in_the_first_bracket() {
        let target = contractor("t", 0.0, &["plumbing"]);
        let peer = contractor("p", 2.0, &["plumbing"]);
        let scored = [
            ScoredContractor {
                record: &target,
                score: 40.0,
            },
            ScoredContractor {
                record: &peer,
                score: 90.0,
            },
        ];
        let ranking = peer_ranking(&target, 40.0, &scored);
        assert_eq!(ranking.rank, 2);
        assert_eq!(ranking.total, 2);
        assert_eq!(ranking.percentile, 50);
    }

    #[test]
    fn boundary_years_join_adjacent_cohorts() {
        // A 3-year peer sits in both the 1-3 and 3-6 brackets.
        let junior_target = contractor("t1", 2.0, &["hvac"]);
        let mid_target = contractor("t2", 5.0, &["hvac"]);
        let boundary = contractor("b", 3.0, &["hvac"]);

        let junior_set = [
            ScoredContractor {
                record: &junior_target,
                score: 70.0,
            },
            ScoredContractor {
                record: &boundary,
                score: 80.0,
            },
        ];
        let mid_set = [
            ScoredContractor {
                record: &mid_target,
                score: 70.0,
            },
            ScoredContractor {
                record: &boundary,
                score: 80.0,
            },
        ];

        assert_eq!(peer_ranking(&junior_target, 70.0, &junior_set).total, 2);
        assert_eq!(peer_ranking(&mid_target, 70.0, &mid_set).total, 2);
    }
}
