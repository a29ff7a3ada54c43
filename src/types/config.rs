use crate::error::FlipscoreError;
use serde::Deserialize;
use std::collections::HashMap;

/// Weights applied to the eight base sub-scores. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BaseWeights {
    pub reviews: f64,
    pub on_time: f64,
    pub budget: f64,
    pub safety: f64,
    pub communication: f64,
    pub risk: f64,
    pub insurance: f64,
    pub experience: f64,
}

impl Default for BaseWeights {
    fn default() -> Self {
        Self {
            reviews: 0.25,
            on_time: 0.20,
            budget: 0.10,
            safety: 0.10,
            communication: 0.10,
            risk: 0.10,
            insurance: 0.05,
            experience: 0.10,
        }
    }
}

impl BaseWeights {
    pub fn sum(&self) -> f64 {
        self.reviews
            + self.on_time
            + self.budget
            + self.safety
            + self.communication
            + self.risk
            + self.insurance
            + self.experience
    }

    fn values(&self) -> [f64; 8] {
        [
            self.reviews,
            self.on_time,
            self.budget,
            self.safety,
            self.communication,
            self.risk,
            self.insurance,
            self.experience,
        ]
    }
}

/// Weights for the permit-enhanced blend. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PermitWeights {
    pub base: f64,
    pub experience: f64,
    pub risk: f64,
    pub insurance: f64,
    pub permits: f64,
    pub specialization: f64,
    pub correlation: f64,
    pub verification: f64,
}

impl Default for PermitWeights {
    fn default() -> Self {
        Self {
            base: 0.20,
            experience: 0.15,
            risk: 0.10,
            insurance: 0.05,
            permits: 0.25,
            specialization: 0.15,
            correlation: 0.05,
            verification: 0.05,
        }
    }
}

impl PermitWeights {
    pub fn sum(&self) -> f64 {
        self.base
            + self.experience
            + self.risk
            + self.insurance
            + self.permits
            + self.specialization
            + self.correlation
            + self.verification
    }

    fn values(&self) -> [f64; 8] {
        [
            self.base,
            self.experience,
            self.risk,
            self.insurance,
            self.permits,
            self.specialization,
            self.correlation,
            self.verification,
        ]
    }
}

/// Optional `flipscore.toml` overrides for the scoring blends.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringConfig {
    pub weights: Option<WeightTables>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeightTables {
    pub base: Option<HashMap<String, f64>>,
    pub permit: Option<HashMap<String, f64>>,
}

const ALLOWED_BASE_KEYS: [&str; 8] = [
    "reviews",
    "on_time",
    "budget",
    "safety",
    "communication",
    "risk",
    "insurance",
    "experience",
];

const ALLOWED_PERMIT_KEYS: [&str; 8] = [
    "base",
    "experience",
    "risk",
    "insurance",
    "permits",
    "specialization",
    "correlation",
    "verification",
];

impl ScoringConfig {
    pub fn base_weights(&self) -> BaseWeights {
        let defaults = BaseWeights::default();
        match self.weights.as_ref().and_then(|tables| tables.base.as_ref()) {
            Some(overrides) => BaseWeights {
                reviews: *overrides.get("reviews").unwrap_or(&defaults.reviews),
                on_time: *overrides.get("on_time").unwrap_or(&defaults.on_time),
                budget: *overrides.get("budget").unwrap_or(&defaults.budget),
                safety: *overrides.get("safety").unwrap_or(&defaults.safety),
                communication: *overrides
                    .get("communication")
                    .unwrap_or(&defaults.communication),
                risk: *overrides.get("risk").unwrap_or(&defaults.risk),
                insurance: *overrides.get("insurance").unwrap_or(&defaults.insurance),
                experience: *overrides.get("experience").unwrap_or(&defaults.experience),
            },
            None => defaults,
        }
    }

    pub fn permit_weights(&self) -> PermitWeights {
        let defaults = PermitWeights::default();
        match self
            .weights
            .as_ref()
            .and_then(|tables| tables.permit.as_ref())
        {
            Some(overrides) => PermitWeights {
                base: *overrides.get("base").unwrap_or(&defaults.base),
                experience: *overrides.get("experience").unwrap_or(&defaults.experience),
                risk: *overrides.get("risk").unwrap_or(&defaults.risk),
                insurance: *overrides.get("insurance").unwrap_or(&defaults.insurance),
                permits: *overrides.get("permits").unwrap_or(&defaults.permits),
                specialization: *overrides
                    .get("specialization")
                    .unwrap_or(&defaults.specialization),
                correlation: *overrides
                    .get("correlation")
                    .unwrap_or(&defaults.correlation),
                verification: *overrides
                    .get("verification")
                    .unwrap_or(&defaults.verification),
            },
            None => defaults,
        }
    }

    /// Fold a higher-precedence config layer into this one. Overrides
    /// stack key by key within each weight table, later layers winning.
    pub fn merge_overrides(&mut self, overlay: ScoringConfig) {
        let Some(overlay_tables) = overlay.weights else {
            return;
        };
        let tables = self.weights.get_or_insert_with(WeightTables::default);
        merge_weight_table(&mut tables.base, overlay_tables.base);
        merge_weight_table(&mut tables.permit, overlay_tables.permit);
    }

    pub fn validate(&self) -> Result<(), FlipscoreError> {
        if let Some(tables) = &self.weights {
            if let Some(base) = &tables.base {
                reject_unknown_keys("weights.base", base, &ALLOWED_BASE_KEYS)?;
            }
            if let Some(permit) = &tables.permit {
                reject_unknown_keys("weights.permit", permit, &ALLOWED_PERMIT_KEYS)?;
            }
        }

        check_weight_set("weights.base", &self.base_weights().values())?;
        check_weight_set("weights.permit", &self.permit_weights().values())?;
        Ok(())
    }
}

fn merge_weight_table(
    slot: &mut Option<HashMap<String, f64>>,
    overlay: Option<HashMap<String, f64>>,
) {
    if let Some(overlay) = overlay {
        slot.get_or_insert_with(HashMap::new).extend(overlay);
    }
}

fn reject_unknown_keys(
    table: &str,
    overrides: &HashMap<String, f64>,
    allowed: &[&str],
) -> Result<(), FlipscoreError> {
    let unknown = overrides
        .keys()
        .filter(|key| !allowed.contains(&key.as_str()))
        .cloned()
        .collect::<Vec<_>>();
    if !unknown.is_empty() {
        return Err(FlipscoreError::ConfigParse(format!(
            "{table} contains unknown key(s): {}",
            unknown.join(", ")
        )));
    }
    Ok(())
}

fn check_weight_set(table: &str, values: &[f64]) -> Result<(), FlipscoreError> {
    if values.iter().any(|weight| !(0.0..=1.0).contains(weight)) {
        return Err(FlipscoreError::ConfigParse(format!(
            "{table} values must be between 0.0 and 1.0"
        )));
    }
    let sum: f64 = values.iter().sum();
    if (sum - 1.0).abs() > 0.001 {
        return Err(FlipscoreError::ConfigParse(format!(
            "{table} must sum to 1.0 (found {sum:.3})"
        )));
    }
    Ok(())
}
