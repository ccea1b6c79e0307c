use serde::{Deserialize, Serialize};

/// A one-off cash shock applied during month-end processing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifeEvent {
    pub name: String,
    /// Signed cash impact
    pub impact: f64,
    /// Selection weight within the catalog
    pub probability: f64,
}

impl LifeEvent {
    pub fn new(name: impl Into<String>, impact: f64, probability: f64) -> Self {
        Self {
            name: name.into(),
            impact,
            probability,
        }
    }
}

/// Default event table. Weights sum to 0.84; the remaining 0.16 of the draw
/// space produces no event even after the monthly gate has passed.
#[must_use]
pub fn default_life_events() -> Vec<LifeEvent> {
    vec![
        LifeEvent::new("Medical Emergency", -25_000.0, 0.10),
        LifeEvent::new("Performance Bonus", 30_000.0, 0.12),
        LifeEvent::new("Car Repair", -15_000.0, 0.12),
        LifeEvent::new("Tax Refund", 10_000.0, 0.10),
        LifeEvent::new("Family Wedding", -20_000.0, 0.10),
        LifeEvent::new("Freelance Project", 20_000.0, 0.12),
        LifeEvent::new("Appliance Breakdown", -8_000.0, 0.10),
        LifeEvent::new("Inheritance", 50_000.0, 0.08),
    ]
}
