//! Life-event generator
//!
//! Selection is a cumulative-weight walk over the catalog. It only runs after
//! the monthly gate passes, so two independent checks stand between a month
//! and an event: the gate (30% by default) and the residual weight left
//! uncovered by the catalog (16% by default).

use crate::config::LifeEventTable;
use crate::model::LifeEvent;
use crate::random::RandomSource;

/// Walk the catalog with one uniform draw; `None` when the draw lands past the
/// cumulative weight of every event.
pub fn roll_life_event<'a, R: RandomSource + ?Sized>(
    events: &'a [LifeEvent],
    rng: &mut R,
) -> Option<&'a LifeEvent> {
    let draw = rng.unit();
    let mut cumulative = 0.0;
    for event in events {
        cumulative += event.probability;
        if cumulative >= draw {
            return Some(event);
        }
    }
    None
}

/// Gate check followed by the weighted roll. Consumes one draw when the gate
/// fails and two when it passes.
pub fn roll_month_event<R: RandomSource + ?Sized>(
    table: &LifeEventTable,
    rng: &mut R,
) -> Option<LifeEvent> {
    if !rng.chance(table.gate_probability) {
        return None;
    }
    let event = roll_life_event(&table.events, rng).cloned();
    if event.is_none() {
        tracing::debug!("life event gate passed but draw fell past the catalog weights");
    }
    event
}
