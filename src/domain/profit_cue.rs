//! Short-lived "profit" highlight shown when an offer turns profitable.
//!
//! Every scheduled clear carries the generation it was issued for. Any newer
//! observation or a teardown bumps the generation, so a clear that fires late
//! finds itself stale and leaves the cue alone.

use std::time::Duration;

use super::fare::FareEvaluation;

pub const PROFIT_CUE_DURATION: Duration = Duration::from_millis(600);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct CueKey {
    profitable: bool,
    cost_bits: u64,
}

impl From<&FareEvaluation> for CueKey {
    fn from(evaluation: &FareEvaluation) -> Self {
        Self {
            profitable: evaluation.is_profitable,
            cost_bits: evaluation.customer_cost_per_mile.to_bits(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CueTransition {
    /// Same inputs as last time; keep whatever is pending.
    Unchanged,
    /// Drop any pending clear and schedule a new one.
    Schedule { generation: u64, after: Duration },
    /// Drop any pending clear; nothing new to schedule.
    Cancel,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfitCue {
    active: bool,
    generation: u64,
    last_key: Option<CueKey>,
}

impl ProfitCue {
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn observe(&mut self, evaluation: &FareEvaluation) -> CueTransition {
        let key = CueKey::from(evaluation);
        if self.last_key == Some(key) {
            return CueTransition::Unchanged;
        }
        self.last_key = Some(key);
        self.generation += 1;

        if evaluation.is_profitable && evaluation.is_computed() {
            self.active = true;
            CueTransition::Schedule {
                generation: self.generation,
                after: PROFIT_CUE_DURATION,
            }
        } else {
            self.active = false;
            CueTransition::Cancel
        }
    }

    /// Clears the cue if `generation` is still the latest one. Returns whether
    /// anything changed.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.active {
            return false;
        }
        self.active = false;
        true
    }

    pub fn teardown(&mut self) {
        self.generation += 1;
        self.active = false;
    }
}
