use rand::Rng;
use serde::Serialize;

/// Dashboard counters refreshed on a fixed interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveCounters {
    pub active_gigs: u32,
    pub applications_today: u32,
    pub interviews_scheduled: u32,
    pub hires_this_month: u32,
}

impl Default for LiveCounters {
    fn default() -> Self {
        Self {
            active_gigs: 12,
            applications_today: 48,
            interviews_scheduled: 7,
            hires_this_month: 3,
        }
    }
}

const MIN_DELTA: i64 = -1;
const MAX_DELTA: i64 = 3;

impl LiveCounters {
    /// Next snapshot; every counter moves by a delta in `-1..=3` and never drops below zero.
    pub fn tick<R: Rng>(&self, rng: &mut R) -> Self {
        let mut step = |value: u32| -> u32 {
            let delta = rng.gen_range(MIN_DELTA..=MAX_DELTA);
            let next = i64::from(value).saturating_add(delta).max(0);
            u32::try_from(next).unwrap_or(u32::MAX)
        };

        Self {
            active_gigs: step(self.active_gigs),
            applications_today: step(self.applications_today),
            interviews_scheduled: step(self.interviews_scheduled),
            hires_this_month: step(self.hires_this_month),
        }
    }
}

pub fn tick<R: Rng>(state: &LiveCounters, rng: &mut R) -> LiveCounters {
    state.tick(rng)
}
