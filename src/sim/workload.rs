use crate::core::state::Ticks;
use rand::prelude::*;

/// Shape of a randomly generated process mix.
#[derive(Debug, Clone)]
pub struct WorkloadSpec {
    pub ticks: Ticks,
    pub p_arrival: f64,
    pub p_short: f64,
    pub short_burst: Ticks,
    pub long_burst: Ticks,
    pub seed: u64,
}

impl Default for WorkloadSpec {
    fn default() -> Self {
        Self {
            ticks: 20,
            p_arrival: 0.3,
            p_short: 0.3,
            short_burst: 2,
            long_burst: 6,
            seed: 0,
        }
    }
}

/// One Bernoulli trial per tick decides whether a process arrives, a second
/// whether it is short or long. Returns `(arrival, burst)` pairs in arrival
/// order.
pub fn bernoulli(spec: &WorkloadSpec) -> Vec<(Ticks, Ticks)> {
    let mut rng = StdRng::seed_from_u64(spec.seed);
    let mut arrivals = Vec::new();

    for t in 0..spec.ticks {
        if rng.random::<f64>() < spec.p_arrival {
            let burst = if rng.random::<f64>() < spec.p_short {
                spec.short_burst
            } else {
                spec.long_burst
            };
            arrivals.push((t, burst.max(1)));
        }
    }

    arrivals
}
