use rand::Rng;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IntervalMode {
    #[default]
    Fixed,
    Random,
}

impl IntervalMode {
    pub fn as_str(self) -> &'static str {
        match self {
            IntervalMode::Fixed => "fixed",
            IntervalMode::Random => "random",
        }
    }
}

fn default_secs() -> f64 { 1.0 }

/// Spacing between clicks. Field names follow the `/api/start` body.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntervalConfig {
    #[serde(default)]
    pub mode: IntervalMode,
    #[serde(rename = "min_interval", default = "default_secs")]
    pub min_secs: f64,
    #[serde(rename = "max_interval", default = "default_secs")]
    pub max_secs: f64,
}

impl Default for IntervalConfig {
    fn default() -> Self {
        Self { mode: IntervalMode::Fixed, min_secs: default_secs(), max_secs: default_secs() }
    }
}

impl IntervalConfig {
    pub fn new(mode: IntervalMode, min_secs: f64, max_secs: f64) -> Self {
        Self { mode, min_secs, max_secs }
    }

    /// Seconds to wait before the next click.
    ///
    /// Fixed mode always yields `min_secs`; `max_secs` is ignored. Random mode draws
    /// uniformly from the bounds, swapping them first when they are inverted.
    pub fn next_delay<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match self.mode {
            IntervalMode::Fixed => self.min_secs,
            IntervalMode::Random => {
                let (lo, hi) = if self.min_secs <= self.max_secs {
                    (self.min_secs, self.max_secs)
                } else { (self.max_secs, self.min_secs) };
                // Degenerate or non-finite ranges would panic inside the sampler.
                if lo >= hi || !(hi - lo).is_finite() { return lo; }
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Negative and NaN delays collapse to zero; huge ones saturate.
pub fn sleep_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 { return Duration::ZERO; }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_fixed_ignores_max() {
        let cfg = IntervalConfig::new(IntervalMode::Fixed, 2.0, 100.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(cfg.next_delay(&mut rng), 2.0);
        }
    }

    #[test]
    fn test_random_equal_bounds() {
        let cfg = IntervalConfig::new(IntervalMode::Random, 1.0, 1.0);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(cfg.next_delay(&mut rng), 1.0);
        }
    }

    #[test]
    fn test_random_within_bounds() {
        let cfg = IntervalConfig::new(IntervalMode::Random, 0.5, 1.5);
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<f64> = (0..1000).map(|_| cfg.next_delay(&mut rng)).collect();
        assert!(draws.iter().all(|d| (0.5..=1.5).contains(d)));
        // Not stuck on one value
        assert!(draws.iter().any(|d| *d != draws[0]));
    }

    #[test]
    fn test_random_inverted_bounds_are_swapped() {
        let cfg = IntervalConfig::new(IntervalMode::Random, 3.0, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1000 {
            let d = cfg.next_delay(&mut rng);
            assert!((1.0..=3.0).contains(&d), "draw {d} outside swapped range");
        }
    }

    #[test]
    fn test_random_nan_bound_does_not_panic() {
        let cfg = IntervalConfig::new(IntervalMode::Random, f64::NAN, 1.0);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(cfg.next_delay(&mut rng), 1.0);
    }

    #[test]
    fn test_sleep_duration() {
        assert_eq!(sleep_duration(-1.0), Duration::ZERO);
        assert_eq!(sleep_duration(f64::NAN), Duration::ZERO);
        assert_eq!(sleep_duration(0.25), Duration::from_millis(250));
        assert_eq!(sleep_duration(f64::INFINITY), Duration::MAX);
    }

    #[test]
    fn test_config_defaults_from_json() {
        let cfg: IntervalConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, IntervalConfig::default());

        let cfg: IntervalConfig =
            serde_json::from_str(r#"{"mode":"random","min_interval":0.2,"max_interval":0.9}"#).unwrap();
        assert_eq!(cfg, IntervalConfig::new(IntervalMode::Random, 0.2, 0.9));

        assert!(serde_json::from_str::<IntervalConfig>(r#"{"mode":"burst"}"#).is_err());
    }
}
