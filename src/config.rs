//! Construction options for [`Prng`](crate::generator::Prng).

use serde::Deserialize;

/// How a generator should be built.
///
/// Deserializes from partial input; missing fields take their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct PrngConfig {
    /// Starting seed. `None` selects unseeded mode.
    pub seed: Option<f64>,
    /// Treat a seed of exactly zero as "no seed". Disabling this makes 0.0
    /// a usable seed (it is a multiple of pi, so it starts at 0.1).
    pub zero_seed_unseeded: bool,
}

impl Default for PrngConfig {
    fn default() -> Self {
        Self {
            seed: None,
            zero_seed_unseeded: true,
        }
    }
}

impl PrngConfig {
    pub fn seeded(seed: f64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// The seed that will actually be used, after the zero/NaN policy.
    pub(crate) fn effective_seed(&self) -> Option<f64> {
        match self.seed {
            Some(s) if s.is_nan() => None,
            Some(s) if s == 0.0 && self.zero_seed_unseeded => None,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unseeded() {
        let cfg = PrngConfig::default();
        assert_eq!(cfg.seed, None);
        assert!(cfg.zero_seed_unseeded);
        assert_eq!(cfg.effective_seed(), None);
    }

    #[test]
    fn test_zero_policy() {
        assert_eq!(PrngConfig::seeded(0.0).effective_seed(), None);
        assert_eq!(PrngConfig::seeded(-0.0).effective_seed(), None);

        let cfg = PrngConfig {
            seed: Some(0.0),
            zero_seed_unseeded: false,
        };
        assert_eq!(cfg.effective_seed(), Some(0.0));
    }

    #[test]
    fn test_nan_always_unseeded() {
        let cfg = PrngConfig {
            seed: Some(f64::NAN),
            zero_seed_unseeded: false,
        };
        assert_eq!(cfg.effective_seed(), None);
    }

    #[test]
    fn test_deserialize_partial() {
        let cfg: PrngConfig = serde_json::from_str(r#"{ "seed": 42.5 }"#).unwrap();
        assert_eq!(cfg.seed, Some(42.5));
        assert!(cfg.zero_seed_unseeded);

        let cfg: PrngConfig = serde_json::from_str(r#"{ "zero_seed_unseeded": false }"#).unwrap();
        assert_eq!(cfg.seed, None);
        assert!(!cfg.zero_seed_unseeded);

        let cfg: PrngConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(cfg, PrngConfig::default());
    }
}
