use std::f64::consts;

/// Golden ratio, (1 + sqrt(5)) / 2.
const PHI: f64 = 1.618033988749895;
/// Euler-Mascheroni constant.
const EULER_GAMMA: f64 = 0.5772156649015329;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Constant {
    Pi,
    E,
    Phi,
    Gamma,
    Inf,
    Nan,
}

impl Constant {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            "phi" => Some(Constant::Phi),
            "gamma" => Some(Constant::Gamma),
            "inf" => Some(Constant::Inf),
            "nan" => Some(Constant::Nan),
            _ => None,
        }
    }

    pub fn value(&self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
            Constant::Phi => PHI,
            Constant::Gamma => EULER_GAMMA,
            Constant::Inf => f64::INFINITY,
            Constant::Nan => f64::NAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_values() {
        assert_eq!(Constant::from_name("pi").unwrap().value(), consts::PI);
        assert_eq!(Constant::from_name("e").unwrap().value(), consts::E);
        assert!((Constant::Phi.value() - (1.0 + 5f64.sqrt()) / 2.0).abs() < 1e-15);
        assert!(Constant::Inf.value().is_infinite());
        assert!(Constant::Nan.value().is_nan());
    }

    #[test]
    fn test_unknown_constant() {
        assert_eq!(Constant::from_name("tau"), None);
        assert_eq!(Constant::from_name("PI"), None);
    }
}
