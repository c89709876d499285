//! Method selectors accepted by the dispatcher

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuadratureError;

/// Quadrature rule selected by the dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Left rectangle rule (`"left-square"`)
    LeftSquare,
    /// Right rectangle rule (`"right-square"`)
    RightSquare,
    /// Trapezoidal rule (`"trapezoidal"`)
    Trapezoidal,
    /// Simpson's rule (`"simpson"`)
    Simpson,
}

impl Method {
    /// Every selectable method
    pub const ALL: [Method; 4] = [
        Method::LeftSquare,
        Method::RightSquare,
        Method::Trapezoidal,
        Method::Simpson,
    ];

    /// Selector spelling of the method
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::LeftSquare => "left-square",
            Method::RightSquare => "right-square",
            Method::Trapezoidal => "trapezoidal",
            Method::Simpson => "simpson",
        }
    }

    /// Whether the method has a step-halving form
    ///
    /// Only the rectangle rules do. The dispatcher evaluates the
    /// trapezoidal and Simpson rules at fixed step even when precision mode
    /// is requested.
    pub fn supports_precision(&self) -> bool {
        matches!(self, Method::LeftSquare | Method::RightSquare)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = QuadratureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Method::ALL
            .into_iter()
            .find(|method| method.as_str() == s)
            .ok_or_else(|| QuadratureError::UnknownMethod(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selectors() {
        for method in Method::ALL {
            assert_eq!(method.as_str().parse::<Method>().unwrap(), method);
            assert_eq!(method.to_string(), method.as_str());
        }
    }

    #[test]
    fn test_unknown_selector() {
        let err = "midpoint".parse::<Method>().unwrap_err();
        assert!(matches!(err, QuadratureError::UnknownMethod(ref s) if s == "midpoint"));

        // Selectors are case-sensitive
        assert!("Simpson".parse::<Method>().is_err());
    }

    #[test]
    fn test_serde_matches_selector() {
        let json = serde_json::to_string(&Method::RightSquare).unwrap();
        assert_eq!(json, "\"right-square\"");
        let method: Method = serde_json::from_str("\"trapezoidal\"").unwrap();
        assert_eq!(method, Method::Trapezoidal);
    }

    #[test]
    fn test_precision_support() {
        assert!(Method::LeftSquare.supports_precision());
        assert!(Method::RightSquare.supports_precision());
        assert!(!Method::Trapezoidal.supports_precision());
        assert!(!Method::Simpson.supports_precision());
    }
}
