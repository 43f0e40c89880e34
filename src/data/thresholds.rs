//! Operation range thresholds and value classification.
//!
//! A signal is watched against two nested bands: a hard *limit* band and a
//! softer *tolerance* band inside it. Each side of each band is optional;
//! a missing side simply disables that check. Tolerance sides may be given
//! as absolute values or as a percentage of the limit span.

use std::str::FromStr;

use anyhow::{bail, Result};
use serde::Deserialize;

/// A tolerance bound given either as an absolute value or as a
/// percentage of the limit span (e.g. `12.5` or `"10%"`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "BoundSpecRepr")]
pub enum BoundSpec {
    Absolute(f64),
    Percent(f64),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BoundSpecRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<BoundSpecRepr> for BoundSpec {
    type Error = String;

    fn try_from(repr: BoundSpecRepr) -> Result<Self, Self::Error> {
        match repr {
            BoundSpecRepr::Number(v) => Ok(BoundSpec::Absolute(v)),
            BoundSpecRepr::Text(s) => s.parse().map_err(|e| format!("{e}")),
        }
    }
}

impl FromStr for BoundSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            bail!("empty bound");
        }
        if let Some(pct) = s.strip_suffix('%') {
            let value: f64 = pct.trim().parse()?;
            Ok(BoundSpec::Percent(value))
        } else {
            Ok(BoundSpec::Absolute(s.parse()?))
        }
    }
}

/// Raw threshold configuration as given at construction time.
///
/// This is the unresolved form; [`Bands::derive`] turns it into concrete
/// numeric bounds against the configured y display range.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ThresholdSpec {
    pub enabled: bool,
    pub limit_min: Option<f64>,
    pub limit_max: Option<f64>,
    pub tolerance_min: Option<BoundSpec>,
    pub tolerance_max: Option<BoundSpec>,
}

/// Severity of the latest sample relative to the bands.
///
/// Ordered by severity so `max()` picks the worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Classification {
    Nominal,
    Tolerance,
    Limit,
}

impl Classification {
    /// Returns a short symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Classification::Nominal => "OK",
            Classification::Tolerance => "TOL",
            Classification::Limit => "LIM",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Nominal => "Nominal",
            Classification::Tolerance => "Tolerance",
            Classification::Limit => "Limit",
        }
    }
}

/// Resolved numeric bounds, computed once at construction.
///
/// Any side may be `None`, meaning that check is disabled. When the whole
/// feature is disabled (`enabled == false`) every side is `None` and every
/// value classifies as [`Classification::Nominal`].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bands {
    pub enabled: bool,
    pub limit_min: Option<f64>,
    pub limit_max: Option<f64>,
    pub tolerance_min: Option<f64>,
    pub tolerance_max: Option<f64>,
}

impl Bands {
    /// Resolve a [`ThresholdSpec`] into concrete bounds.
    ///
    /// The limit span used for percentage tolerances is `limit_max -
    /// limit_min` when both are set. With only one limit side set, the
    /// missing side is substituted from the y display range, so a
    /// one-sided limit still yields a usable span. A tolerance side that
    /// cannot be derived (missing spec, missing matching limit, zero
    /// span) is left unset rather than reported as an error.
    pub fn derive(spec: &ThresholdSpec, y_min: f64, y_max: f64) -> Self {
        if !spec.enabled {
            return Self::default();
        }

        let limit_min = spec.limit_min;
        let limit_max = spec.limit_max;

        let span = match (limit_min, limit_max) {
            (Some(lo), Some(hi)) => hi - lo,
            (Some(lo), None) => y_max - lo,
            (None, Some(hi)) => hi - y_min,
            (None, None) => 0.0,
        };

        let tolerance_max = resolve_tolerance(spec.tolerance_max, limit_max, span);
        let tolerance_min = resolve_tolerance(spec.tolerance_min, limit_min, -span);

        Self {
            enabled: true,
            limit_min,
            limit_max,
            tolerance_min,
            tolerance_max,
        }
    }

    /// Classify a value against the bands.
    ///
    /// The limit check takes precedence: a value outside both bands
    /// reports [`Classification::Limit`], never both.
    pub fn classify(&self, value: f64) -> Classification {
        let above = |bound: Option<f64>| bound.is_some_and(|b| value > b);
        let below = |bound: Option<f64>| bound.is_some_and(|b| value < b);

        if above(self.limit_max) || below(self.limit_min) {
            Classification::Limit
        } else if above(self.tolerance_max) || below(self.tolerance_min) {
            Classification::Tolerance
        } else {
            Classification::Nominal
        }
    }
}

/// Resolve one tolerance side.
///
/// `signed_span` is positive for the max side and negative for the min
/// side, so a percentage always moves the bound inward from its limit.
fn resolve_tolerance(spec: Option<BoundSpec>, limit: Option<f64>, signed_span: f64) -> Option<f64> {
    let spec = spec?;
    let limit = limit?;
    if signed_span == 0.0 {
        return None;
    }
    match spec {
        BoundSpec::Percent(pct) => Some(limit - signed_span * pct / 100.0),
        BoundSpec::Absolute(v) => Some(v),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn enabled_spec(
        limit_min: Option<f64>,
        limit_max: Option<f64>,
        tolerance_min: Option<BoundSpec>,
        tolerance_max: Option<BoundSpec>,
    ) -> ThresholdSpec {
        ThresholdSpec {
            enabled: true,
            limit_min,
            limit_max,
            tolerance_min,
            tolerance_max,
        }
    }

    #[test]
    fn test_parse_bound_spec() {
        assert_eq!("42.5".parse::<BoundSpec>().unwrap(), BoundSpec::Absolute(42.5));
        assert_eq!("10%".parse::<BoundSpec>().unwrap(), BoundSpec::Percent(10.0));
        assert_eq!(" 7.5% ".parse::<BoundSpec>().unwrap(), BoundSpec::Percent(7.5));
        assert!("".parse::<BoundSpec>().is_err());
        assert!("abc".parse::<BoundSpec>().is_err());
    }

    #[test]
    fn test_percentage_tolerance_from_full_span() {
        let spec = enabled_spec(
            Some(0.0),
            Some(100.0),
            Some(BoundSpec::Percent(10.0)),
            Some(BoundSpec::Percent(10.0)),
        );
        let bands = Bands::derive(&spec, 0.0, 100.0);

        assert_eq!(bands.tolerance_max, Some(90.0));
        assert_eq!(bands.tolerance_min, Some(10.0));
    }

    #[test]
    fn test_absolute_tolerance_used_as_is() {
        let spec = enabled_spec(
            Some(0.0),
            Some(100.0),
            Some(BoundSpec::Absolute(15.0)),
            Some(BoundSpec::Absolute(85.0)),
        );
        let bands = Bands::derive(&spec, 0.0, 100.0);

        assert_eq!(bands.tolerance_min, Some(15.0));
        assert_eq!(bands.tolerance_max, Some(85.0));
    }

    #[test]
    fn test_one_sided_limit_span_falls_back_to_y_range() {
        // Only limit_min set: span = y_max - limit_min = 80
        let spec = enabled_spec(Some(20.0), None, Some(BoundSpec::Percent(10.0)), None);
        let bands = Bands::derive(&spec, 0.0, 100.0);
        assert_eq!(bands.tolerance_min, Some(28.0));

        // Only limit_max set: span = limit_max - y_min = 90
        let spec = enabled_spec(None, Some(90.0), None, Some(BoundSpec::Percent(10.0)));
        let bands = Bands::derive(&spec, 0.0, 100.0);
        assert_eq!(bands.tolerance_max, Some(81.0));
    }

    #[test]
    fn test_tolerance_disabled_without_matching_limit() {
        let spec = enabled_spec(None, Some(100.0), Some(BoundSpec::Percent(10.0)), None);
        let bands = Bands::derive(&spec, 0.0, 100.0);
        assert_eq!(bands.tolerance_min, None);
    }

    #[test]
    fn test_tolerance_disabled_on_zero_span() {
        let spec = enabled_spec(
            Some(50.0),
            Some(50.0),
            Some(BoundSpec::Percent(10.0)),
            Some(BoundSpec::Percent(10.0)),
        );
        let bands = Bands::derive(&spec, 0.0, 100.0);
        assert_eq!(bands.tolerance_min, None);
        assert_eq!(bands.tolerance_max, None);
    }

    #[test]
    fn test_disabled_spec_yields_empty_bands() {
        let spec = ThresholdSpec {
            enabled: false,
            limit_min: Some(0.0),
            limit_max: Some(100.0),
            tolerance_min: Some(BoundSpec::Percent(10.0)),
            tolerance_max: Some(BoundSpec::Percent(10.0)),
        };
        let bands = Bands::derive(&spec, 0.0, 100.0);

        assert!(!bands.enabled);
        assert_eq!(bands.classify(1e9), Classification::Nominal);
        assert_eq!(bands.classify(-1e9), Classification::Nominal);
    }

    #[test]
    fn test_classify_limit_wins_over_tolerance() {
        let spec = enabled_spec(
            Some(0.0),
            Some(100.0),
            Some(BoundSpec::Percent(10.0)),
            Some(BoundSpec::Percent(10.0)),
        );
        let bands = Bands::derive(&spec, 0.0, 100.0);

        // Outside both bands: reported as Limit, never Tolerance
        assert_eq!(bands.classify(101.0), Classification::Limit);
        assert_eq!(bands.classify(-1.0), Classification::Limit);
    }

    #[test]
    fn test_classify_scenario_from_percent_tolerance() {
        let spec = enabled_spec(Some(0.0), Some(100.0), None, Some(BoundSpec::Percent(10.0)));
        let bands = Bands::derive(&spec, 0.0, 100.0);

        assert_eq!(bands.tolerance_max, Some(90.0));
        assert_eq!(bands.classify(95.0), Classification::Tolerance);
        assert_eq!(bands.classify(101.0), Classification::Limit);
        assert_eq!(bands.classify(92.0), Classification::Tolerance);
        assert_eq!(bands.classify(50.0), Classification::Nominal);
    }

    #[test]
    fn test_classify_boundary_values_are_nominal() {
        let spec = enabled_spec(Some(10.0), Some(90.0), None, None);
        let bands = Bands::derive(&spec, 0.0, 100.0);

        // Checks are strict: sitting exactly on a bound is not a breach
        assert_eq!(bands.classify(90.0), Classification::Nominal);
        assert_eq!(bands.classify(10.0), Classification::Nominal);
        assert_eq!(bands.classify(90.001), Classification::Limit);
        assert_eq!(bands.classify(9.999), Classification::Limit);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Classification::Limit > Classification::Tolerance);
        assert!(Classification::Tolerance > Classification::Nominal);
    }
}
