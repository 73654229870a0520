use crate::species::WsParams;

/// Standard weight (Ws) in grams for a fish of the given length:
/// `10^(intercept + slope * log10(length))`.
///
/// Undefined below the species' minimum applicable length. Species lookup
/// happens in the caller; an unknown species simply has no `WsParams` and
/// therefore no standard weight.
pub fn standard_weight(params: &WsParams, length_mm: f64) -> Option<f64> {
    if !(length_mm >= params.min_length_mm) {
        return None;
    }
    Some(10f64.powf(params.intercept + params.slope * length_mm.log10()))
}

/// Relative weight (Wr): observed weight as a percentage of the standard
/// weight. Undefined unless both are present.
pub fn relative_weight(weight_g: Option<f64>, standard_weight_g: Option<f64>) -> Option<f64> {
    match (weight_g, standard_weight_g) {
        (Some(w), Some(ws)) if ws > 0.0 => Some(w / ws * 100.0),
        _ => None,
    }
}

/// Mean relative weight over the defined values only.
///
/// Reports 0.0 when no value is defined. Callers that need to tell "no
/// data" apart from a computed mean must inspect the per-row values.
pub fn mean_relative_weight<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    let mut sum = 0.0;
    let mut n = 0usize;
    for wr in values.into_iter().flatten() {
        sum += wr;
        n += 1;
    }
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLEYE: WsParams = WsParams {
        intercept: -5.453,
        slope: 3.180,
        min_length_mm: 250.0,
    };

    #[test]
    fn undefined_below_minimum_length() {
        assert_eq!(standard_weight(&WALLEYE, 100.0), None);
        assert_eq!(standard_weight(&WALLEYE, 249.9), None);
        assert!(standard_weight(&WALLEYE, 250.0).is_some());
    }

    #[test]
    fn walleye_standard_weight_at_300mm() {
        // 10^(-5.453 + 3.180 * log10(300)) ≈ 265.6 g
        let ws = standard_weight(&WALLEYE, 300.0).unwrap();
        let expected = 10f64.powf(-5.453 + 3.180 * 300f64.log10());
        assert!((ws - expected).abs() < 1e-9);
        assert!((ws - 265.6).abs() < 0.1);
    }

    #[test]
    fn nan_length_has_no_standard_weight() {
        assert_eq!(standard_weight(&WALLEYE, f64::NAN), None);
    }

    #[test]
    fn relative_weight_needs_both_values() {
        let ws = standard_weight(&WALLEYE, 300.0);
        let wr = relative_weight(Some(265.6), ws).unwrap();
        assert!((wr - 100.0).abs() < 0.1);
        assert_eq!(relative_weight(None, ws), None);
        assert_eq!(relative_weight(Some(265.6), None), None);
    }

    #[test]
    fn mean_skips_undefined_values() {
        let mean = mean_relative_weight(vec![Some(90.0), None, Some(110.0)]);
        assert_eq!(mean, 100.0);
    }

    #[test]
    fn mean_of_all_undefined_reports_zero() {
        assert_eq!(mean_relative_weight(vec![None, None]), 0.0);
        assert_eq!(mean_relative_weight(Vec::new()), 0.0);
    }
}
