use argminmax::ArgMinMax;

/// Indices of the lowest and highest value, or `None` for an empty slice.
pub(crate) fn min_max_indices(values: &[f64]) -> Option<(usize, usize)> {
    if values.is_empty() {
        return None;
    }
    Some(values.argminmax())
}

/// Widens `[min, max]` by `pad_pct` of its span on both sides. A flat series gets a 1% band.
pub(crate) fn padded_range(min: f64, max: f64, pad_pct: f64) -> (f64, f64) {
    let span = max - min;
    let pad = if span > f64::EPSILON {
        span * pad_pct
    } else {
        (max.abs() * 0.01).max(f64::EPSILON)
    };
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_extremes() {
        let prices = [3.0, 1.5, 9.25, 4.0];
        assert_eq!(min_max_indices(&prices), Some((1, 2)));
        assert_eq!(min_max_indices(&[]), None);
    }

    #[test]
    fn pads_both_sides() {
        let (lo, hi) = padded_range(100.0, 200.0, 0.05);
        assert!((lo - 95.0).abs() < 1e-9);
        assert!((hi - 205.0).abs() < 1e-9);
    }

    #[test]
    fn flat_series_still_gets_height() {
        let (lo, hi) = padded_range(50.0, 50.0, 0.05);
        assert!(lo < 50.0 && hi > 50.0);
    }
}
