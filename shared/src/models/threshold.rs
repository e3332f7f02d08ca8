//! Threshold classification over ordered status bands

use crate::types::{RangeBand, StaticBand, UNKNOWN_STATUS};

/// Anything that can act as a labelled closed interval
pub trait StatusBand {
    fn min(&self) -> f64;
    fn max(&self) -> f64;
    fn label(&self) -> &str;
}

impl StatusBand for RangeBand {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn label(&self) -> &str {
        &self.label
    }
}

impl StatusBand for StaticBand {
    fn min(&self) -> f64 {
        self.min
    }

    fn max(&self) -> f64 {
        self.max
    }

    fn label(&self) -> &str {
        self.label
    }
}

/// Classify a value against an ordered band table.
///
/// Bands are scanned in order and the first band with `min <= value <= max`
/// wins. Adjacent bands that share a boundary therefore resolve that boundary
/// to the earlier band. Values outside every band (and NaN) classify as
/// [`UNKNOWN_STATUS`].
pub fn classify<B: StatusBand>(value: f64, bands: &[B]) -> &str {
    bands
        .iter()
        .find(|band| band.min() <= value && value <= band.max())
        .map(|band| band.label())
        .unwrap_or(UNKNOWN_STATUS)
}

/// Position of `value` within `[min, max]` as a percentage clamped to 0-100
pub fn progress_percentage(value: f64, min: f64, max: f64) -> f64 {
    let span = max - min;
    if !value.is_finite() || !span.is_finite() || span <= 0.0 {
        return 0.0;
    }
    ((value - min) / span * 100.0).clamp(0.0, 100.0)
}

/// Lowest `min` and highest `max` across a band table
pub fn band_span<B: StatusBand>(bands: &[B]) -> Option<(f64, f64)> {
    let lo = bands.iter().map(StatusBand::min).reduce(f64::min)?;
    let hi = bands.iter().map(StatusBand::max).reduce(f64::max)?;
    Some((lo, hi))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ph_bands() -> Vec<RangeBand> {
        vec![
            RangeBand::new(0.0, 5.5, "Acidic"),
            RangeBand::new(5.5, 6.5, "Slightly Acidic"),
            RangeBand::new(6.5, 7.5, "Optimal"),
            RangeBand::new(7.5, 8.5, "Slightly Alkaline"),
            RangeBand::new(8.5, 14.0, "Alkaline"),
        ]
    }

    #[test]
    fn test_classify_inside_band() {
        assert_eq!(classify(4.2, &ph_bands()), "Acidic");
        assert_eq!(classify(7.0, &ph_bands()), "Optimal");
        assert_eq!(classify(9.0, &ph_bands()), "Alkaline");
    }

    #[test]
    fn test_shared_boundary_goes_to_first_band() {
        assert_eq!(classify(5.5, &ph_bands()), "Acidic");
        assert_eq!(classify(6.5, &ph_bands()), "Slightly Acidic");
        assert_eq!(classify(7.5, &ph_bands()), "Optimal");
    }

    #[test]
    fn test_outer_edges_are_inclusive() {
        assert_eq!(classify(0.0, &ph_bands()), "Acidic");
        assert_eq!(classify(14.0, &ph_bands()), "Alkaline");
    }

    #[test]
    fn test_out_of_range_is_unknown() {
        assert_eq!(classify(-0.1, &ph_bands()), UNKNOWN_STATUS);
        assert_eq!(classify(14.01, &ph_bands()), UNKNOWN_STATUS);
        assert_eq!(classify(f64::NAN, &ph_bands()), UNKNOWN_STATUS);
    }

    #[test]
    fn test_empty_table_is_unknown() {
        let bands: Vec<RangeBand> = Vec::new();
        assert_eq!(classify(1.0, &bands), UNKNOWN_STATUS);
    }

    #[test]
    fn test_static_bands() {
        const BANDS: &[StaticBand] = &[
            StaticBand::new(0.0, 15.0, "Cool"),
            StaticBand::new(15.0, 25.0, "Optimal"),
        ];
        assert_eq!(classify(20.0, BANDS), "Optimal");
        assert_eq!(classify(15.0, BANDS), "Cool");
    }

    #[test]
    fn test_progress_percentage() {
        assert_eq!(progress_percentage(50.0, 0.0, 100.0), 50.0);
        assert_eq!(progress_percentage(-5.0, 0.0, 100.0), 0.0);
        assert_eq!(progress_percentage(150.0, 0.0, 100.0), 100.0);
        assert_eq!(progress_percentage(7.0, 0.0, 14.0), 50.0);
    }

    #[test]
    fn test_progress_percentage_degenerate_span() {
        assert_eq!(progress_percentage(5.0, 5.0, 5.0), 0.0);
        assert_eq!(progress_percentage(f64::NAN, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_band_span() {
        assert_eq!(band_span(&ph_bands()), Some((0.0, 14.0)));
        assert_eq!(band_span::<RangeBand>(&[]), None);
    }
}
