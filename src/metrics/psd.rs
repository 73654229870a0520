use serde::Serialize;

use crate::species::LengthCategories;

/// Proportional size distribution percentages (0–100) for the four
/// categories above stock length.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct PsdValues {
    pub quality: f64,
    pub preferred: f64,
    pub memorable: f64,
    pub trophy: f64,
}

/// Proportional size distribution for one species' length sample.
///
/// `stock_count` is the number of lengths at or above the stock cutoff;
/// each percentage is the share of stock-length fish reaching that cutoff.
/// All four percentages are 0 when the stock-length sample is empty.
pub fn psd(lengths: &[f64], categories: &LengthCategories) -> (u64, PsdValues) {
    let stock_count = count_at_or_above(lengths, categories.stock_mm);
    if stock_count == 0 {
        return (0, PsdValues::default());
    }

    let pct = |cutoff_mm: f64| count_at_or_above(lengths, cutoff_mm) as f64 / stock_count as f64 * 100.0;
    let values = PsdValues {
        quality: pct(categories.quality_mm),
        preferred: pct(categories.preferred_mm),
        memorable: pct(categories.memorable_mm),
        trophy: pct(categories.trophy_mm),
    };
    (stock_count, values)
}

fn count_at_or_above(lengths: &[f64], cutoff_mm: f64) -> u64 {
    lengths.iter().filter(|&&l| l >= cutoff_mm).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    const WALLEYE: LengthCategories = LengthCategories {
        stock_mm: 250.0,
        quality_mm: 380.0,
        preferred_mm: 510.0,
        memorable_mm: 630.0,
        trophy_mm: 760.0,
    };

    #[test]
    fn walleye_sample_distribution() {
        let lengths = [200.0, 260.0, 400.0, 520.0, 700.0, 800.0];
        let (stock, values) = psd(&lengths, &WALLEYE);
        assert_eq!(stock, 5);
        assert_eq!(values.quality, 80.0);
        assert_eq!(values.preferred, 60.0);
        assert_eq!(values.memorable, 40.0);
        assert_eq!(values.trophy, 20.0);
    }

    #[test]
    fn cutoffs_are_inclusive() {
        let lengths = [250.0, 380.0];
        let (stock, values) = psd(&lengths, &WALLEYE);
        assert_eq!(stock, 2);
        assert_eq!(values.quality, 50.0);
    }

    #[test]
    fn empty_stock_sample_is_all_zero() {
        let lengths = [100.0, 200.0, 249.9];
        let (stock, values) = psd(&lengths, &WALLEYE);
        assert_eq!(stock, 0);
        assert_eq!(values, PsdValues::default());

        let (stock, values) = psd(&[], &WALLEYE);
        assert_eq!(stock, 0);
        assert_eq!(values, PsdValues::default());
    }
}
