use serde::Serialize;

/// Bin count of the source tool's length-frequency histogram.
pub const DEFAULT_BIN_COUNT: usize = 20;

/// One equal-width bin of the length-frequency distribution.
/// Bins are half-open `[lower, upper)`; the last bin includes its upper
/// edge so the maximum length is counted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LengthBin {
    pub lower_mm: f64,
    pub upper_mm: f64,
    pub count: u64,
}

/// Length-frequency distribution over `bin_count` equal-width bins spanning
/// the observed [min, max] range.
///
/// Returns bin data only; rendering the histogram is the presentation
/// collaborator's job. Non-finite lengths are ignored. An empty sample (or
/// zero bins) yields an empty distribution; a single-valued sample
/// collapses to one zero-width bin holding everything.
pub fn length_frequency(lengths: &[f64], bin_count: usize) -> Vec<LengthBin> {
    let finite: Vec<f64> = lengths.iter().copied().filter(|l| l.is_finite()).collect();
    if finite.is_empty() || bin_count == 0 {
        return Vec::new();
    }

    let min = finite.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = finite.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;
    if span <= 0.0 {
        return vec![LengthBin {
            lower_mm: min,
            upper_mm: max,
            count: finite.len() as u64,
        }];
    }

    let width = span / bin_count as f64;
    let mut counts = vec![0u64; bin_count];
    for l in &finite {
        let idx = (((l - min) / width) as usize).min(bin_count - 1);
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| LengthBin {
            lower_mm: min + i as f64 * width,
            upper_mm: min + (i + 1) as f64 * width,
            count,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_sample_size() {
        let lengths: Vec<f64> = (0..97).map(|i| 100.0 + i as f64 * 3.7).collect();
        let bins = length_frequency(&lengths, DEFAULT_BIN_COUNT);
        assert_eq!(bins.len(), DEFAULT_BIN_COUNT);
        let total: u64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total as usize, lengths.len());
    }

    #[test]
    fn maximum_length_lands_in_last_bin() {
        let lengths = [100.0, 200.0, 300.0, 400.0];
        let bins = length_frequency(&lengths, 3);
        assert_eq!(bins.last().unwrap().count, 1);
        assert_eq!(bins.last().unwrap().upper_mm, 400.0);
    }

    #[test]
    fn non_finite_lengths_are_ignored() {
        let lengths = [100.0, f64::NAN, 200.0];
        let bins = length_frequency(&lengths, 2);
        let total: u64 = bins.iter().map(|b| b.count).sum();
        assert_eq!(total, 2);
    }

    #[test]
    fn degenerate_samples() {
        assert!(length_frequency(&[], 20).is_empty());
        assert!(length_frequency(&[100.0], 0).is_empty());

        let bins = length_frequency(&[150.0, 150.0, 150.0], 20);
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].lower_mm, 150.0);
        assert_eq!(bins[0].upper_mm, 150.0);
    }
}
