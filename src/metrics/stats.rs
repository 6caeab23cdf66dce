use serde::Serialize;

/// Min/avg/max over one timing sequence, all in nanoseconds.
/// Serialized straight into the debug JSON summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InterArrivalStats {
    pub min: i64,
    pub avg: i64,
    pub max: i64,
    pub count: usize,
}

impl InterArrivalStats {
    /// Reduce a timing sequence. Returns `None` for an empty sequence.
    ///
    /// `avg` is the truncating integer mean of every entry. `min` and `max`
    /// only look at positive entries, so a zero reading (clock resolution)
    /// still drags the mean down but never wins the min. When no entry is
    /// positive both are 0.
    pub fn from_samples(samples: &[i64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        // i128 so a long transfer cannot overflow the sum
        let sum: i128 = samples.iter().map(|&s| i128::from(s)).sum();
        let avg = (sum / samples.len() as i128) as i64;

        let positive = || samples.iter().copied().filter(|&s| s > 0);

        Some(Self {
            min: positive().min().unwrap_or(0),
            avg,
            max: positive().max().unwrap_or(0),
            count: samples.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_has_no_stats() {
        assert_eq!(InterArrivalStats::from_samples(&[]), None);
    }

    #[test]
    fn zero_is_skipped_for_min_but_counted_in_avg() {
        let stats = InterArrivalStats::from_samples(&[0, 100, 200]).unwrap();
        assert_eq!(stats.min, 100);
        assert_eq!(stats.max, 200);
        assert_eq!(stats.avg, 100);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn average_truncates() {
        let stats = InterArrivalStats::from_samples(&[1, 2]).unwrap();
        assert_eq!(stats.avg, 1);
    }

    #[test]
    fn single_entry() {
        let stats = InterArrivalStats::from_samples(&[42]).unwrap();
        assert_eq!((stats.min, stats.avg, stats.max), (42, 42, 42));
    }

    #[test]
    fn all_zero_sequence() {
        let stats = InterArrivalStats::from_samples(&[0, 0, 0]).unwrap();
        assert_eq!((stats.min, stats.avg, stats.max), (0, 0, 0));
    }

    #[test]
    fn min_avg_max_are_ordered_for_positive_samples() {
        let sequences: [&[i64]; 4] = [
            &[5],
            &[3, 9, 1_000_000],
            &[50_000_000, 49_999_999, 50_000_001],
            &[i64::MAX, i64::MAX, 1],
        ];
        for samples in sequences {
            let s = InterArrivalStats::from_samples(samples).unwrap();
            assert!(s.min <= s.avg, "{samples:?}: {s:?}");
            assert!(s.avg <= s.max, "{samples:?}: {s:?}");
        }
    }
}
