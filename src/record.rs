//! SRV records.

use std::fmt::Display;

use rand::Rng;

/// Representation of types that contain the fields of a SRV record.
pub trait SrvRecord {
    /// Type representing the SRV record's target. Must implement `Display` so
    /// it can be used as a URL host.
    type Target: Display + ?Sized;

    /// Gets a SRV record's target.
    fn target(&self) -> &Self::Target;

    /// Gets a SRV record's port.
    fn port(&self) -> u16;

    /// Gets a SRV record's priority. Present in the data but not consulted
    /// when a record is chosen.
    fn priority(&self) -> u16;

    /// Gets a SRV record's weight. Present in the data but not consulted when
    /// a record is chosen.
    fn weight(&self) -> u16;
}

/// Picks one record from `records` uniformly at random.
///
/// Priority and weight are deliberately ignored; every record is an equally
/// likely candidate regardless of how the zone ranks them.
pub(crate) fn choose<R: SrvRecord>(records: &[R], mut rng: impl Rng) -> Option<&R> {
    if records.is_empty() {
        return None;
    }
    Some(&records[rng.random_range(0..records.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    struct TestRecord {
        port: u16,
    }

    impl SrvRecord for TestRecord {
        type Target = str;

        fn target(&self) -> &str {
            "backend.example"
        }

        fn port(&self) -> u16 {
            self.port
        }

        fn priority(&self) -> u16 {
            0
        }

        fn weight(&self) -> u16 {
            0
        }
    }

    #[test]
    fn nothing_to_choose_from() {
        let records: Vec<TestRecord> = Vec::new();
        assert!(choose(&records, rand::rng()).is_none());
    }

    #[test]
    fn single_record_is_always_chosen() {
        let records = vec![TestRecord { port: 9000 }];
        for _ in 0..10 {
            assert_eq!(choose(&records, rand::rng()).unwrap().port(), 9000);
        }
    }

    #[test]
    fn choice_is_roughly_uniform() {
        let records: Vec<TestRecord> = (0..4).map(|i| TestRecord { port: 9000 + i }).collect();
        let mut rng = StdRng::seed_from_u64(0x5eed);

        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            let chosen = choose(&records, &mut rng).unwrap();
            counts[usize::from(chosen.port() - 9000)] += 1;
        }

        // Expect ~10_000 per record; the bounds sit far outside any
        // plausible sampling noise.
        for count in counts {
            assert!(
                (9_000..=11_000).contains(&count),
                "skewed counts: {counts:?}"
            );
        }
    }
}
