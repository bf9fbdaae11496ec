//! Section identifier sources
//!
//! The grouper needs a fresh client-side element id for every collapsible
//! section it emits. The source is injected rather than reached for
//! globally, so renders can be deterministic where that matters (tests,
//! snapshot comparisons) without changing the grouping code.

use chrono::Utc;
use rand::Rng;

/// Generator for the `section_…` ids that pair a hidden block with its
/// toggle button.
#[derive(Debug, Clone)]
pub enum SectionIds {
    /// Strictly incrementing per-render counter. Deterministic and
    /// collision-free within a render pass.
    Sequential { next: u64 },
    /// Wall-clock milliseconds plus a random 4-digit suffix. Highly likely
    /// but not guaranteed unique: two sections rendered in the same
    /// millisecond can draw the same suffix.
    Entropy,
}

impl SectionIds {
    pub fn sequential() -> Self {
        SectionIds::Sequential { next: 0 }
    }

    pub fn entropy() -> Self {
        SectionIds::Entropy
    }

    /// Produce the next section identifier.
    pub fn next_id(&mut self) -> String {
        match self {
            SectionIds::Sequential { next } => {
                *next += 1;
                format!("section_{next}")
            }
            SectionIds::Entropy => {
                let stamp = Utc::now().timestamp_millis();
                let suffix: u32 = rand::rng().random_range(1000..=9999);
                format!("section_{stamp}_{suffix}")
            }
        }
    }
}

impl Default for SectionIds {
    fn default() -> Self {
        SectionIds::sequential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids_are_distinct_and_ordered() {
        let mut ids = SectionIds::sequential();
        assert_eq!(ids.next_id(), "section_1");
        assert_eq!(ids.next_id(), "section_2");
        assert_eq!(ids.next_id(), "section_3");
    }

    #[test]
    fn test_entropy_ids_have_expected_shape() {
        let mut ids = SectionIds::entropy();
        let id = ids.next_id();
        let parts: Vec<&str> = id.split('_').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "section");
        assert!(parts[1].parse::<i64>().is_ok(), "timestamp part: {id}");
        let suffix: u32 = parts[2].parse().expect("numeric suffix");
        assert!((1000..=9999).contains(&suffix), "suffix out of range: {id}");
    }
}
