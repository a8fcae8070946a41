//! Time interval validation.

use chrono::NaiveDateTime;

/// A validated `[start, end)` interval with `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl TimeInterval {
    /// Parse and validate a start/end timestamp pair.
    ///
    /// Accepts ISO-8601 local-naive datetimes (`YYYY-MM-DDTHH:MM:SS`, with an
    /// optional fractional part). Returns `None` when either timestamp is
    /// malformed or when `end <= start`; the two failure modes are reported
    /// identically as an invalid interval.
    pub fn parse(start: &str, end: &str) -> Option<TimeInterval> {
        let start: NaiveDateTime = start.parse().ok()?;
        let end: NaiveDateTime = end.parse().ok()?;

        if end <= start {
            return None;
        }

        Some(TimeInterval { start, end })
    }

    /// Half-open overlap test: intervals overlap unless one ends before (or
    /// exactly when) the other starts. Back-to-back intervals do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        !(self.end <= other.start || self.start >= other.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interval(start: &str, end: &str) -> TimeInterval {
        TimeInterval::parse(start, end).unwrap()
    }

    #[test]
    fn test_parse_valid_pair() {
        let iv = interval("2024-01-10T09:00:00", "2024-01-10T09:30:00");
        assert!(iv.start < iv.end);
    }

    #[test]
    fn test_parse_accepts_fractional_seconds() {
        assert!(TimeInterval::parse("2024-01-10T09:00:00.250000", "2024-01-10T10:00:00").is_some());
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(TimeInterval::parse("not-a-date", "2024-01-10T10:00:00").is_none());
        assert!(TimeInterval::parse("2024-01-10T09:00:00", "10am").is_none());
        assert!(TimeInterval::parse("", "").is_none());
    }

    #[test]
    fn test_parse_rejects_inverted_and_zero_length() {
        assert!(TimeInterval::parse("2024-01-10T10:00:00", "2024-01-10T09:00:00").is_none());
        assert!(TimeInterval::parse("2024-01-10T09:00:00", "2024-01-10T09:00:00").is_none());
    }

    #[test]
    fn test_overlap_partial() {
        let a = interval("2024-01-10T09:00:00", "2024-01-10T10:00:00");
        let b = interval("2024-01-10T09:30:00", "2024-01-10T10:30:00");
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));
    }

    #[test]
    fn test_overlap_containment() {
        let outer = interval("2024-01-10T09:00:00", "2024-01-10T12:00:00");
        let inner = interval("2024-01-10T10:00:00", "2024-01-10T11:00:00");
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }

    #[test]
    fn test_back_to_back_does_not_overlap() {
        let a = interval("2024-01-10T09:00:00", "2024-01-10T10:00:00");
        let b = interval("2024-01-10T10:00:00", "2024-01-10T11:00:00");
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_disjoint_does_not_overlap() {
        let a = interval("2024-01-10T09:00:00", "2024-01-10T10:00:00");
        let b = interval("2024-01-11T09:00:00", "2024-01-11T10:00:00");
        assert!(!a.overlaps(&b));
    }
}
