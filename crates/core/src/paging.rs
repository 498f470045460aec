//! Page-size and offset normalisation for list queries.

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Upper bound on a single page.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Clamp a user-provided page size to `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_limit_uses_default_when_none() {
        assert_eq!(clamp_limit(None, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE), 20);
    }

    #[test]
    fn clamp_limit_respects_max() {
        assert_eq!(clamp_limit(Some(500), DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE), 100);
    }

    #[test]
    fn clamp_limit_floors_at_one() {
        assert_eq!(clamp_limit(Some(0), 20, 100), 1);
        assert_eq!(clamp_limit(Some(-3), 20, 100), 1);
    }

    #[test]
    fn clamp_offset_defaults_to_zero() {
        assert_eq!(clamp_offset(None), 0);
    }

    #[test]
    fn clamp_offset_floors_negative() {
        assert_eq!(clamp_offset(Some(-10)), 0);
        assert_eq!(clamp_offset(Some(40)), 40);
    }
}
