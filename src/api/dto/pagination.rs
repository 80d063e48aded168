//! Pagination query parameters.

use serde::Deserialize;

const DEFAULT_LIMIT: u32 = 25;
const MAX_LIMIT: u32 = 1000;

/// `limit`/`offset` query parameters for listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub limit: Option<u32>,

    #[serde(default)]
    pub offset: Option<u32>,
}

impl ListParams {
    /// Validates parameters and converts them to database `(limit, offset)`.
    ///
    /// # Defaults
    ///
    /// - `limit`: 25
    /// - `offset`: 0
    ///
    /// # Validation
    ///
    /// - Limit must be between 1 and 1000
    pub fn validate_and_get_limit_offset(&self) -> Result<(i64, i64), String> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = self.offset.unwrap_or(0);

        if !(1..=MAX_LIMIT).contains(&limit) {
            return Err(format!("Limit must be between 1 and {}", MAX_LIMIT));
        }

        Ok((i64::from(limit), i64::from(offset)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(limit: Option<u32>, offset: Option<u32>) -> ListParams {
        ListParams { limit, offset }
    }

    #[test]
    fn test_defaults() {
        let (limit, offset) = params(None, None)
            .validate_and_get_limit_offset()
            .unwrap();
        assert_eq!(limit, 25);
        assert_eq!(offset, 0);
    }

    #[test]
    fn test_custom_values() {
        let (limit, offset) = params(Some(50), Some(100))
            .validate_and_get_limit_offset()
            .unwrap();
        assert_eq!(limit, 50);
        assert_eq!(offset, 100);
    }

    #[test]
    fn test_limit_zero_is_error() {
        assert!(params(Some(0), None).validate_and_get_limit_offset().is_err());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(params(Some(1), None).validate_and_get_limit_offset().is_ok());
        assert!(params(Some(1000), None).validate_and_get_limit_offset().is_ok());
        assert!(params(Some(1001), None).validate_and_get_limit_offset().is_err());
    }
}
