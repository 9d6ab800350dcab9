use thiserror::Error as ThisError;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Malformed coordinates or distance matrix.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// City count is past what the exact DP can hold in memory.
    #[error("{cities} cities exceeds the exact solver limit of {limit}")]
    ScaleLimitExceeded { cities: usize, limit: usize },
    /// Agent count outside `1..=cities-1`.
    #[error("cannot split {cities} cities between {agents} agents (expected 1..={})", .cities.saturating_sub(1))]
    InvalidPartition { agents: i64, cities: usize },
    #[error("city index {index} out of range for {cities} cities")]
    IndexOutOfRange { index: usize, cities: usize },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn partition_message_names_valid_range() {
        let err = Error::InvalidPartition { agents: 5, cities: 4 };
        assert_eq!(
            err.to_string(),
            "cannot split 4 cities between 5 agents (expected 1..=3)"
        );
    }

    #[test]
    fn scale_message_names_limit() {
        let err = Error::ScaleLimitExceeded { cities: 25, limit: 20 };
        assert_eq!(
            err.to_string(),
            "25 cities exceeds the exact solver limit of 20"
        );
    }
}
