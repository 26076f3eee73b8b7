use thiserror::Error;

/// Failure kinds at the fetch boundary. Both are caught per-ticker by the
/// screener loop; only the market and risk-free prelude treats them as fatal.
#[derive(Error, Debug)]
pub enum CapmError {
    /// Non-success HTTP status or transport-level failure.
    #[error("remote error for {ticker}: {reason}")]
    Remote { ticker: String, reason: String },

    /// The data source returned fewer usable rows than the sample requires.
    #[error("insufficient data for {ticker}: {rows} rows, need {required}")]
    InsufficientData {
        ticker: String,
        rows: usize,
        required: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages_name_the_ticker() {
        let err = CapmError::Remote {
            ticker: "TSLA".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        assert!(err.to_string().contains("TSLA"));

        let err = CapmError::InsufficientData {
            ticker: "NEWCO".to_string(),
            rows: 12,
            required: 50,
        };
        let msg = err.to_string();
        assert!(msg.contains("NEWCO"));
        assert!(msg.contains("12"));
        assert!(msg.contains("50"));
    }
}
