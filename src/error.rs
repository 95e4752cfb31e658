use crate::domain::state::FailureReason;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CheckoutError>;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("No payment method selected")]
    NoPaymentMethodSelected,
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<FailureReason> for CheckoutError {
    fn from(reason: FailureReason) -> Self {
        match reason {
            FailureReason::NoPaymentMethodSelected => CheckoutError::NoPaymentMethodSelected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_reason_conversion() {
        let err = CheckoutError::from(FailureReason::NoPaymentMethodSelected);
        assert!(matches!(err, CheckoutError::NoPaymentMethodSelected));
        assert_eq!(err.to_string(), "No payment method selected");
    }
}
