use std::time::Duration;

/// Simulated payment processing latency used when none is configured.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(5000);

/// Runtime settings for a checkout screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckoutConfig {
    /// How long a checkout stays `Loading` before it completes.
    pub processing_delay: Duration,
}

impl CheckoutConfig {
    pub fn with_delay(processing_delay: Duration) -> Self {
        Self { processing_delay }
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self::with_delay(DEFAULT_PROCESSING_DELAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay() {
        assert_eq!(
            CheckoutConfig::default().processing_delay,
            Duration::from_secs(5)
        );
    }

    #[test]
    fn test_custom_delay() {
        let config = CheckoutConfig::with_delay(Duration::from_millis(10));
        assert_eq!(config.processing_delay, Duration::from_millis(10));
    }
}
