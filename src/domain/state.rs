use serde::Serialize;
use std::fmt;

/// User-facing string resource reported to the failure callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageToken {
    PleaseSelectPayment,
}

impl MessageToken {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageToken::PleaseSelectPayment => "please_select_payment",
        }
    }
}

impl fmt::Display for MessageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    NoPaymentMethodSelected,
}

impl FailureReason {
    pub fn message_token(&self) -> MessageToken {
        match self {
            FailureReason::NoPaymentMethodSelected => MessageToken::PleaseSelectPayment,
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureReason::NoPaymentMethodSelected => f.write_str("no payment method selected"),
        }
    }
}

/// Phase of the current checkout attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum CheckoutState {
    #[default]
    Idle,
    Loading,
    Success,
    Error(FailureReason),
}
