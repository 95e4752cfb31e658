use crate::domain::state::{CheckoutState, MessageToken};
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

/// Final outcome of one checkout run, as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckoutReport {
    pub payment_method: Option<String>,
    pub payment_label: Option<&'static str>,
    /// Normalized decimal string, e.g. `"230"`.
    pub subtotal: String,
    #[serde(flatten)]
    pub state: CheckoutState,
    pub message: Option<MessageToken>,
    pub remaining_items: usize,
}

/// Writes reports as pretty-printed JSON, one document per call.
pub struct ReportWriter<W: Write> {
    writer: W,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_report<T: Serialize + ?Sized>(&mut self, report: &T) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, report)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment_method::PaymentMethod;
    use crate::domain::state::FailureReason;

    #[test]
    fn test_write_success_report() {
        let report = CheckoutReport {
            payment_method: Some("visa".into()),
            payment_label: Some("visa"),
            subtotal: "230".into(),
            state: CheckoutState::Success,
            message: None,
            remaining_items: 0,
        };

        let mut out = Vec::new();
        ReportWriter::new(&mut out).write_report(&report).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["payment_method"], "visa");
        assert_eq!(json["subtotal"], "230");
        assert_eq!(json["state"], "success");
        assert!(json["message"].is_null());
        assert_eq!(json["remaining_items"], 0);
    }

    #[test]
    fn test_write_failure_report() {
        let report = CheckoutReport {
            payment_method: None,
            payment_label: None,
            subtotal: "0".into(),
            state: CheckoutState::Error(FailureReason::NoPaymentMethodSelected),
            message: Some(MessageToken::PleaseSelectPayment),
            remaining_items: 2,
        };

        let mut out = Vec::new();
        ReportWriter::new(&mut out).write_report(&report).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["state"], "error");
        assert_eq!(json["reason"], "no_payment_method_selected");
        assert_eq!(json["message"], "please_select_payment");
    }

    #[test]
    fn test_write_catalog() {
        let mut out = Vec::new();
        ReportWriter::new(&mut out)
            .write_report(PaymentMethod::all())
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[1]["id"], "master");
    }
}
