//! Cart validation outcome
//!
//! After payment the backend validates the cart, books any check-in and
//! produces a receipt. This module turns its response into what the till shows.

use std::fmt::{Display, Formatter, Result as FmtResult};

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::Deserialize;

use crate::pricing::money_from_decimal;

/// Cart validation response as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ValidationResponse {
    /// Whether validation found a problem.
    #[serde(default)]
    pub error: bool,

    /// Problem description when `error` is set.
    #[serde(default)]
    pub message: Option<String>,

    /// Printable receipt.
    #[serde(default)]
    pub receipt_link: Option<String>,

    /// Payment method recorded on the receipt.
    #[serde(default)]
    pub receipt_payment_methods_id: Option<serde_json::Value>,

    /// Lines sold on the receipt.
    #[serde(default)]
    pub receipt_items: Vec<ReceiptItem>,

    /// Receipt totals.
    #[serde(default)]
    pub receipt_amounts: Option<ReceiptAmounts>,

    /// Whether a class check-in was attempted.
    #[serde(default)]
    pub checkin_did: bool,

    /// `"ok"` when the check-in succeeded.
    #[serde(default)]
    pub checkin_status: Option<String>,

    /// Check-in failure reason.
    #[serde(default)]
    pub checkin_message: Option<String>,
}

/// One receipt line as sent by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReceiptItem {
    /// Product name.
    #[serde(rename = "ProductName", default)]
    pub product_name: String,

    /// Line description.
    #[serde(rename = "Description", default)]
    pub description: Option<String>,

    /// Units sold.
    #[serde(rename = "Quantity", default)]
    pub quantity: Option<Decimal>,

    /// Line total including VAT.
    #[serde(rename = "TotalPriceVAT", default)]
    pub total_price_vat: Option<Decimal>,
}

/// A sold line as shown after validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptLine<'a> {
    /// Product name.
    pub product_name: String,

    /// Line description, if any.
    pub description: Option<String>,

    /// Units sold; one when the backend omits it.
    pub quantity: Decimal,

    /// Line total including VAT.
    pub total: Option<Money<'a, Currency>>,
}

impl<'a> ReceiptLine<'a> {
    fn from_item(item: ReceiptItem, currency: &'a Currency) -> Self {
        ReceiptLine {
            product_name: item.product_name,
            description: item.description.filter(|description| !description.is_empty()),
            quantity: item.quantity.unwrap_or(Decimal::ONE).normalize(),
            total: item
                .total_price_vat
                .and_then(|total| money_from_decimal(total, currency)),
        }
    }
}

impl Display for ReceiptLine<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} x {}", self.quantity, self.product_name)?;

        if let Some(description) = &self.description {
            write!(f, " - {description}")?;
        }

        if let Some(total) = &self.total {
            write!(f, ": {total}")?;
        }

        Ok(())
    }
}

/// Receipt totals.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReceiptAmounts {
    /// Total including VAT.
    #[serde(rename = "TotalPriceVAT", default)]
    pub total_price_vat: Option<Decimal>,
}

/// Result of a class check-in booked during validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckinOutcome {
    /// The cart did not include a check-in.
    NotAttempted,

    /// The customer is checked in to the class.
    CheckedIn,

    /// The check-in failed.
    Failed {
        /// Reason given by the backend.
        message: Option<String>,
    },
}

/// What the validation screen shows.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome<'a> {
    /// Something in the cart needs attention.
    Failed {
        /// Reason given by the backend.
        message: String,
    },

    /// The sale went through.
    Succeeded {
        /// Printable receipt.
        receipt_link: Option<String>,

        /// Payment method recorded on the receipt, as sent by the backend.
        payment_method_id: Option<String>,

        /// Lines sold.
        items: Vec<ReceiptLine<'a>>,

        /// Receipt total including VAT.
        total: Option<Money<'a, Currency>>,

        /// Class check-in result.
        checkin: CheckinOutcome,
    },
}

impl<'a> ValidationOutcome<'a> {
    /// Interprets a validation response, pricing totals in `currency`.
    pub fn from_response(response: ValidationResponse, currency: &'a Currency) -> Self {
        if response.error {
            return ValidationOutcome::Failed {
                message: response
                    .message
                    .unwrap_or_else(|| "Cart validation failed".to_string()),
            };
        }

        let checkin = match (response.checkin_did, response.checkin_status.as_deref()) {
            (false, _) => CheckinOutcome::NotAttempted,
            (true, Some("ok")) => CheckinOutcome::CheckedIn,
            (true, _) => CheckinOutcome::Failed {
                message: response.checkin_message,
            },
        };

        let payment_method_id = response.receipt_payment_methods_id.and_then(|value| match value {
            serde_json::Value::String(id) => Some(id),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        });

        ValidationOutcome::Succeeded {
            receipt_link: response.receipt_link,
            payment_method_id,
            items: response
                .receipt_items
                .into_iter()
                .map(|item| ReceiptLine::from_item(item, currency))
                .collect(),
            total: response
                .receipt_amounts
                .and_then(|amounts| amounts.total_price_vat)
                .and_then(|total| money_from_decimal(total, currency)),
            checkin,
        }
    }

    /// Lines shown to the cashier.
    pub fn summary_lines(&self) -> Vec<String> {
        match self {
            ValidationOutcome::Failed { message } => vec![
                "Something in this cart needs your attention".to_string(),
                message.clone(),
            ],
            ValidationOutcome::Succeeded {
                receipt_link,
                payment_method_id,
                items,
                total,
                checkin,
            } => {
                let mut lines = vec!["SUCCESS!".to_string()];

                if let Some(payment_method_id) = payment_method_id {
                    lines.push(format!("Payment method: {payment_method_id}"));
                }

                lines.extend(items.iter().map(ToString::to_string));

                if let Some(total) = total {
                    lines.push(format!("Total: {total}"));
                }

                match checkin {
                    CheckinOutcome::NotAttempted => {}
                    CheckinOutcome::CheckedIn => {
                        lines.push("Customer checked in to class".to_string());
                    }
                    CheckinOutcome::Failed { message } => {
                        lines.push("Class checkin failed".to_string());
                        lines.extend(message.clone());
                    }
                }

                if let Some(receipt_link) = receipt_link {
                    lines.push(format!("Receipt: {receipt_link}"));
                }

                lines
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rusty_money::iso::EUR;
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    fn outcome(value: serde_json::Value) -> TestResult<ValidationOutcome<'static>> {
        Ok(ValidationOutcome::from_response(
            serde_json::from_value(value)?,
            EUR,
        ))
    }

    #[test]
    fn error_response_fails() -> TestResult {
        let outcome = outcome(json!({ "error": true, "message": "Card expired" }))?;

        assert_eq!(
            outcome,
            ValidationOutcome::Failed {
                message: "Card expired".to_string()
            }
        );

        Ok(())
    }

    #[test]
    fn successful_checkin() -> TestResult {
        let outcome = outcome(json!({
            "error": false,
            "receipt_link": "/r/1",
            "receipt_payment_methods_id": 3,
            "receipt_amounts": { "TotalPriceVAT": 12.5 },
            "checkin_did": true,
            "checkin_status": "ok"
        }))?;

        assert_eq!(
            outcome,
            ValidationOutcome::Succeeded {
                receipt_link: Some("/r/1".to_string()),
                payment_method_id: Some("3".to_string()),
                items: Vec::new(),
                total: Some(Money::from_minor(1250, EUR)),
                checkin: CheckinOutcome::CheckedIn,
            }
        );
        assert!(
            outcome
                .summary_lines()
                .contains(&"Customer checked in to class".to_string()),
            "check-in line missing"
        );

        Ok(())
    }

    #[test]
    fn failed_checkin_keeps_message() -> TestResult {
        let outcome = outcome(json!({
            "error": false,
            "checkin_did": true,
            "checkin_status": "fail",
            "checkin_message": "Class is full"
        }))?;

        let lines = outcome.summary_lines();

        assert!(lines.contains(&"Class checkin failed".to_string()), "{lines:?}");
        assert!(lines.contains(&"Class is full".to_string()), "{lines:?}");

        Ok(())
    }

    #[test]
    fn no_checkin_when_not_attempted() -> TestResult {
        let outcome = outcome(json!({ "error": false }))?;

        assert!(matches!(
            outcome,
            ValidationOutcome::Succeeded {
                checkin: CheckinOutcome::NotAttempted,
                ..
            }
        ));

        Ok(())
    }

    #[test]
    fn receipt_items_are_listed_before_total() -> TestResult {
        let outcome = outcome(json!({
            "error": false,
            "receipt_items": [
                { "ProductName": "Classcard", "Description": "10 classes", "Quantity": "1.00", "TotalPriceVAT": "120.00" },
                { "ProductName": "Water", "Description": "", "Quantity": 2, "TotalPriceVAT": 5 }
            ],
            "receipt_amounts": { "TotalPriceVAT": 125 }
        }))?;

        let total = Money::from_minor(12_500, EUR);

        assert_eq!(
            outcome.summary_lines(),
            vec![
                "SUCCESS!".to_string(),
                format!("1 x Classcard - 10 classes: {}", Money::from_minor(12_000, EUR)),
                format!("2 x Water: {}", Money::from_minor(500, EUR)),
                format!("Total: {total}"),
            ]
        );

        Ok(())
    }
}
