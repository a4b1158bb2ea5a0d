//! Request bodies for creating and updating transactions.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    payload::{AmountInput, parse_amount, present_amount, present_text},
    transaction::NewTransaction,
};

/// The JSON body sent to create or update a transaction.
///
/// Every field is optional here so that missing fields produce
/// [Error::MissingFields] instead of a deserialization error.
#[derive(Debug, Default, Deserialize)]
pub struct TransactionPayload {
    pub amount: Option<AmountInput>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl TransactionPayload {
    /// Check that every field is present and parse the amount.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::MissingFields] if any field is missing, empty or a zero amount,
    /// - or [Error::InvalidAmount] if the amount is a string that is not a number.
    pub fn validate(self) -> Result<NewTransaction, Error> {
        let (Some(amount), Some(description), Some(date), Some(category)) = (
            present_amount(self.amount),
            present_text(self.description),
            present_text(self.date),
            present_text(self.category),
        ) else {
            return Err(Error::MissingFields);
        };

        Ok(NewTransaction {
            amount: parse_amount(amount)?,
            description,
            date,
            category,
        })
    }
}

/// The form data sent by the dashboard's transaction form.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionForm {
    pub amount: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl From<TransactionForm> for TransactionPayload {
    fn from(form: TransactionForm) -> Self {
        Self {
            amount: form.amount.map(AmountInput::Text),
            description: form.description,
            date: form.date,
            category: form.category,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        Error,
        transaction::{NewTransaction, TransactionForm, TransactionPayload},
    };

    fn parse(value: serde_json::Value) -> TransactionPayload {
        serde_json::from_value(value).expect("could not deserialize payload")
    }

    #[test]
    fn validates_complete_payload() {
        let payload = parse(json!({
            "amount": "12.50",
            "description": "Lunch",
            "date": "2024-01-05",
            "category": "food",
        }));

        assert_eq!(
            payload.validate(),
            Ok(NewTransaction {
                amount: 12.5,
                description: "Lunch".to_owned(),
                date: "2024-01-05".to_owned(),
                category: "food".to_owned(),
            })
        );
    }

    #[test]
    fn missing_or_empty_fields_are_rejected() {
        let cases = [
            json!({"description": "Lunch", "date": "2024-01-05", "category": "food"}),
            json!({"amount": 0, "description": "Lunch", "date": "2024-01-05", "category": "food"}),
            json!({"amount": 5, "description": "", "date": "2024-01-05", "category": "food"}),
            json!({"amount": 5, "description": "Lunch", "date": null, "category": "food"}),
            json!({"amount": 5, "description": "Lunch", "date": "2024-01-05"}),
        ];

        for case in cases {
            assert_eq!(
                parse(case.clone()).validate(),
                Err(Error::MissingFields),
                "want missing fields error for {case}"
            );
        }
    }

    #[test]
    fn missing_fields_are_reported_before_invalid_amount() {
        let payload = parse(json!({"amount": "abc", "description": "Lunch"}));

        assert_eq!(payload.validate(), Err(Error::MissingFields));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        let payload = parse(json!({
            "amount": "abc",
            "description": "Lunch",
            "date": "2024-01-05",
            "category": "food",
        }));

        assert_eq!(
            payload.validate(),
            Err(Error::InvalidAmount("abc".to_owned()))
        );
    }

    #[test]
    fn form_with_empty_category_is_missing_fields() {
        let form: TransactionForm = serde_html_form::from_str(
            "amount=4.20&description=Bus&date=2024-02-01&category=",
        )
        .expect("could not decode form");

        assert_eq!(
            TransactionPayload::from(form).validate(),
            Err(Error::MissingFields)
        );
    }
}
