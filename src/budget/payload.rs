//! Request bodies for setting a budget.

use serde::{Deserialize, Serialize};

use crate::{
    Error,
    budget::NewBudget,
    payload::{AmountInput, parse_amount, present_amount, present_text},
};

/// The JSON body sent to set a budget.
#[derive(Debug, Default, Deserialize)]
pub struct BudgetPayload {
    pub category: Option<String>,
    pub amount: Option<AmountInput>,
    pub month: Option<String>,
}

impl BudgetPayload {
    /// Check that every field is present and parse the amount.
    ///
    /// # Errors
    /// Returns a:
    /// - [Error::MissingFields] if any field is missing, empty or a zero amount,
    /// - or [Error::InvalidAmount] if the amount is a string that is not a number.
    pub fn validate(self) -> Result<NewBudget, Error> {
        let (Some(category), Some(amount), Some(month)) = (
            present_text(self.category),
            present_amount(self.amount),
            present_text(self.month),
        ) else {
            return Err(Error::MissingFields);
        };

        Ok(NewBudget {
            category,
            amount: parse_amount(amount)?,
            month,
        })
    }
}

/// The form data sent by the dashboard's budget form.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetForm {
    pub category: Option<String>,
    pub amount: Option<String>,
    pub month: Option<String>,
}

impl From<BudgetForm> for BudgetPayload {
    fn from(form: BudgetForm) -> Self {
        Self {
            category: form.category,
            amount: form.amount.map(AmountInput::Text),
            month: form.month,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        Error,
        budget::{BudgetForm, BudgetPayload, NewBudget},
    };

    #[test]
    fn validates_complete_payload() {
        let payload: BudgetPayload =
            serde_json::from_value(json!({"category": "food", "amount": 100, "month": "2024-01"}))
                .unwrap();

        assert_eq!(
            payload.validate(),
            Ok(NewBudget {
                category: "food".to_owned(),
                amount: 100.0,
                month: "2024-01".to_owned(),
            })
        );
    }

    #[test]
    fn zero_amount_is_missing() {
        let payload: BudgetPayload =
            serde_json::from_value(json!({"category": "food", "amount": 0, "month": "2024-01"}))
                .unwrap();

        assert_eq!(payload.validate(), Err(Error::MissingFields));
    }

    #[test]
    fn form_amount_is_parsed() {
        let form: BudgetForm =
            serde_html_form::from_str("category=food&amount=250.5&month=2024-03").unwrap();

        assert_eq!(
            BudgetPayload::from(form).validate().map(|budget| budget.amount),
            Ok(250.5)
        );
    }
}
