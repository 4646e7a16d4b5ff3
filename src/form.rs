//! Simulation form: raw inputs and the submission record built from them.

use crate::risk::RiskInputs;
use crate::transform::{loan_percent_income, Submission};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Form inputs exactly as typed, before any coercion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormValues {
    pub person_age: String,
    pub person_gender: String,
    pub person_education: String,
    pub person_income: String,
    pub person_emp_exp: String,
    pub person_home_ownership: String,
    pub loan_amnt: String,
    pub loan_intent: String,
    pub loan_int_rate: String,
    pub cb_person_cred_hist_length: String,
    pub credit_score: String,
    pub previous_loan_defaults_on_file: String,
}

/// Form number rule: anything unparsable reads as 0.
pub fn parse_form_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

impl FormValues {
    /// Loan-to-income ratio shown next to the amount field.
    pub fn ratio(&self) -> f64 {
        loan_percent_income(
            parse_form_number(&self.loan_amnt),
            parse_form_number(&self.person_income),
        )
    }

    /// Flat record posted to the adapter, with the derived ratio appended.
    pub fn to_submission(&self) -> Submission {
        let mut submission = Submission::new();
        let fields = [
            ("person_age", &self.person_age),
            ("person_gender", &self.person_gender),
            ("person_education", &self.person_education),
            ("person_income", &self.person_income),
            ("person_emp_exp", &self.person_emp_exp),
            ("person_home_ownership", &self.person_home_ownership),
            ("loan_amnt", &self.loan_amnt),
            ("loan_intent", &self.loan_intent),
            ("loan_int_rate", &self.loan_int_rate),
            ("cb_person_cred_hist_length", &self.cb_person_cred_hist_length),
            ("credit_score", &self.credit_score),
            (
                "previous_loan_defaults_on_file",
                &self.previous_loan_defaults_on_file,
            ),
        ];
        for (key, value) in fields {
            submission.insert(key.to_string(), Value::String(value.clone()));
        }
        submission.insert("loan_percent_income".to_string(), Value::from(self.ratio()));
        submission
    }

    /// Inputs for the shared banding, read from what is currently entered.
    ///
    /// Blank or unparsable fields read as 0, like every other form number.
    pub fn risk_inputs(&self) -> RiskInputs {
        RiskInputs {
            credit_score: parse_form_number(&self.credit_score),
            income: parse_form_number(&self.person_income),
            ratio: self.ratio(),
            no_defaults: self.previous_loan_defaults_on_file == "No",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_is_zero_without_income() {
        let form = FormValues {
            loan_amnt: "5000".into(),
            ..FormValues::default()
        };
        assert_eq!(form.ratio(), 0.0);
    }

    #[test]
    fn test_ratio_from_typed_values() {
        let form = FormValues {
            person_income: "40000".into(),
            loan_amnt: "10000".into(),
            ..FormValues::default()
        };
        assert_eq!(form.ratio(), 0.25);
    }

    #[test]
    fn test_submission_carries_every_field_and_ratio() {
        let form = FormValues {
            person_income: "40000".into(),
            loan_amnt: "10000".into(),
            previous_loan_defaults_on_file: "No".into(),
            ..FormValues::default()
        };
        let submission = form.to_submission();

        assert_eq!(submission.len(), 13);
        assert_eq!(submission["loan_percent_income"], Value::from(0.25));
        assert_eq!(submission["person_income"], Value::from("40000"));
        assert_eq!(submission["previous_loan_defaults_on_file"], Value::from("No"));
    }

    #[test]
    fn test_parse_form_number() {
        assert_eq!(parse_form_number("12.5"), 12.5);
        assert_eq!(parse_form_number(""), 0.0);
        assert_eq!(parse_form_number("abc"), 0.0);
        assert_eq!(parse_form_number("NaN"), 0.0);
    }

    #[test]
    fn test_blank_form_reads_as_zero_not_fallback_defaults() {
        let inputs = FormValues::default().risk_inputs();
        assert_eq!(inputs.credit_score, 0.0);
        assert_eq!(inputs.income, 0.0);
        assert_eq!(inputs.ratio, 0.0);
        assert!(!inputs.no_defaults);
    }
}
