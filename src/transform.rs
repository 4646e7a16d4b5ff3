/// Request transformation for the prediction adapter
///
/// Turns a free-form submission (form fields as text or JSON numbers) into the
/// typed `LoanApplication` the scoring backend expects.
use crate::errors::AppError;
use crate::models::LoanApplication;
use serde_json::{Map, Value};

/// Flat key/value record as submitted by the form.
pub type Submission = Map<String, Value>;

/// Parse an inbound body as a JSON object.
pub fn parse_submission(body: &[u8]) -> Result<Submission, AppError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::ParseError(format!(
            "expected a JSON object, got {}",
            json_kind(&other)
        ))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Coerce a submitted value to a finite number.
///
/// JSON numbers are used as-is, strings are trimmed and parsed. Anything else
/// (missing, null, boolean, empty or unparsable text, NaN/inf) yields `None`.
pub fn coerce_number(value: Option<&Value>) -> Option<f64> {
    let number = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

/// Categorical fields pass through unchanged; scalars are stringified.
pub fn coerce_category(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `loan / income` when both are positive, 0 otherwise.
pub fn loan_percent_income(loan_amnt: f64, person_income: f64) -> f64 {
    if loan_amnt > 0.0 && person_income > 0.0 {
        let ratio = loan_amnt / person_income;
        // 1e308 / 1e-308 overflows
        if ratio.is_finite() {
            return ratio;
        }
    }
    0.0
}

impl LoanApplication {
    /// Build the backend record from a submission.
    ///
    /// Unparsable numerics become `0.0`. `loan_percent_income` is always
    /// recomputed from the amount and income, whatever the client sent.
    pub fn from_submission(submission: &Submission) -> Self {
        let number = |key: &str| coerce_number(submission.get(key)).unwrap_or(0.0);
        let category = |key: &str| coerce_category(submission.get(key));

        let person_income = number("person_income");
        let loan_amnt = number("loan_amnt");

        Self {
            person_age: number("person_age"),
            person_gender: category("person_gender"),
            person_education: category("person_education"),
            person_income,
            person_emp_exp: number("person_emp_exp"),
            person_home_ownership: category("person_home_ownership"),
            loan_amnt,
            loan_intent: category("loan_intent"),
            loan_int_rate: number("loan_int_rate"),
            loan_percent_income: loan_percent_income(loan_amnt, person_income),
            cb_person_cred_hist_length: number("cb_person_cred_hist_length"),
            credit_score: number("credit_score"),
            previous_loan_defaults_on_file: category("previous_loan_defaults_on_file"),
        }
    }

    /// Range checks matching the bounds of the simulation form.
    ///
    /// Not part of the prediction path; the adapter forwards out-of-range
    /// values untouched.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut violations = Vec::new();

        let ranges: [(&str, f64, f64, f64); 7] = [
            ("person_age", self.person_age, 18.0, 100.0),
            ("person_emp_exp", self.person_emp_exp, 0.0, 50.0),
            ("person_income", self.person_income, 0.0, f64::MAX),
            ("loan_amnt", self.loan_amnt, 0.0, f64::MAX),
            ("loan_int_rate", self.loan_int_rate, 0.0, 30.0),
            (
                "cb_person_cred_hist_length",
                self.cb_person_cred_hist_length,
                0.0,
                50.0,
            ),
            ("credit_score", self.credit_score, 300.0, 850.0),
        ];

        for (field, value, min, max) in ranges {
            if value < min || value > max {
                if max == f64::MAX {
                    violations.push(format!("{} must be at least {}", field, min));
                } else {
                    violations.push(format!("{} must be between {} and {}", field, min, max));
                }
            }
        }

        match self.previous_loan_defaults_on_file.as_deref() {
            Some("Yes") | Some("No") => {}
            _ => violations.push("previous_loan_defaults_on_file must be \"Yes\" or \"No\"".into()),
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }
}
