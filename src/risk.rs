//! Rule-based risk banding.
//!
//! Stands in for the scoring backend when it cannot answer, and supplies the
//! factor table the renderer shows when a verdict carries none. The weights
//! and probabilities are fixed constants the front end already relies on.

use crate::models::{AnalysisFactor, FactorStatus, PredictionResult};
use crate::transform::{coerce_number, loan_percent_income, Submission};

pub const DEFAULT_INCOME: f64 = 50_000.0;
pub const DEFAULT_CREDIT_SCORE: f64 = 750.0;
pub const DEFAULT_RATIO: f64 = 0.2;

pub const APPROVED_PROBABILITY: f64 = 0.82;
pub const REFUSED_PROBABILITY: f64 = 0.09;

const CREDIT_SCORE_WEIGHT: f64 = 28.5;
const INCOME_WEIGHT: f64 = 22.3;
const RATIO_WEIGHT: f64 = 19.8;
const DEFAULTS_WEIGHT: f64 = 15.2;

const APPROVED_REASON: &str = "Profil favorable : score de crédit solide, revenus suffisants \
     et ratio prêt/revenu maîtrisé, sans défaut de paiement antérieur.";
const REFUSED_REASON: &str = "Profil à risque : au moins un critère (score de crédit, revenu, \
     ratio prêt/revenu ou défauts antérieurs) ne satisfait pas les seuils d'approbation.";
const UNAVAILABLE_REASON: &str = "Service d'analyse indisponible : la demande n'a pas pu être \
     lue. Veuillez vérifier les informations saisies puis réessayer.";

/// The four inputs the heuristic looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskInputs {
    pub credit_score: f64,
    pub income: f64,
    pub ratio: f64,
    pub no_defaults: bool,
}

impl Default for RiskInputs {
    fn default() -> Self {
        Self {
            credit_score: DEFAULT_CREDIT_SCORE,
            income: DEFAULT_INCOME,
            ratio: DEFAULT_RATIO,
            no_defaults: true,
        }
    }
}

impl RiskInputs {
    /// Read the inputs back from a raw submission, defaulting what is missing.
    ///
    /// The ratio is recomputed when amount and income are both positive, then
    /// falls back to the submitted `loan_percent_income`, then to 0.2.
    pub fn from_submission(submission: &Submission) -> Self {
        let income = coerce_number(submission.get("person_income"));
        let loan = coerce_number(submission.get("loan_amnt"));
        let ratio = match (loan, income) {
            (Some(loan), Some(income)) if loan > 0.0 && income > 0.0 => {
                loan_percent_income(loan, income)
            }
            _ => coerce_number(submission.get("loan_percent_income")).unwrap_or(DEFAULT_RATIO),
        };

        Self {
            credit_score: coerce_number(submission.get("credit_score"))
                .unwrap_or(DEFAULT_CREDIT_SCORE),
            income: income.unwrap_or(DEFAULT_INCOME),
            ratio,
            no_defaults: submission
                .get("previous_loan_defaults_on_file")
                .and_then(|v| v.as_str())
                == Some("No"),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.credit_score > 700.0
            && self.income > 40_000.0
            && self.ratio < 0.3
            && self.no_defaults
    }
}

pub fn credit_score_status(score: f64) -> FactorStatus {
    if score >= 750.0 {
        FactorStatus::Favorable
    } else if score >= 650.0 {
        FactorStatus::Neutre
    } else {
        FactorStatus::Risque
    }
}

pub fn income_status(income: f64) -> FactorStatus {
    if income >= 50_000.0 {
        FactorStatus::Favorable
    } else if income >= 30_000.0 {
        FactorStatus::Neutre
    } else {
        FactorStatus::Risque
    }
}

pub fn ratio_status(ratio: f64) -> FactorStatus {
    if ratio < 0.25 {
        FactorStatus::Favorable
    } else if ratio < 0.35 {
        FactorStatus::Neutre
    } else {
        FactorStatus::Risque
    }
}

/// Factor table for a set of inputs, in display order.
pub fn factor_table(inputs: &RiskInputs) -> Vec<AnalysisFactor> {
    vec![
        AnalysisFactor {
            name: "Score de Crédit".to_string(),
            value: format!("{:.0}", inputs.credit_score),
            status: credit_score_status(inputs.credit_score),
            importance: CREDIT_SCORE_WEIGHT,
        },
        AnalysisFactor {
            name: "Revenu Annuel".to_string(),
            value: format!("{} €", format_thousands(inputs.income)),
            status: income_status(inputs.income),
            importance: INCOME_WEIGHT,
        },
        AnalysisFactor {
            name: "Ratio Prêt/Revenu".to_string(),
            value: format!("{:.1}%", inputs.ratio * 100.0),
            status: ratio_status(inputs.ratio),
            importance: RATIO_WEIGHT,
        },
        AnalysisFactor {
            name: "Défauts Antérieurs".to_string(),
            value: if inputs.no_defaults { "Non" } else { "Oui" }.to_string(),
            status: if inputs.no_defaults {
                FactorStatus::Favorable
            } else {
                FactorStatus::Risque
            },
            importance: DEFAULTS_WEIGHT,
        },
    ]
}

/// Heuristic verdict for a set of inputs.
pub fn assess(inputs: &RiskInputs) -> PredictionResult {
    let approved = inputs.is_approved();

    PredictionResult {
        approved,
        probability: if approved {
            APPROVED_PROBABILITY
        } else {
            REFUSED_PROBABILITY
        },
        reason: if approved {
            APPROVED_REASON
        } else {
            REFUSED_REASON
        }
        .to_string(),
        analysis_factors: factor_table(inputs),
        prediction: Some(if approved { 1.0 } else { 0.0 }),
        feature_importance: None,
    }
}

/// Canned refusal for submissions that cannot be read at all.
pub fn terminal_result() -> PredictionResult {
    let unavailable = |name: &str, importance: f64| AnalysisFactor {
        name: name.to_string(),
        value: "N/A".to_string(),
        status: FactorStatus::Neutre,
        importance,
    };

    PredictionResult {
        approved: false,
        probability: REFUSED_PROBABILITY,
        reason: UNAVAILABLE_REASON.to_string(),
        analysis_factors: vec![
            unavailable("Score de Crédit", CREDIT_SCORE_WEIGHT),
            unavailable("Revenu Annuel", INCOME_WEIGHT),
            unavailable("Ratio Prêt/Revenu", RATIO_WEIGHT),
        ],
        prediction: Some(0.0),
        feature_importance: None,
    }
}

/// Group the integer part of an amount by thousands ("1 250 000").
pub fn format_thousands(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    if rounded < 0.0 {
        grouped.insert(0, '-');
    }
    grouped
}
