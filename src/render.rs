//! Display model for a verdict.

use crate::form::FormValues;
use crate::models::{AnalysisFactor, PredictionResult};
use crate::risk;
use serde::{Deserialize, Serialize};

const APPROVED_ADVICE: &str = "Votre profil présente des caractéristiques favorables. \
     Nous vous recommandons de maintenir une bonne gestion de vos finances pour préserver \
     votre éligibilité.";
const REFUSED_ADVICE: &str = "Votre dossier présente certains points à améliorer. \
     Nous vous conseillons de renforcer votre score de crédit et de réduire votre ratio \
     dette/revenu pour de futures demandes.";

/// Qualitative reading of the approval probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProbabilityBand {
    #[serde(rename = "Élevée")]
    Elevee,
    Moyenne,
    Basse,
}

impl ProbabilityBand {
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            ProbabilityBand::Elevee
        } else if probability > 0.4 {
            ProbabilityBand::Moyenne
        } else {
            ProbabilityBand::Basse
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProbabilityBand::Elevee => "Élevée",
            ProbabilityBand::Moyenne => "Moyenne",
            ProbabilityBand::Basse => "Basse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedVerdict {
    /// "Accordé" or "Refusé".
    pub label: String,
    /// Upper-case banner text.
    pub headline: String,
    /// Probability as a whole percentage.
    pub probability_percent: u32,
    pub band: ProbabilityBand,
    pub factors: Vec<AnalysisFactor>,
    pub reason: String,
    pub advice: String,
}

/// Build the display model for a verdict.
///
/// When the verdict carries no factors, the table is derived from the current
/// form values through the same banding the fallback heuristic uses.
pub fn render(result: &PredictionResult, form: &FormValues) -> RenderedVerdict {
    let (label, headline, advice) = if result.approved {
        ("Accordé", "ACCORDÉ", APPROVED_ADVICE)
    } else {
        ("Refusé", "REFUSÉ", REFUSED_ADVICE)
    };

    let probability = result.probability.clamp(0.0, 1.0);
    let factors = if result.analysis_factors.is_empty() {
        risk::factor_table(&form.risk_inputs())
    } else {
        result.analysis_factors.clone()
    };

    RenderedVerdict {
        label: label.to_string(),
        headline: headline.to_string(),
        probability_percent: (probability * 100.0).round() as u32,
        band: ProbabilityBand::from_probability(probability),
        factors,
        reason: result.reason.clone(),
        advice: advice.to_string(),
    }
}
