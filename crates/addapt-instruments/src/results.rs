use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::instruments::asrs::AsrsScore;
use crate::instruments::diva::DivaScore;
use crate::instruments::gad7::Gad7Score;
use crate::instruments::phq9::Phq9Score;
use crate::recommendation::overall_recommendation;

/// Scores for every instrument plus the combined recommendation. Always
/// derived from an `Assessment`; never stored on its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResults {
    pub asrs: AsrsScore,
    pub gad7: Gad7Score,
    pub phq9: Phq9Score,
    pub diva: DivaScore,
    pub overall_recommendation: String,
}

impl AssessmentResults {
    pub fn from_scores(asrs: AsrsScore, gad7: Gad7Score, phq9: Phq9Score, diva: DivaScore) -> Self {
        let overall_recommendation = overall_recommendation(&asrs, &gad7, &phq9, &diva);
        Self {
            asrs,
            gad7,
            phq9,
            diva,
            overall_recommendation,
        }
    }

    /// Drives the urgent banner in the presentation layer.
    pub fn requires_urgent_attention(&self) -> bool {
        self.phq9.requires_urgent_attention
    }

    /// ADHD is likely if either the DIVA or the ASRS screen says so.
    pub fn adhd_indicated(&self) -> bool {
        self.diva.meets_dsm_criteria || self.asrs.likely_adhd
    }
}
