use serde::{Deserialize, Serialize};

/// One row of the happiness dataset: a country, its overall rank and score,
/// and the six contributing factor scores.
///
/// Field names in JSON are the original human-readable CSV column names, so
/// the API response matches the dataset header exactly. Numeric fields are
/// optional: a missing or non-numeric cell becomes `None`, which serializes
/// to JSON `null`. Callers must tolerate null numeric fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Country or region")]
    pub country: String,

    #[serde(rename = "Overall rank")]
    pub overall_rank: Option<u32>,

    #[serde(rename = "Score")]
    pub score: Option<f64>,

    #[serde(rename = "GDP per capita")]
    pub gdp_per_capita: Option<f64>,

    #[serde(rename = "Social support")]
    pub social_support: Option<f64>,

    #[serde(rename = "Healthy life expectancy")]
    pub healthy_life_expectancy: Option<f64>,

    #[serde(rename = "Freedom to make life choices")]
    pub freedom_to_make_life_choices: Option<f64>,

    #[serde(rename = "Generosity")]
    pub generosity: Option<f64>,

    #[serde(rename = "Perceptions of corruption")]
    pub perceptions_of_corruption: Option<f64>,
}

impl Record {
    /// Returns true when the record has no usable score. Such records are
    /// excluded from scale domains and rendered as degenerate bars.
    pub fn is_degenerate(&self) -> bool {
        self.score.is_none()
    }
}
