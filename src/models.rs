use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::DiseaseInfo;

/// Labels the classifier was trained on, in the order of its output vector.
///
/// The training pipeline sorted class folders alphabetically, so the
/// discriminants here must stay in that order.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClassLabel {
    Chickenpox,
    Cowpox,
    #[serde(rename = "HFMD")]
    Hfmd,
    Healthy,
    Measles,
    Monkeypox,
}

impl ClassLabel {
    pub const ALL: [ClassLabel; 6] = [
        ClassLabel::Chickenpox,
        ClassLabel::Cowpox,
        ClassLabel::Hfmd,
        ClassLabel::Healthy,
        ClassLabel::Measles,
        ClassLabel::Monkeypox,
    ];

    /// Maps a position in the model output to its label.
    pub fn from_index(index: usize) -> Option<ClassLabel> {
        Self::ALL.get(index).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClassLabel::Chickenpox => "Chickenpox",
            ClassLabel::Cowpox => "Cowpox",
            ClassLabel::Hfmd => "HFMD",
            ClassLabel::Healthy => "Healthy",
            ClassLabel::Measles => "Measles",
            ClassLabel::Monkeypox => "Monkeypox",
        }
    }
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct PredictionResponse {
    pub prediction: ClassLabel,
    pub confidence: String,
    pub description: &'static str,
    pub symptoms: &'static [&'static str],
    pub actions: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

impl PredictionResponse {
    /// Builds the response body, falling back to placeholder text when the
    /// label has no catalog entry.
    pub fn new(prediction: ClassLabel, probability: f32, info: Option<&'static DiseaseInfo>) -> Self {
        let info = info.unwrap_or(&DiseaseInfo::UNKNOWN);
        Self {
            prediction,
            confidence: format_confidence(probability),
            description: info.description,
            symptoms: info.symptoms,
            actions: info.actions,
            prevention: info.prevention,
        }
    }
}

/// Renders a probability in `[0, 1]` as a percentage with two decimals.
pub fn format_confidence(probability: f32) -> String {
    format!("{:.2}%", probability * 100.0)
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}
