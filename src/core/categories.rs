use serde::{Deserialize, Serialize};

/// Label for model outputs outside the known category codes
pub const UNKNOWN_LABEL: &str = "Unknown";

/// Weight categories predicted by the classifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    NormalWeight,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub const ALL: [BmiCategory; 4] = [
        BmiCategory::Underweight,
        BmiCategory::NormalWeight,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(BmiCategory::Underweight),
            1 => Some(BmiCategory::NormalWeight),
            2 => Some(BmiCategory::Overweight),
            3 => Some(BmiCategory::Obese),
            _ => None,
        }
    }

    pub fn code(self) -> i64 {
        match self {
            BmiCategory::Underweight => 0,
            BmiCategory::NormalWeight => 1,
            BmiCategory::Overweight => 2,
            BmiCategory::Obese => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::NormalWeight => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Standard threshold classification, used when no model is available
    ///
    /// Ranges are half-open: [0, 18.5), [18.5, 25), [25, 30), [30, inf).
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::NormalWeight
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

/// Human-readable label for a raw model output
pub fn category_label(code: i64) -> &'static str {
    BmiCategory::from_code(code)
        .map(BmiCategory::label)
        .unwrap_or(UNKNOWN_LABEL)
}
