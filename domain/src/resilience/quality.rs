//! Response quality gate
//!
//! An answer is acceptable when it is long enough and actually talks about
//! vehicles. The vocabulary is a substring test on the lowercased text.

const BRANDS: &[&str] = &[
    "toyota",
    "honda",
    "ford",
    "bmw",
    "tesla",
    "hyundai",
    "chevrolet",
    "nissan",
    "kia",
    "subaru",
    "mazda",
    "volkswagen",
    "audi",
    "mercedes",
    "lexus",
];

const MODELS: &[&str] = &["camry", "cr-v", "model 3", "f-150", "x3", "elantra"];

const DOMAIN_TERMS: &[&str] = &[
    "vehicle",
    "car",
    "suv",
    "sedan",
    "truck",
    "inventory",
    "recommend",
    "price",
    "mpg",
];

/// Outcome of the quality gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QualityVerdict {
    Acceptable,
    TooShort { chars: usize, min: usize },
    OffTopic,
}

impl QualityVerdict {
    pub fn is_acceptable(&self) -> bool {
        matches!(self, QualityVerdict::Acceptable)
    }
}

impl std::fmt::Display for QualityVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QualityVerdict::Acceptable => write!(f, "acceptable"),
            QualityVerdict::TooShort { chars, min } => {
                write!(f, "response too short ({} < {} chars)", chars, min)
            }
            QualityVerdict::OffTopic => write!(f, "response does not mention any vehicle terms"),
        }
    }
}

pub fn assess_quality(output: &str, min_chars: usize) -> QualityVerdict {
    let trimmed = output.trim();
    let chars = trimmed.chars().count();
    if chars < min_chars {
        return QualityVerdict::TooShort {
            chars,
            min: min_chars,
        };
    }

    let lower = trimmed.to_lowercase();
    let on_topic = BRANDS
        .iter()
        .chain(MODELS)
        .chain(DOMAIN_TERMS)
        .any(|term| lower.contains(term));

    if on_topic {
        QualityVerdict::Acceptable
    } else {
        QualityVerdict::OffTopic
    }
}

pub fn is_quality(output: &str, min_chars: usize) -> bool {
    assess_quality(output, min_chars).is_acceptable()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_output_rejected() {
        assert_eq!(
            assess_quality("  Buy a Camry.  ", 50),
            QualityVerdict::TooShort { chars: 12, min: 50 }
        );
    }

    #[test]
    fn test_on_topic_output_accepted() {
        let output = "The Toyota Camry Hybrid is a strong pick at $28,000 with 51 city MPG.";
        assert!(is_quality(output, 50));
    }

    #[test]
    fn test_off_topic_output_rejected() {
        let output = "I am sorry, I cannot help with that request at the moment, please retry.";
        assert_eq!(assess_quality(output, 50), QualityVerdict::OffTopic);
    }

    #[test]
    fn test_case_insensitive_vocabulary() {
        let output = "Our INVENTORY has a few options that match what you are looking for today.";
        assert!(is_quality(output, 50));
    }
}
