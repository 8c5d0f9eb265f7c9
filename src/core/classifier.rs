use crate::core::number::{determine_properties, digit_sum, is_perfect, is_prime};
use crate::domain::model::{Classification, ClassificationError};
use crate::domain::ports::FactProvider;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Validates raw input and assembles a [`Classification`].
///
/// The fact lookup is the only I/O and goes through the injected provider.
pub struct NumberClassifier<F: FactProvider> {
    facts: F,
}

impl<F: FactProvider> NumberClassifier<F> {
    pub fn new(facts: F) -> Self {
        Self { facts }
    }

    pub async fn classify(&self, input: &str) -> Result<Classification, ClassificationError> {
        let number = validate(input)?;
        tracing::debug!("Classifying {}", number);

        // O(sqrt n) trial division must not run on an async worker
        let numeric = tokio::task::spawn_blocking(move || classify_number(number));
        let (numeric, fun_fact) = tokio::join!(numeric, self.facts.fetch_fact(number));

        let mut classification = match numeric {
            Ok(classification) => classification,
            Err(e) => {
                tracing::error!("Background classification of {} failed: {}", number, e);
                classify_number(number)
            }
        };
        classification.fun_fact = fun_fact;
        Ok(classification)
    }
}

/// Parses a raw query value into an integer.
///
/// The letter check runs before parsing so that `"abc"` is reported as
/// alphabetic rather than merely invalid. Only the Unicode letter categories
/// count: letter-like numerals such as `Ⅻ` and combining marks do not.
pub fn validate(input: &str) -> Result<i64, ClassificationError> {
    if input.is_empty() {
        return Err(ClassificationError::Missing);
    }

    if input.chars().all(is_letter) {
        return Err(ClassificationError::Alphabetic);
    }

    input
        .parse::<i64>()
        .map_err(|_| ClassificationError::Invalid)
}

fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Every numeric field of a classification; `fun_fact` is left empty.
pub fn classify_number(number: i64) -> Classification {
    Classification {
        number,
        is_prime: is_prime(number),
        is_perfect: is_perfect(number),
        properties: determine_properties(number),
        digit_sum: digit_sum(number),
        fun_fact: String::new(),
    }
}
