//! Key case conversion for run results

use super::DataValue;
use serde::{Deserialize, Serialize};

/// Case style applied to the string keys of a results payload
///
/// Words are split on any non-alphanumeric character and on a lowercase
/// letter or digit followed by an uppercase letter.
///
/// ```
/// use lifecycle_logging::KeyTransform;
///
/// assert_eq!(KeyTransform::SnakeCase.apply("accountId"), "account_id");
/// assert_eq!(KeyTransform::CamelCase.apply("account_id"), "accountId");
/// assert_eq!(KeyTransform::Preserve.apply("Account ID"), "Account ID");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyTransform {
    /// Keys are left untouched
    #[default]
    Preserve,
    /// `account_id`
    SnakeCase,
    /// `accountId`
    CamelCase,
    /// `AccountId`
    PascalCase,
    /// `account-id`
    KebabCase,
}

impl KeyTransform {
    pub fn apply(&self, key: &str) -> String {
        if *self == KeyTransform::Preserve {
            return key.to_string();
        }

        let words = split_words(key);
        match self {
            KeyTransform::Preserve => key.to_string(),
            KeyTransform::SnakeCase => lowercase_words(&words).join("_"),
            KeyTransform::KebabCase => lowercase_words(&words).join("-"),
            KeyTransform::PascalCase => words.iter().map(|w| capitalize(w)).collect(),
            KeyTransform::CamelCase => words
                .iter()
                .enumerate()
                .map(|(idx, w)| if idx == 0 { w.to_lowercase() } else { capitalize(w) })
                .collect(),
        }
    }

    /// Rewrite every string map key in `value`, descending into nested maps
    /// and sequences. Non-string keys keep their value.
    pub fn transform_keys(&self, value: DataValue) -> DataValue {
        if *self == KeyTransform::Preserve {
            return value;
        }

        match value {
            DataValue::Map(entries) => DataValue::Map(
                entries
                    .into_iter()
                    .map(|(key, value)| {
                        let key = match key {
                            DataValue::String(s) => DataValue::String(self.apply(&s)),
                            other => other,
                        };
                        (key, self.transform_keys(value))
                    })
                    .collect(),
            ),
            DataValue::Seq(items) => {
                DataValue::Seq(items.into_iter().map(|v| self.transform_keys(v)).collect())
            }
            other => other,
        }
    }
}

fn split_words(key: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev: Option<char> = None;

    for c in key.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev = None;
            continue;
        }

        let boundary = c.is_uppercase()
            && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit());
        if boundary && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        current.push(c);
        prev = Some(c);
    }

    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn lowercase_words(words: &[String]) -> Vec<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
