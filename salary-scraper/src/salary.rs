use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Salary range attached to a single listing, as reported by a board.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SalaryBounds {
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub currency: Option<String>,
}

impl SalaryBounds {
    pub fn new(lower: Option<f64>, upper: Option<f64>, currency: Option<String>) -> Self {
        Self {
            lower,
            upper,
            currency,
        }
    }

    /// Scalar estimate for this listing in `target_currency`, see [`predict_salary`].
    pub fn predict(&self, target_currency: &str) -> Option<f64> {
        match self.currency.as_deref() {
            Some(currency) => predict_salary(self.lower, self.upper, currency, target_currency),
            None => None,
        }
    }
}

/// Collapse a salary range into one number.
///
/// Returns `None` when the currency differs from `target_currency` or when
/// neither bound is known. A bound of zero counts as unknown, boards use it
/// for "not specified".
pub fn predict_salary(
    lower: Option<f64>,
    upper: Option<f64>,
    currency: &str,
    target_currency: &str,
) -> Option<f64> {
    if currency != target_currency {
        return None;
    }
    let lower = lower.filter(|value| *value > 0.0);
    let upper = upper.filter(|value| *value > 0.0);
    match (lower, upper) {
        (Some(lower), Some(upper)) => Some((lower + upper) / 2.0),
        (Some(lower), None) => Some(lower * 1.2),
        (None, Some(upper)) => Some(upper * 0.8),
        (None, None) => None,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Other(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Value(value) => Some(value),
            Lenient::Other(_) => None,
        }
    }
}

/// Deserialize a listing field, mapping values of an unexpected type to `None`
/// so one malformed listing does not fail the whole page.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Lenient<T>>::deserialize(deserializer)?.and_then(Lenient::into_option))
}

/// Like [`lenient`] but for every element of a list, malformed elements become `None`.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Vec::<Lenient<T>>::deserialize(deserializer)?;
    Ok(items.into_iter().map(Lenient::into_option).collect())
}
