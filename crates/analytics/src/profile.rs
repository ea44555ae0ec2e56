use core_types::{PLACEHOLDER, ProblemKey, Submission};
use std::collections::HashSet;

/// Treats an absent field and an empty string the same way.
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// `"first last"`, or the placeholder when both parts are empty.
///
/// Parts are trimmed and a one-sided name is returned without a dangling space
/// (`"Gennady"`, never `"Gennady "`).
pub fn display_name(first_name: &Option<String>, last_name: &Option<String>) -> String {
    match (non_empty(first_name), non_empty(last_name)) {
        (None, None) => PLACEHOLDER.to_string(),
        (Some(first), None) => first.to_string(),
        (None, Some(last)) => last.to_string(),
        (Some(first), Some(last)) => format!("{} {}", first, last),
    }
}

/// `"city, country"`, just the country when the city is empty, or the placeholder when both are.
pub fn display_location(country: &Option<String>, city: &Option<String>) -> String {
    match (non_empty(country), non_empty(city)) {
        (None, None) => PLACEHOLDER.to_string(),
        (country, None) => country.unwrap_or_default().to_string(),
        (country, Some(city)) => format!("{}, {}", city, country.unwrap_or_default()),
    }
}

pub fn display_organization(organization: &Option<String>) -> String {
    non_empty(organization).unwrap_or(PLACEHOLDER).to_string()
}

/// Upper-cases the first letter of every alphabetic run and lower-cases the rest,
/// so `"legendary grandmaster"` becomes `"Legendary Grandmaster"`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if previous_is_letter {
                result.extend(ch.to_lowercase());
            } else {
                result.extend(ch.to_uppercase());
            }
            previous_is_letter = true;
        } else {
            result.push(ch);
            previous_is_letter = false;
        }
    }
    result
}

/// The distinct problems among accepted submissions.
pub fn solved_problems<'a, I>(submissions: I) -> HashSet<ProblemKey>
where
    I: IntoIterator<Item = &'a Submission>,
{
    submissions
        .into_iter()
        .filter(|sub| sub.is_accepted())
        .map(|sub| ProblemKey::from_problem(&sub.problem))
        .collect()
}
