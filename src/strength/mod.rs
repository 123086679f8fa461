// src/strength/mod.rs
//
// Categorical strength scoring: a password earns one point per character
// class it contains, out of {lowercase, uppercase, digit, symbol}.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// A symbol is any character outside the three ASCII classes.
fn is_symbol(c: char) -> bool {
    !c.is_ascii_lowercase() && !c.is_ascii_uppercase() && !c.is_ascii_digit()
}

/// Count the character classes present in the password (0-4).
/// The empty password scores 0.
pub fn score_password(password: &str) -> u8 {
    let mut score = 0;

    if password.chars().any(|c| c.is_ascii_lowercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if password.chars().any(is_symbol) {
        score += 1;
    }

    score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum StrengthLabel {
    Undefined,
    Weak,
    Medium,
    Strong,
}

impl StrengthLabel {
    /// Map a class count to its rating. A score of 0 (empty input) has no
    /// rating and surfaces as `Undefined` rather than `Weak`.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::Undefined,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Medium,
            _ => StrengthLabel::Strong,
        }
    }
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrengthLabel::Undefined => write!(f, "Undefined"),
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Medium => write!(f, "Medium"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// Build a stronger variant of the password by appending one fixed
/// representative per missing class, in the order uppercase, lowercase,
/// digit, symbol. Existing characters are never removed or reordered, and
/// the appended characters are not checked against any exclusion set.
///
/// If every class is already present, the original password is returned with
/// a single `!` appended so the result always grows.
pub fn suggest_stronger(password: &str) -> String {
    let mut suggestion = password.to_string();

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        suggestion.push('A');
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        suggestion.push('a');
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        suggestion.push('1');
    }
    if !password.chars().any(is_symbol) {
        suggestion.push('@');
    }

    if suggestion.len() == password.len() {
        suggestion.push('!');
    }

    suggestion
}

/// One feedback line per missing character class, in the same order the
/// suggestion appends them.
pub fn class_feedback(password: &str) -> Vec<String> {
    let mut feedback = Vec::new();

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        feedback.push("Add lowercase letters for better security".to_string());
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        feedback.push("Add numbers for better security".to_string());
    }
    if !password.chars().any(is_symbol) {
        feedback.push("Add symbols for better security".to_string());
    }

    feedback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_count_character_classes() {
        assert_eq!(score_password(""), 0);
        assert_eq!(score_password("abc"), 1);
        assert_eq!(score_password("ABC"), 1);
        assert_eq!(score_password("123"), 1);
        assert_eq!(score_password("!!!"), 1);
        assert_eq!(score_password("abc123"), 2);
        assert_eq!(score_password("Abc123"), 3);
        assert_eq!(score_password("Abc123!"), 4);
    }

    #[test]
    fn score_is_invariant_under_reordering() {
        assert_eq!(score_password("Abc123!"), score_password("!321cbA"));
        assert_eq!(score_password("abc123"), score_password("3a2b1c"));
    }

    #[test]
    fn non_ascii_characters_count_as_symbols() {
        assert_eq!(score_password("é"), 1);
        assert_eq!(score_password("Abc123é"), 4);
    }

    #[test]
    fn labels_map_from_scores() {
        assert_eq!(StrengthLabel::from_score(0), StrengthLabel::Undefined);
        assert_eq!(StrengthLabel::from_score(1), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_score(2), StrengthLabel::Medium);
        assert_eq!(StrengthLabel::from_score(3), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(4), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_score(4).to_string(), "Strong");
    }

    #[test]
    fn suggestion_appends_one_representative_per_missing_class() {
        assert_eq!(suggest_stronger("abc"), "abcA1@");
        assert_eq!(suggest_stronger("ABC"), "ABCa1@");
        assert_eq!(suggest_stronger("123"), "123Aa@");
        assert_eq!(suggest_stronger("!!!"), "!!!Aa1");
        assert_eq!(suggest_stronger(""), "Aa1@");
    }

    #[test]
    fn suggestion_grows_even_when_all_classes_are_present() {
        assert_eq!(suggest_stronger("Aa1@"), "Aa1@!");
    }

    #[test]
    fn suggestion_never_weakens_and_keeps_the_original_prefix() {
        for input in ["", "abc", "ABC", "123", "!!!", "abc123", "Abc123", "Aa1@"] {
            let suggestion = suggest_stronger(input);
            assert!(suggestion.starts_with(input));
            assert!(suggestion.len() > input.len());
            assert!(score_password(&suggestion) >= score_password(input));
        }
    }

    #[test]
    fn suggestion_reaches_full_score_when_classes_were_missing() {
        for input in ["", "abc", "ABC", "123", "!!!", "abc123", "Abc123"] {
            assert_eq!(score_password(&suggest_stronger(input)), 4);
        }
    }

    #[test]
    fn feedback_lists_missing_classes_in_append_order() {
        assert_eq!(
            class_feedback("abc"),
            vec![
                "Add uppercase letters for better security",
                "Add numbers for better security",
                "Add symbols for better security",
            ]
        );
        assert!(class_feedback("Abc123!").is_empty());
        assert_eq!(class_feedback("").len(), 4);
    }
}
