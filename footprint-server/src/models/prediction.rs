//! Profile prediction model
//!
//! Keyword heuristic guessing what a short public bio gives away.

use serde::{Deserialize, Serialize};

pub const PREDICTION_EXPLANATION: &str =
    "Heuristic prediction based on keyword analysis of the supplied text";

/// (interest, trigger keywords) in reporting order
const INTEREST_KEYWORDS: &[(&str, &[&str])] = &[
    ("football", &["football", "soccer"]),
    ("software development", &["code", "coding", "programming"]),
    ("open source", &["open source", "react", "python"]),
    ("music", &["music", "guitar", "piano"]),
    ("travel", &["travel", "traveling"]),
    ("gaming", &["game", "gaming"]),
    ("reading", &["book", "reading"]),
];

/// (age range, trigger keywords), first match wins
const AGE_KEYWORDS: &[(&str, &[&str])] = &[
    ("18-24", &["uni", "university", "college", "student"]),
    ("55+", &["retired", "grandkids"]),
    ("35-50", &["career", "professional", "experienced"]),
];

const DEFAULT_AGE_RANGE: &str = "25-34";

/// Word sequences after which the next word is taken as a name
const NAME_CUES: &[&[&str]] = &[&["my", "name", "is"], &["i'm"], &["i", "am"], &["call", "me"]];

const BASE_RISK: f64 = 0.15;
const RISK_PER_INTEREST: f64 = 0.08;
const MAX_RISK: f64 = 0.95;

#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub name_guess: String,
    pub age_range: String,
    pub interests: Vec<String>,
    pub risk_score: f64,
    pub explain: String,
}

pub fn predict(text: &str) -> Prediction {
    let lower = text.to_lowercase();

    let interests: Vec<String> = INTEREST_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(interest, _)| interest.to_string())
        .collect();

    let age_range = AGE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(range, _)| *range)
        .unwrap_or(DEFAULT_AGE_RANGE);

    let risk = (BASE_RISK + RISK_PER_INTEREST * interests.len() as f64).min(MAX_RISK);

    Prediction {
        name_guess: guess_name(text).unwrap_or_default(),
        age_range: age_range.to_string(),
        interests: if interests.is_empty() {
            vec!["general".to_string()]
        } else {
            interests
        },
        risk_score: (risk * 100.0).round() / 100.0,
        explain: PREDICTION_EXPLANATION.to_string(),
    }
}

fn guess_name(text: &str) -> Option<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let lowered: Vec<String> = words
        .iter()
        .map(|w| w.to_lowercase().trim_matches(|c: char| ",.!?".contains(c)).to_string())
        .collect();

    for i in 0..words.len() {
        for cue in NAME_CUES {
            let end = i + cue.len();
            if end < words.len() && lowered[i..end].iter().zip(cue.iter()).all(|(w, c)| w == c) {
                let name = words[end].trim_matches(|c: char| ",.!?".contains(c));
                if !name.is_empty() {
                    return Some(name.to_string());
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interests_and_risk() {
        let p = predict("I love football and open source, I write Python code.");
        assert_eq!(p.interests, vec!["football", "software development", "open source"]);
        assert_eq!(p.risk_score, 0.39);
        assert_eq!(p.age_range, "25-34");
    }

    #[test]
    fn test_general_when_nothing_matches() {
        let p = predict("Hello there");
        assert_eq!(p.interests, vec!["general"]);
        assert_eq!(p.risk_score, 0.15);
        assert_eq!(p.name_guess, "");
    }

    #[test]
    fn test_every_interest() {
        let p = predict("football coding python music travel gaming reading");
        assert_eq!(p.interests.len(), 7);
        assert_eq!(p.risk_score, 0.71);
        // Repeated keywords count once
        assert_eq!(predict("football soccer football").risk_score, 0.23);
    }

    #[test]
    fn test_age_range_order() {
        assert_eq!(predict("University student").age_range, "18-24");
        assert_eq!(predict("Retired, love my grandkids").age_range, "55+");
        assert_eq!(predict("Experienced professional").age_range, "35-50");
    }

    #[test]
    fn test_name_guess() {
        assert_eq!(predict("Hi, I'm Alice! I like music").name_guess, "Alice");
        assert_eq!(predict("My name is Bob.").name_guess, "Bob");
        assert_eq!(predict("Just call me Carol, everyone does").name_guess, "Carol");
        assert_eq!(predict("Nothing to see").name_guess, "");
    }
}
