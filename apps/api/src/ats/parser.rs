//! Response Parser: turns the model's free-text reply into a `ScoreResult`.
//!
//! Two tiers:
//! 1. Strict JSON: the body of a `json` code fence if present, else the whole
//!    trimmed reply, parsed as a JSON object.
//! 2. Field recovery: when tier 1 fails, each field is searched for
//!    independently in the *raw* reply with a case-insensitive pattern.
//!
//! Neither tier can fail. A field nobody can find keeps its default
//! (empty string / 0), so callers always receive a complete result.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};

use crate::ats::models::{clamp_score, CandidateProfile, CategoryScores, ScoreResult};

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("fence pattern is valid"));

/// How the result was obtained. Both variants carry a complete result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Parsed(ScoreResult),
    PartiallyRecovered(ScoreResult),
}

impl ParseOutcome {
    pub fn result(&self) -> &ScoreResult {
        match self {
            ParseOutcome::Parsed(r) | ParseOutcome::PartiallyRecovered(r) => r,
        }
    }

    pub fn into_result(self) -> ScoreResult {
        match self {
            ParseOutcome::Parsed(r) | ParseOutcome::PartiallyRecovered(r) => r,
        }
    }

    pub fn is_recovered(&self) -> bool {
        matches!(self, ParseOutcome::PartiallyRecovered(_))
    }
}

/// Parses a raw model reply. Pure: the same input always yields the same outcome.
pub fn parse_score_reply(raw: &str) -> ParseOutcome {
    match serde_json::from_str::<Value>(json_candidate(raw)) {
        Ok(Value::Object(map)) => ParseOutcome::Parsed(from_json(&map)),
        _ => ParseOutcome::PartiallyRecovered(recover_fields(raw)),
    }
}

/// The text handed to the strict parser: fenced body if any, else the whole reply.
fn json_candidate(raw: &str) -> &str {
    FENCED_JSON
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .unwrap_or_else(|| raw.trim())
}

// ────────────────────────────────────────────────────────────────────────────
// Tier 1: strict JSON
// ────────────────────────────────────────────────────────────────────────────

fn from_json(map: &Map<String, Value>) -> ScoreResult {
    let categories = map.get("categoryScores").and_then(Value::as_object);
    let category = |key: &str| score_value(categories.and_then(|c| c.get(key)));

    ScoreResult {
        overall_score: score_value(map.get("score")),
        profile: CandidateProfile {
            name: text_value(map.get("name")),
            contact: text_value(map.get("contact")),
            skills: text_value(map.get("skills")),
            education: text_value(map.get("education")),
            experience: text_value(map.get("experience")),
        },
        category_scores: CategoryScores {
            skills_match: category("skillsMatch"),
            experience_relevance: category("experienceRelevance"),
            education_alignment: category("educationAlignment"),
            keyword_optimization: category("keywordOptimization"),
            overall_presentation: category("overallPresentation"),
        },
        improvement_suggestions: text_value(map.get("improvementSuggestions")),
    }
}

/// Integers pass through, floats round, numeric strings are accepted.
/// Anything else is 0. The result is always clamped to 0..=100.
fn score_value(value: Option<&Value>) -> u8 {
    let raw = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| n.as_f64().map(|f| f.round() as i64)),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok().map(|f| f.round() as i64),
        _ => None,
    };
    raw.map(clamp_score).unwrap_or(0)
}

/// Models sometimes answer with lists or numbers where a string was asked for.
fn text_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Some(other) => other.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tier 2: per-field recovery
// ────────────────────────────────────────────────────────────────────────────

struct FieldPatterns {
    name: Regex,
    contact: Regex,
    skills: Regex,
    education: Regex,
    experience: Regex,
    improvement_suggestions: Regex,
    score: Regex,
    skills_match: Regex,
    experience_relevance: Regex,
    education_alignment: Regex,
    keyword_optimization: Regex,
    overall_presentation: Regex,
}

static PATTERNS: Lazy<FieldPatterns> = Lazy::new(|| FieldPatterns {
    name: text_pattern("name"),
    contact: text_pattern("contact"),
    skills: text_pattern("skills"),
    education: text_pattern("education"),
    experience: text_pattern("experience"),
    improvement_suggestions: text_pattern("improvementSuggestions"),
    score: number_pattern("score"),
    skills_match: number_pattern("skillsMatch"),
    experience_relevance: number_pattern("experienceRelevance"),
    education_alignment: number_pattern("educationAlignment"),
    keyword_optimization: number_pattern("keywordOptimization"),
    overall_presentation: number_pattern("overallPresentation"),
});

fn text_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#"(?i)"{key}"\s*:\s*"([^"]+)""#)).expect("text field pattern is valid")
}

fn number_pattern(key: &str) -> Regex {
    Regex::new(&format!(r#"(?i)"{key}"\s*:\s*(-?\d+(?:\.\d+)?(?:[eE][+-]?\d+)?)"#)).expect("number field pattern is valid")
}

fn recover_fields(raw: &str) -> ScoreResult {
    let p = &*PATTERNS;
    let text = |re: &Regex| {
        re.captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default()
    };
    let number = |re: &Regex| {
        re.captures(raw)
            .and_then(|c| c.get(1))
            .map(|m| clamp_score(parse_number_saturating(m.as_str())))
            .unwrap_or(0)
    };

    ScoreResult {
        overall_score: number(&p.score),
        profile: CandidateProfile {
            name: text(&p.name),
            contact: text(&p.contact),
            skills: text(&p.skills),
            education: text(&p.education),
            experience: text(&p.experience),
        },
        category_scores: CategoryScores {
            skills_match: number(&p.skills_match),
            experience_relevance: number(&p.experience_relevance),
            education_alignment: number(&p.education_alignment),
            keyword_optimization: number(&p.keyword_optimization),
            overall_presentation: number(&p.overall_presentation),
        },
        improvement_suggestions: text(&p.improvement_suggestions),
    }
}

/// Overlong digit runs and exponents past f64 range saturate instead of being dropped.
fn parse_number_saturating(literal: &str) -> i64 {
    literal.parse::<f64>().map(|f| f.round() as i64).unwrap_or(0)
}
