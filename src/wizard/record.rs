//! The thought record being filled in
//!
//! One `ThoughtRecord` exists per session. It is mutated in place as the user
//! works through the steps and replaced with `ThoughtRecord::default()` on
//! completion.

use std::fmt;

use crate::error::{ReframeError, ReframeResult};

/// Lowest value on the intensity slider
pub const MIN_INTENSITY: u8 = 1;

/// Highest value on the intensity slider
pub const MAX_INTENSITY: u8 = 10;

/// Slider position for a fresh record
pub const DEFAULT_INTENSITY: u8 = 5;

/// The six answers collected by the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThoughtRecord {
    /// What situation triggered the thought
    pub situation: String,
    /// The automatic thought itself
    pub automatic_thought: String,
    /// How intense the associated emotion is (1-10)
    pub emotion_intensity: u8,
    /// Evidence supporting the thought
    pub evidence: String,
    /// Evidence against the thought
    pub counter_evidence: String,
    /// The reframed, balanced perspective
    pub balanced_perspective: String,
}

impl Default for ThoughtRecord {
    fn default() -> Self {
        Self {
            situation: String::new(),
            automatic_thought: String::new(),
            emotion_intensity: DEFAULT_INTENSITY,
            evidence: String::new(),
            counter_evidence: String::new(),
            balanced_perspective: String::new(),
        }
    }
}

/// Names one field of a `ThoughtRecord`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Situation,
    AutomaticThought,
    EmotionIntensity,
    Evidence,
    CounterEvidence,
    BalancedPerspective,
}

impl Field {
    /// All fields in wizard order
    pub const ALL: [Field; 6] = [
        Field::Situation,
        Field::AutomaticThought,
        Field::EmotionIntensity,
        Field::Evidence,
        Field::CounterEvidence,
        Field::BalancedPerspective,
    ];

    /// Whether the field holds free text
    pub fn is_text(self) -> bool {
        !matches!(self, Field::EmotionIntensity)
    }

    /// Stable identifier, used in log events
    pub fn key(self) -> &'static str {
        match self {
            Field::Situation => "situation",
            Field::AutomaticThought => "automatic_thought",
            Field::EmotionIntensity => "emotion_intensity",
            Field::Evidence => "evidence",
            Field::CounterEvidence => "counter_evidence",
            Field::BalancedPerspective => "balanced_perspective",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Field::Situation => "Situation",
            Field::AutomaticThought => "Automatic thought",
            Field::EmotionIntensity => "Emotion intensity",
            Field::Evidence => "Evidence",
            Field::CounterEvidence => "Counter-evidence",
            Field::BalancedPerspective => "Balanced perspective",
        };
        write!(f, "{}", label)
    }
}

/// A value written into a field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Intensity(u8),
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<u8> for FieldValue {
    fn from(value: u8) -> Self {
        FieldValue::Intensity(value)
    }
}

/// Clamp a slider value into the 1-10 range
pub fn clamp_intensity(value: u8) -> u8 {
    value.clamp(MIN_INTENSITY, MAX_INTENSITY)
}

impl ThoughtRecord {
    /// Create an empty record with the slider at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Borrow a text field, or `None` for the intensity field
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Situation => Some(&self.situation),
            Field::AutomaticThought => Some(&self.automatic_thought),
            Field::EmotionIntensity => None,
            Field::Evidence => Some(&self.evidence),
            Field::CounterEvidence => Some(&self.counter_evidence),
            Field::BalancedPerspective => Some(&self.balanced_perspective),
        }
    }

    fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Situation => Some(&mut self.situation),
            Field::AutomaticThought => Some(&mut self.automatic_thought),
            Field::EmotionIntensity => None,
            Field::Evidence => Some(&mut self.evidence),
            Field::CounterEvidence => Some(&mut self.counter_evidence),
            Field::BalancedPerspective => Some(&mut self.balanced_perspective),
        }
    }

    /// Whether a field counts as answered
    ///
    /// Text fields are answered when non-empty; the intensity always is.
    pub fn is_filled(&self, field: Field) -> bool {
        self.text(field).map_or(true, |text| !text.is_empty())
    }

    /// Write a value into a field
    ///
    /// Intensities are clamped to 1-10. Writing text into the intensity field
    /// (or a number into a text field) is rejected.
    pub fn set(&mut self, field: Field, value: FieldValue) -> ReframeResult<()> {
        match (field, value) {
            (Field::EmotionIntensity, FieldValue::Intensity(v)) => {
                self.emotion_intensity = clamp_intensity(v);
                Ok(())
            }
            (Field::EmotionIntensity, FieldValue::Text(_)) => Err(ReframeError::Validation(
                format!("{} takes a number from 1 to 10", field),
            )),
            (_, FieldValue::Intensity(_)) => Err(ReframeError::Validation(format!(
                "{} takes free text",
                field
            ))),
            (_, FieldValue::Text(text)) => {
                if let Some(slot) = self.text_mut(field) {
                    *slot = text;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record() {
        let record = ThoughtRecord::default();
        assert_eq!(record.emotion_intensity, DEFAULT_INTENSITY);
        for field in Field::ALL.iter().filter(|f| f.is_text()) {
            assert_eq!(record.text(*field), Some(""));
            assert!(!record.is_filled(*field));
        }
        assert!(record.is_filled(Field::EmotionIntensity));
    }

    #[test]
    fn test_field_keys_are_distinct() {
        let keys: std::collections::HashSet<_> = Field::ALL.iter().map(|f| f.key()).collect();
        assert_eq!(keys.len(), Field::ALL.len());
        assert_eq!(Field::CounterEvidence.key(), "counter_evidence");
    }

    #[test]
    fn test_set_text_field() {
        let mut record = ThoughtRecord::new();
        record.set(Field::Evidence, "Late twice before".into()).unwrap();
        assert_eq!(record.evidence, "Late twice before");
        assert!(record.is_filled(Field::Evidence));
    }

    #[test]
    fn test_whitespace_counts_as_filled() {
        let mut record = ThoughtRecord::new();
        record.set(Field::Situation, " ".into()).unwrap();
        assert!(record.is_filled(Field::Situation));
    }

    #[test]
    fn test_intensity_is_clamped() {
        let mut record = ThoughtRecord::new();
        record.set(Field::EmotionIntensity, 0u8.into()).unwrap();
        assert_eq!(record.emotion_intensity, MIN_INTENSITY);
        record.set(Field::EmotionIntensity, 42u8.into()).unwrap();
        assert_eq!(record.emotion_intensity, MAX_INTENSITY);
    }

    #[test]
    fn test_mismatched_value_is_rejected() {
        let mut record = ThoughtRecord::new();
        let err = record.set(Field::EmotionIntensity, "eight".into()).unwrap_err();
        assert!(err.is_validation());
        let err = record.set(Field::Situation, 3u8.into()).unwrap_err();
        assert!(err.is_validation());
        assert_eq!(record, ThoughtRecord::default());
    }
}
