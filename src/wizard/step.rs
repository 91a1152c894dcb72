//! Wizard steps and what each one shows
//!
//! `Step` has exactly six variants, so a step outside 1..=6 cannot be
//! constructed. Everything a screen needs is derived from `(record, step)` by
//! [`step_view`].

use std::fmt;

use crate::error::{ReframeError, ReframeResult};

use super::record::{Field, ThoughtRecord};

/// Number of steps in the wizard
pub const STEP_COUNT: u8 = 6;

/// One screen of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    #[default]
    Situation,
    AutomaticThought,
    EmotionIntensity,
    Evidence,
    CounterEvidence,
    BalancedPerspective,
}

/// Icon shown next to the step counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepIcon {
    Brain,
    Smile,
    Lightbulb,
}

impl StepIcon {
    /// Terminal glyph for the icon
    pub fn glyph(self) -> &'static str {
        match self {
            StepIcon::Brain => "🧠",
            StepIcon::Smile => "🙂",
            StepIcon::Lightbulb => "💡",
        }
    }
}

/// The button at the bottom of the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryAction {
    Next,
    Complete,
}

impl fmt::Display for PrimaryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimaryAction::Next => write!(f, "Next"),
            PrimaryAction::Complete => write!(f, "Complete"),
        }
    }
}

impl Step {
    /// All steps in order
    pub const ALL: [Step; 6] = [
        Step::Situation,
        Step::AutomaticThought,
        Step::EmotionIntensity,
        Step::Evidence,
        Step::CounterEvidence,
        Step::BalancedPerspective,
    ];

    /// 1-based step number
    pub fn number(self) -> u8 {
        match self {
            Step::Situation => 1,
            Step::AutomaticThought => 2,
            Step::EmotionIntensity => 3,
            Step::Evidence => 4,
            Step::CounterEvidence => 5,
            Step::BalancedPerspective => 6,
        }
    }

    /// Step for a 1-based number
    pub fn from_number(number: u8) -> ReframeResult<Self> {
        Step::ALL
            .get(usize::from(number).wrapping_sub(1))
            .copied()
            .ok_or(ReframeError::InvalidStep(number))
    }

    /// The following step, or `None` on the last one
    pub fn next(self) -> Option<Step> {
        Step::ALL.get(usize::from(self.number())).copied()
    }

    /// Whether this is the final step
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    /// Field edited on this step
    pub fn field(self) -> Field {
        match self {
            Step::Situation => Field::Situation,
            Step::AutomaticThought => Field::AutomaticThought,
            Step::EmotionIntensity => Field::EmotionIntensity,
            Step::Evidence => Field::Evidence,
            Step::CounterEvidence => Field::CounterEvidence,
            Step::BalancedPerspective => Field::BalancedPerspective,
        }
    }

    /// Field that must be non-empty before leaving this step
    ///
    /// The intensity step has none; every other step gates on its own field.
    pub fn required_field(self) -> Option<Field> {
        let field = self.field();
        field.is_text().then_some(field)
    }

    /// Question asked on this step
    pub fn prompt(self) -> &'static str {
        match self {
            Step::Situation => "What situation triggered your thought?",
            Step::AutomaticThought => "What automatic thought are you having?",
            Step::EmotionIntensity => {
                "How intense is the emotion associated with this thought? (1-10)"
            }
            Step::Evidence => "What evidence supports this thought?",
            Step::CounterEvidence => "What evidence goes against this thought?",
            Step::BalancedPerspective => "What's a more balanced perspective?",
        }
    }

    /// Placeholder for an empty text input
    pub fn placeholder(self) -> &'static str {
        match self {
            Step::Situation => "Describe the situation...",
            Step::AutomaticThought => "Write your automatic thought...",
            Step::EmotionIntensity => "",
            Step::Evidence => "List the evidence...",
            Step::CounterEvidence => "List counter-evidence...",
            Step::BalancedPerspective => "Write a balanced perspective...",
        }
    }

    pub fn icon(self) -> StepIcon {
        match self {
            Step::Situation | Step::AutomaticThought | Step::BalancedPerspective => StepIcon::Brain,
            Step::EmotionIntensity => StepIcon::Smile,
            Step::Evidence | Step::CounterEvidence => StepIcon::Lightbulb,
        }
    }

    pub fn primary_action(self) -> PrimaryAction {
        if self.is_last() {
            PrimaryAction::Complete
        } else {
            PrimaryAction::Next
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Step {} of {}", self.number(), STEP_COUNT)
    }
}

/// What the current step's input holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepInput<'a> {
    Text {
        value: &'a str,
        placeholder: &'static str,
    },
    Slider {
        value: u8,
    },
}

/// Everything needed to draw one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepView<'a> {
    pub step: Step,
    pub prompt: &'static str,
    pub icon: StepIcon,
    pub field: Field,
    pub input: StepInput<'a>,
    pub action: PrimaryAction,
    /// Whether the primary action is currently available
    pub action_enabled: bool,
}

/// Build the view for a step from the record
pub fn step_view(record: &ThoughtRecord, step: Step) -> StepView<'_> {
    let field = step.field();
    let input = match record.text(field) {
        Some(value) => StepInput::Text {
            value,
            placeholder: step.placeholder(),
        },
        None => StepInput::Slider {
            value: record.emotion_intensity,
        },
    };
    let action_enabled = step
        .required_field()
        .map_or(true, |required| record.is_filled(required));

    StepView {
        step,
        prompt: step.prompt(),
        icon: step.icon(),
        field,
        input,
        action: step.primary_action(),
        action_enabled,
    }
}
