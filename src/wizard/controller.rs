//! The wizard state machine
//!
//! Six states, starting at step 1, with no terminal state: completing step 6
//! loops back to step 1 with a fresh record. Transitions that are not allowed
//! are no-ops; the UI draws them as disabled instead of reporting an error.

use tracing::{debug, info};

use crate::error::ReframeResult;

use super::record::{clamp_intensity, Field, FieldValue, ThoughtRecord};
use super::step::{step_view, Step, StepView, STEP_COUNT};

/// Holds the current step and the record being filled in
#[derive(Debug, Clone, Default)]
pub struct WizardController {
    step: Step,
    record: ThoughtRecord,
}

impl WizardController {
    /// Start a new session at step 1 with an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// The current step
    pub fn step(&self) -> Step {
        self.step
    }

    /// The record as filled in so far
    pub fn record(&self) -> &ThoughtRecord {
        &self.record
    }

    /// View of the current step
    pub fn view(&self) -> StepView<'_> {
        step_view(&self.record, self.step)
    }

    /// Fraction of the wizard reached, `step / 6`
    pub fn progress(&self) -> f64 {
        f64::from(self.step.number()) / f64::from(STEP_COUNT)
    }

    /// Write a field on the record
    ///
    /// No gating happens here; any step may write any field.
    pub fn update_field(&mut self, field: Field, value: impl Into<FieldValue>) -> ReframeResult<()> {
        self.record.set(field, value.into())?;
        debug!(
            field = field.key(),
            filled = self.record.is_filled(field),
            "field updated"
        );
        Ok(())
    }

    /// Nudge the intensity slider, staying within 1-10
    pub fn adjust_intensity(&mut self, delta: i8) {
        let current = i16::from(self.record.emotion_intensity);
        let target = (current + i16::from(delta)).clamp(0, i16::from(u8::MAX));
        self.record.emotion_intensity = clamp_intensity(target as u8);
    }

    /// Whether `advance` would move to the next step
    pub fn can_advance(&self) -> bool {
        !self.step.is_last()
            && self
                .step
                .required_field()
                .map_or(true, |field| self.record.is_filled(field))
    }

    /// Whether `complete` would finish the exercise
    pub fn can_complete(&self) -> bool {
        self.step.is_last() && self.record.is_filled(Field::BalancedPerspective)
    }

    /// Move to the next step if the current one is answered
    ///
    /// Returns whether the step changed.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            debug!(step = self.step.number(), "advance blocked");
            return false;
        }

        match self.step.next() {
            Some(next) => {
                info!(from = self.step.number(), to = next.number(), "step advanced");
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Finish the exercise from step 6
    ///
    /// On success the controller is back at step 1 with a default record and
    /// the finished record is handed back for acknowledgment.
    pub fn complete(&mut self) -> Option<ThoughtRecord> {
        if !self.can_complete() {
            debug!(step = self.step.number(), "complete blocked");
            return None;
        }

        let finished = std::mem::take(&mut self.record);
        self.reset();
        info!(
            intensity = finished.emotion_intensity,
            perspective_len = finished.balanced_perspective.chars().count(),
            "thought record completed"
        );
        Some(finished)
    }

    /// Return to step 1 with a default record
    pub fn reset(&mut self) {
        self.step = Step::default();
        self.record = ThoughtRecord::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::record::{DEFAULT_INTENSITY, MAX_INTENSITY, MIN_INTENSITY};

    fn at_step(step: Step) -> WizardController {
        let mut wizard = WizardController::new();
        for field in Field::ALL.iter().filter(|f| f.is_text()) {
            wizard.update_field(*field, "filled").unwrap();
        }
        while wizard.step() != step {
            assert!(wizard.advance());
        }
        wizard.record = ThoughtRecord::default();
        wizard
    }

    #[test]
    fn test_initial_state() {
        let wizard = WizardController::new();
        assert_eq!(wizard.step(), Step::Situation);
        assert_eq!(wizard.record(), &ThoughtRecord::default());
        assert!((wizard.progress() - 1.0 / 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_text_steps_block_until_filled() {
        for step in [
            Step::Situation,
            Step::AutomaticThought,
            Step::Evidence,
            Step::CounterEvidence,
        ] {
            let mut wizard = at_step(step);
            assert!(!wizard.can_advance());
            assert!(!wizard.advance());
            assert_eq!(wizard.step(), step);

            wizard.update_field(step.field(), "answer").unwrap();
            assert!(wizard.advance());
            assert_eq!(wizard.step().number(), step.number() + 1);
        }
    }

    #[test]
    fn test_other_fields_do_not_unblock() {
        let mut wizard = WizardController::new();
        wizard.update_field(Field::Evidence, "not the right one").unwrap();
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::Situation);
    }

    #[test]
    fn test_intensity_step_never_blocks() {
        for value in MIN_INTENSITY..=MAX_INTENSITY {
            let mut wizard = at_step(Step::EmotionIntensity);
            wizard.update_field(Field::EmotionIntensity, value).unwrap();
            assert!(wizard.advance());
            assert_eq!(wizard.step(), Step::Evidence);
        }
    }

    #[test]
    fn test_advance_is_noop_on_last_step() {
        let mut wizard = at_step(Step::BalancedPerspective);
        wizard
            .update_field(Field::BalancedPerspective, "filled")
            .unwrap();
        assert!(!wizard.can_advance());
        assert!(!wizard.advance());
        assert_eq!(wizard.step(), Step::BalancedPerspective);
    }

    #[test]
    fn test_complete_requires_last_step_and_perspective() {
        let mut wizard = WizardController::new();
        wizard
            .update_field(Field::BalancedPerspective, "early")
            .unwrap();
        assert!(wizard.complete().is_none());
        assert_eq!(wizard.step(), Step::Situation);

        let mut wizard = at_step(Step::BalancedPerspective);
        assert!(!wizard.can_complete());
        assert!(wizard.complete().is_none());
        assert_eq!(wizard.step(), Step::BalancedPerspective);
    }

    #[test]
    fn test_complete_resets_to_defaults() {
        let mut wizard = at_step(Step::BalancedPerspective);
        wizard.update_field(Field::Situation, "kept until now").unwrap();
        wizard.update_field(Field::EmotionIntensity, 9u8).unwrap();
        wizard
            .update_field(Field::BalancedPerspective, "balanced")
            .unwrap();

        let finished = wizard.complete().unwrap();
        assert_eq!(finished.situation, "kept until now");
        assert_eq!(finished.emotion_intensity, 9);
        assert_eq!(finished.balanced_perspective, "balanced");

        assert_eq!(wizard.step(), Step::Situation);
        assert_eq!(wizard.record(), &ThoughtRecord::default());
        assert_eq!(wizard.record().emotion_intensity, DEFAULT_INTENSITY);
    }

    #[test]
    fn test_adjust_intensity_clamps() {
        let mut wizard = WizardController::new();
        wizard.adjust_intensity(3);
        assert_eq!(wizard.record().emotion_intensity, 8);
        wizard.adjust_intensity(100);
        assert_eq!(wizard.record().emotion_intensity, MAX_INTENSITY);
        wizard.adjust_intensity(-128);
        assert_eq!(wizard.record().emotion_intensity, MIN_INTENSITY);
    }

    #[test]
    fn test_step_stays_in_range_under_any_sequence() {
        let mut wizard = WizardController::new();
        for round in 0..60u32 {
            match round % 4 {
                0 => {
                    let field = wizard.step().field();
                    if field.is_text() {
                        wizard.update_field(field, "x").unwrap();
                    }
                }
                1 | 2 => {
                    wizard.advance();
                }
                _ => {
                    wizard.complete();
                }
            }
            assert!((1..=6).contains(&wizard.step().number()));
            assert!(wizard.progress() > 0.0 && wizard.progress() <= 1.0);
        }
    }

    #[test]
    fn test_full_scenario() {
        let mut wizard = WizardController::new();

        wizard.update_field(Field::Situation, "Missed deadline").unwrap();
        assert!(wizard.advance());
        assert_eq!(wizard.step().number(), 2);

        wizard
            .update_field(Field::AutomaticThought, "I always fail")
            .unwrap();
        assert!(wizard.advance());
        assert_eq!(wizard.step().number(), 3);

        wizard.update_field(Field::EmotionIntensity, 8u8).unwrap();
        assert!(wizard.advance());
        assert_eq!(wizard.step().number(), 4);

        wizard.update_field(Field::Evidence, "Late twice before").unwrap();
        assert!(wizard.advance());
        assert_eq!(wizard.step().number(), 5);

        wizard
            .update_field(Field::CounterEvidence, "On time most weeks")
            .unwrap();
        assert!(wizard.advance());
        assert_eq!(wizard.step().number(), 6);

        wizard
            .update_field(Field::BalancedPerspective, "One miss isn't a pattern")
            .unwrap();
        let finished = wizard.complete().unwrap();
        assert_eq!(finished.emotion_intensity, 8);

        assert_eq!(wizard.step().number(), 1);
        assert_eq!(wizard.record(), &ThoughtRecord::default());
        assert_eq!(wizard.record().emotion_intensity, 5);
    }
}
