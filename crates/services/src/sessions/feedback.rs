use quiz_core::SubmissionOutcome;
use serde::Serialize;

/// Playback volume for answer sounds.
pub const FEEDBACK_VOLUME: f32 = 0.3;

/// Sound to play after an answer is locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Correct,
    Wrong,
}

impl SoundCue {
    /// Relative asset path of the cue.
    #[must_use]
    pub fn asset(self) -> &'static str {
        match self {
            SoundCue::Correct => "sounds/correct_answer_sound.mp3",
            SoundCue::Wrong => "sounds/wrong_answer_sound.mp3",
        }
    }
}

/// Presentation-agnostic feedback for a locked answer.
///
/// Positions are zero-based indices into the question's answers. The whole
/// answer group is disabled once feedback exists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerFeedback {
    pub correct: bool,
    /// Answer the player picked, marked as right or wrong.
    pub chosen: Option<usize>,
    /// Correct answer to reveal after a miss.
    pub reveal: Option<usize>,
    pub sound: SoundCue,
    pub volume: f32,
}

impl AnswerFeedback {
    #[must_use]
    pub fn from_outcome(outcome: &SubmissionOutcome) -> Self {
        match outcome {
            SubmissionOutcome::Correct {
                chosen_position, ..
            } => Self {
                correct: true,
                chosen: Some(*chosen_position),
                reveal: None,
                sound: SoundCue::Correct,
                volume: FEEDBACK_VOLUME,
            },
            SubmissionOutcome::Incorrect {
                chosen_position,
                correct_position,
                ..
            } => Self {
                correct: false,
                chosen: *chosen_position,
                reveal: Some(*correct_position),
                sound: SoundCue::Wrong,
                volume: FEEDBACK_VOLUME,
            },
        }
    }
}
