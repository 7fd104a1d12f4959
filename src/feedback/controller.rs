//! Per-answer feedback sequencing.
//!
//! The controller owns the transient visual state of every answer control for
//! the question on screen and turns taps into one-shot feedback sequences:
//!
//! ```text
//! Idle ──tap (correct)──▶ Growing ──▶ Shrinking ──▶ Idle
//!                              └─ emit outcome(true)
//! Idle ──tap (wrong)────▶ Flashing + jiggle ──▶ Idle
//!        └─ emit outcome(false) immediately
//! ```
//!
//! Deferred steps go through a virtual-time [`Scheduler`]. Each task carries
//! the generation and question it was scheduled for and is discarded if
//! either no longer matches when it comes due.

use super::scheduler::Scheduler;
use crate::quiz::QuestionId;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, trace};

/// Timing and magnitude of the feedback effects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedbackTimings {
    /// Length of the grow phase (ramp up, then hold); the correct outcome is
    /// emitted when it ends
    pub grow_ms: u64,
    /// Length of the shrink back to normal size
    pub shrink_ms: u64,
    /// How long a wrong answer stays red
    pub flash_ms: u64,
    /// Interval between jiggle displacements
    pub jiggle_step_ms: u64,
    /// Number of alternating jiggle displacements
    pub jiggle_count: u8,
    /// Horizontal jiggle displacement in cells
    pub jiggle_amplitude: i16,
    /// Peak scale of a correct answer
    pub grow_scale: f32,
}

impl Default for FeedbackTimings {
    fn default() -> Self {
        Self {
            grow_ms: 500,
            shrink_ms: 500,
            flash_ms: 500,
            jiggle_step_ms: 60,
            jiggle_count: 4,
            jiggle_amplitude: 2,
            grow_scale: 1.5,
        }
    }
}

impl FeedbackTimings {
    pub fn grow(&self) -> Duration {
        Duration::from_millis(self.grow_ms)
    }

    pub fn shrink(&self) -> Duration {
        Duration::from_millis(self.shrink_ms)
    }

    pub fn flash(&self) -> Duration {
        Duration::from_millis(self.flash_ms)
    }

    pub fn jiggle_step(&self) -> Duration {
        Duration::from_millis(self.jiggle_step_ms)
    }
}

/// Phase of a single answer control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Growing,
    Shrinking,
    Flashing,
}

/// What the presentation layer needs to draw one control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlVisual {
    pub phase: Phase,
    pub scale: f32,
    pub jiggle_offset: i16,
    pub red: bool,
    pub selected_wrong: bool,
}

impl Default for ControlVisual {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            scale: 1.0,
            jiggle_offset: 0,
            red: false,
            selected_wrong: false,
        }
    }
}

/// Result of a tap, reported once per accepted tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackOutcome {
    pub question_id: QuestionId,
    pub answer: String,
    pub correct: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TaskKind {
    EndGrow,
    EndShrink,
    JiggleStep,
    ClearRed,
}

/// Snapshot carried by every deferred step
#[derive(Debug, Clone, Copy)]
struct FeedbackTask {
    generation: u64,
    question_id: QuestionId,
    control: usize,
    kind: TaskKind,
}

#[derive(Debug, Clone)]
struct Control {
    answer: String,
    phase: Phase,
    phase_started: Duration,
    red: bool,
    jiggle_remaining: u8,
    jiggle_offset: i16,
}

impl Control {
    fn new(answer: String) -> Self {
        Self {
            answer,
            phase: Phase::Idle,
            phase_started: Duration::ZERO,
            red: false,
            jiggle_remaining: 0,
            jiggle_offset: 0,
        }
    }

    fn is_active(&self) -> bool {
        self.phase != Phase::Idle || self.jiggle_remaining > 0
    }
}

/// Owns the feedback state of the answer controls for one question at a time.
#[derive(Debug)]
pub struct AnswerFeedbackController {
    timings: FeedbackTimings,
    scheduler: Scheduler<FeedbackTask>,
    generation: u64,
    question_id: Option<QuestionId>,
    controls: Vec<Control>,
    selected_wrong: Option<String>,
}

impl Default for AnswerFeedbackController {
    fn default() -> Self {
        Self::new(FeedbackTimings::default())
    }
}

impl AnswerFeedbackController {
    pub fn new(timings: FeedbackTimings) -> Self {
        Self {
            timings,
            scheduler: Scheduler::new(),
            generation: 0,
            question_id: None,
            controls: Vec::new(),
            selected_wrong: None,
        }
    }

    pub fn timings(&self) -> &FeedbackTimings {
        &self.timings
    }

    /// Current virtual time of the effect clock
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    pub fn question_id(&self) -> Option<QuestionId> {
        self.question_id
    }

    /// Answer currently flagged as wrongly selected, if any
    pub fn selected_wrong(&self) -> Option<&str> {
        self.selected_wrong.as_deref()
    }

    /// Whether any control is still running a sequence
    pub fn is_busy(&self) -> bool {
        self.controls.iter().any(Control::is_active)
    }

    /// Arm the controller for a newly displayed question.
    ///
    /// Every control returns to baseline and all pending effects are cancelled,
    /// including a success emission that has not fired yet.
    pub fn begin_question(&mut self, question_id: QuestionId, answers: &[String]) {
        let cancelled = self.scheduler.pending();
        self.scheduler.cancel_all();
        self.generation = self.generation.wrapping_add(1);
        self.question_id = Some(question_id);
        self.controls = answers.iter().cloned().map(Control::new).collect();
        self.selected_wrong = None;

        debug!(
            "Feedback armed for question {} (generation {}, {} pending effects cancelled)",
            question_id, self.generation, cancelled
        );
    }

    /// Drop all controls, e.g. once the quiz has finished
    pub fn clear(&mut self) {
        self.scheduler.cancel_all();
        self.generation = self.generation.wrapping_add(1);
        self.question_id = None;
        self.controls.clear();
        self.selected_wrong = None;
    }

    /// Handle a tap on the control showing `tapped`.
    ///
    /// A wrong answer is reported immediately. A correct answer is reported
    /// later by [`tick`](Self::tick) when the grow phase ends. Taps while a
    /// sequence is running, or on text that is not displayed, are ignored.
    pub fn on_tap(&mut self, tapped: &str, correct: &str) -> Option<FeedbackOutcome> {
        let question_id = self.question_id?;

        if self.is_busy() {
            debug!("Ignoring tap on {:?}: feedback sequence in flight", tapped);
            return None;
        }

        let Some(index) = self.controls.iter().position(|c| c.answer == tapped) else {
            debug!("Ignoring tap on {:?}: not a displayed answer", tapped);
            return None;
        };

        let now = self.scheduler.now();
        let generation = self.generation;
        let task = |kind| FeedbackTask {
            generation,
            question_id,
            control: index,
            kind,
        };

        if tapped == correct {
            let control = &mut self.controls[index];
            control.phase = Phase::Growing;
            control.phase_started = now;
            self.scheduler.schedule(self.timings.grow(), task(TaskKind::EndGrow));
            debug!("Correct answer {:?} tapped for question {}", tapped, question_id);
            return None;
        }

        let jiggle_count = self.timings.jiggle_count;
        let amplitude = self.timings.jiggle_amplitude;
        let control = &mut self.controls[index];
        control.phase = Phase::Flashing;
        control.phase_started = now;
        control.red = true;
        if jiggle_count > 0 {
            control.jiggle_remaining = jiggle_count;
            control.jiggle_offset = amplitude;
            self.scheduler
                .schedule(self.timings.jiggle_step(), task(TaskKind::JiggleStep));
        }
        self.scheduler.schedule(self.timings.flash(), task(TaskKind::ClearRed));
        self.selected_wrong = Some(tapped.to_string());

        debug!("Wrong answer {:?} tapped for question {}", tapped, question_id);
        Some(FeedbackOutcome {
            question_id,
            answer: tapped.to_string(),
            correct: false,
        })
    }

    /// Advance the effect clock by `dt`, returning outcomes that became due
    pub fn tick(&mut self, dt: Duration) -> Vec<FeedbackOutcome> {
        let deadline = self.scheduler.now() + dt;
        let mut outcomes = Vec::new();
        while let Some(task) = self.scheduler.pop_due(deadline) {
            if let Some(outcome) = self.run(task) {
                outcomes.push(outcome);
            }
        }
        self.scheduler.advance_to(deadline);
        outcomes
    }

    fn run(&mut self, task: FeedbackTask) -> Option<FeedbackOutcome> {
        if task.generation != self.generation || Some(task.question_id) != self.question_id {
            trace!("Dropping stale {:?} for question {}", task.kind, task.question_id);
            return None;
        }

        let now = self.scheduler.now();
        let control = self.controls.get_mut(task.control)?;

        match task.kind {
            TaskKind::EndGrow => {
                control.phase = Phase::Shrinking;
                control.phase_started = now;
                let answer = control.answer.clone();
                self.scheduler
                    .schedule(self.timings.shrink(), FeedbackTask { kind: TaskKind::EndShrink, ..task });
                Some(FeedbackOutcome {
                    question_id: task.question_id,
                    answer,
                    correct: true,
                })
            }
            TaskKind::EndShrink => {
                control.phase = Phase::Idle;
                None
            }
            TaskKind::JiggleStep => {
                control.jiggle_remaining = control.jiggle_remaining.saturating_sub(1);
                if control.jiggle_remaining == 0 {
                    control.jiggle_offset = 0;
                } else {
                    control.jiggle_offset = -control.jiggle_offset;
                    self.scheduler.schedule(self.timings.jiggle_step(), task);
                }
                None
            }
            TaskKind::ClearRed => {
                control.red = false;
                if control.phase == Phase::Flashing {
                    control.phase = Phase::Idle;
                }
                self.selected_wrong = None;
                None
            }
        }
    }

    /// Visual state of the control showing `answer`
    pub fn visual(&self, answer: &str) -> ControlVisual {
        self.controls
            .iter()
            .find(|c| c.answer == answer)
            .map(|c| self.visual_of(c))
            .unwrap_or_default()
    }

    fn visual_of(&self, control: &Control) -> ControlVisual {
        let elapsed = self.scheduler.now().saturating_sub(control.phase_started);
        let peak = self.timings.grow_scale;

        let scale = match control.phase {
            Phase::Growing => {
                // ramp over the first half, hold for the rest
                let ramp = self.timings.grow() / 2;
                1.0 + (peak - 1.0) * progress(elapsed, ramp)
            }
            Phase::Shrinking => peak - (peak - 1.0) * progress(elapsed, self.timings.shrink()),
            Phase::Idle | Phase::Flashing => 1.0,
        };

        ControlVisual {
            phase: control.phase,
            scale,
            jiggle_offset: control.jiggle_offset,
            red: control.red,
            selected_wrong: self.selected_wrong.as_deref() == Some(control.answer.as_str()),
        }
    }
}

fn progress(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}
