//! Repetition state machine as a pure reducer.
//!
//! `classify_frame` takes the session state by value and returns the next
//! state plus any newly armed feedback revert, so the caller owns all
//! persistence and no hidden mutation crosses frames. The caller has already
//! applied throttling and the validity gate.

use crate::common::{Exercise, PoseFrame};
use crate::pipeline::evaluator::{self, curl, press, squat};
use crate::pipeline::session::state::{RepPhase, SessionState, DETECTING};
use std::time::Duration;

/// A pending feedback revert. Only the most recently issued token may
/// restore the detecting placeholder; earlier ones go stale the moment
/// feedback is written again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertHandle {
    pub token: u64,
    pub delay: Duration,
}

/// Result of running one due frame through the state machine.
#[derive(Debug)]
pub struct StepOutcome {
    pub state: SessionState,
    pub revert: Option<RevertHandle>,
}

fn both_below(angles: (f32, f32), limit: f32) -> bool {
    angles.0 < limit && angles.1 < limit
}

fn both_above(angles: (f32, f32), limit: f32) -> bool {
    angles.0 > limit && angles.1 > limit
}

fn next_phase(exercise: Exercise, frame: &PoseFrame) -> RepPhase {
    let in_middle = match exercise {
        Exercise::None => false,
        Exercise::Squats => both_below(squat::knee_angles(frame), 140.0),
        Exercise::BicepCurls => both_below(curl::elbow_angles(frame), 50.0),
        Exercise::ShoulderPress => both_above(press::shoulder_angles(frame), 160.0),
    };
    if in_middle {
        RepPhase::Middle
    } else {
        RepPhase::Start
    }
}

fn summed_knee_angle(frame: &PoseFrame) -> f32 {
    let (left, right) = squat::knee_angles(frame);
    left + right
}

/// Verdict of a completed repetition before it is folded into the state.
struct Verdict {
    good: bool,
    bad: bool,
    feedback: String,
}

/// Squats only count a zero-defect rep after a further depth check; the
/// extremes emit advice without touching either counter. Intentional
/// product behavior, not a bug.
fn squat_verdict(best: &PoseFrame) -> Verdict {
    let defects = squat::evaluate(best);
    if !defects.is_empty() {
        return Verdict {
            good: false,
            bad: true,
            feedback: join_defects(&defects),
        };
    }

    let (left, right) = squat::knee_angles(best);
    let depth = (left + right) / 2.0;
    if depth < 50.0 {
        Verdict {
            good: false,
            bad: false,
            feedback: "Not Deep Enough".to_string(),
        }
    } else if depth < 89.0 {
        Verdict {
            good: true,
            bad: false,
            feedback: "Good Squat!".to_string(),
        }
    } else if depth <= 110.0 {
        Verdict {
            good: true,
            bad: false,
            feedback: "Great Squat!".to_string(),
        }
    } else {
        Verdict {
            good: false,
            bad: false,
            feedback: "Deep Squat - Be careful!".to_string(),
        }
    }
}

/// Curl and press tolerate a single defect; only two or more score bad.
fn lenient_verdict(defects: Vec<evaluator::FormDefect>) -> Verdict {
    let good = defects.len() <= 1;
    let feedback = if defects.is_empty() {
        "Good rep!".to_string()
    } else {
        join_defects(&defects)
    };
    Verdict {
        good,
        bad: !good,
        feedback,
    }
}

fn join_defects(defects: &[evaluator::FormDefect]) -> String {
    defects
        .iter()
        .map(|defect| defect.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Advances the state machine by one due, gate-passed frame.
pub fn classify_frame(
    frame: &PoseFrame,
    mut state: SessionState,
    revert_delay: Duration,
) -> StepOutcome {
    if state.exercise == Exercise::None {
        return StepOutcome {
            state,
            revert: None,
        };
    }

    let phase = next_phase(state.exercise, frame);

    if phase == RepPhase::Middle && state.exercise == Exercise::Squats {
        let deeper = match &state.best_pose {
            Some(best) => summed_knee_angle(frame) < summed_knee_angle(best),
            None => true,
        };
        if deeper {
            state.best_pose = Some(frame.clone());
        }
    }

    let mut revert = None;
    if state.phase == RepPhase::Middle && phase == RepPhase::Start {
        let verdict = match state.exercise {
            Exercise::Squats => {
                let best = state.best_pose.take().unwrap_or_else(|| frame.clone());
                squat_verdict(&best)
            }
            Exercise::BicepCurls => lenient_verdict(curl::evaluate(frame)),
            Exercise::ShoulderPress => lenient_verdict(press::evaluate(frame)),
            Exercise::None => unreachable!("handled above"),
        };

        if verdict.good {
            state.good_reps += 1;
        }
        if verdict.bad {
            state.bad_reps += 1;
        }
        state.feedback = verdict.feedback;
        state.feedback_token += 1;
        revert = Some(RevertHandle {
            token: state.feedback_token,
            delay: revert_delay,
        });
    }

    state.phase = phase;
    StepOutcome { state, revert }
}

/// Restores the detecting placeholder when no pose or an invalid pose is
/// seen; supersedes any pending revert.
pub fn mark_undetected(mut state: SessionState) -> SessionState {
    state.feedback = DETECTING.to_string();
    state.feedback_token += 1;
    state
}

/// Applies a scheduled revert; stale tokens are ignored so a newer
/// repetition's feedback is never clobbered by an earlier timer.
pub fn revert_feedback(mut state: SessionState, token: u64) -> SessionState {
    if state.feedback_token == token {
        state.feedback = DETECTING.to_string();
    }
    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::evaluator::fixtures;

    const REVERT: Duration = Duration::from_millis(2000);

    fn run(frames: &[&PoseFrame], mut state: SessionState) -> (SessionState, Option<RevertHandle>) {
        let mut last_revert = None;
        for frame in frames {
            let outcome = classify_frame(frame, state, REVERT);
            state = outcome.state;
            if outcome.revert.is_some() {
                last_revert = outcome.revert;
            }
        }
        (state, last_revert)
    }

    #[test]
    fn squat_descent_and_rise_scores_one_great_rep() {
        let standing = fixtures::squat_standing();
        let deep = fixtures::squat_deep();
        let state = SessionState::new(Exercise::Squats);

        let (state, revert) = run(&[&standing, &deep, &standing], state);
        assert_eq!(state.good_reps, 1);
        assert_eq!(state.bad_reps, 0);
        assert_eq!(state.feedback, "Great Squat!");
        assert_eq!(state.phase, RepPhase::Start);
        assert!(state.best_pose.is_none(), "snapshot must clear after scoring");
        let revert = revert.expect("completed rep arms a revert");
        assert_eq!(revert.delay, REVERT);
        assert_eq!(revert.token, state.feedback_token);
    }

    #[test]
    fn best_pose_tracks_the_deepest_middle_frame() {
        // A shallower in-middle frame must not replace the deep snapshot.
        let deep = fixtures::squat_deep();
        let shallower = PoseFrame::from_points(
            &[
                (7, 0.44, 0.05),
                (8, 0.56, 0.05),
                (11, 0.43, 0.20),
                (12, 0.57, 0.20),
                (23, 0.42, 0.50),
                (24, 0.58, 0.50),
                (25, 0.32, 0.57),
                (26, 0.68, 0.57),
                (27, 0.33, 0.80),
                (28, 0.67, 0.80),
            ],
            640,
            480,
        );
        let state = SessionState::new(Exercise::Squats);
        let (state, _) = run(&[&deep, &shallower], state);

        let best = state.best_pose.as_ref().expect("snapshot retained in middle");
        assert_eq!(best.frame_id(), deep.frame_id());
    }

    #[test]
    fn mid_repetition_frames_never_score() {
        let deep = fixtures::squat_deep();
        let state = SessionState::new(Exercise::Squats);
        let (state, revert) = run(&[&deep, &deep, &deep], state);
        assert_eq!(state.good_reps, 0);
        assert_eq!(state.bad_reps, 0);
        assert_eq!(state.phase, RepPhase::Middle);
        assert!(revert.is_none());
    }

    #[test]
    fn curl_cycle_with_slow_lowering_note_still_counts_good() {
        // The completion frame is fully extended, which carries the single
        // "Lower weight slowly" label; one label stays within the lenient
        // good threshold.
        let extended = fixtures::curl_extended();
        let contracted = fixtures::curl_contracted();
        let state = SessionState::new(Exercise::BicepCurls);

        let (state, _) = run(&[&extended, &contracted, &extended], state);
        assert_eq!(state.good_reps, 1);
        assert_eq!(state.bad_reps, 0);
        assert_eq!(state.feedback, "Lower weight slowly");
    }

    #[test]
    fn press_cycle_scores_good_rep() {
        let rack = fixtures::press_rack();
        let lockout = fixtures::press_lockout();
        let state = SessionState::new(Exercise::ShoulderPress);

        let (state, _) = run(&[&rack, &lockout, &rack], state);
        assert_eq!(state.good_reps, 1);
        assert_eq!(state.bad_reps, 0);
        assert_eq!(state.feedback, "Good rep!");
    }

    #[test]
    fn none_exercise_is_inert() {
        let deep = fixtures::squat_deep();
        let state = SessionState::new(Exercise::None);
        let (state, revert) = run(&[&deep, &deep], state);
        assert_eq!(state.phase, RepPhase::Start);
        assert_eq!(state.good_reps, 0);
        assert!(revert.is_none());
    }

    #[test]
    fn stale_revert_token_is_ignored() {
        let standing = fixtures::squat_standing();
        let deep = fixtures::squat_deep();
        let state = SessionState::new(Exercise::Squats);

        let (state, first_revert) = run(&[&standing, &deep, &standing], state);
        let first = first_revert.expect("first rep arms a revert");

        // Second rep fires before the first revert lands.
        let (state, _) = run(&[&deep, &standing], state);
        assert_eq!(state.feedback, "Great Squat!");

        let state = revert_feedback(state, first.token);
        assert_eq!(state.feedback, "Great Squat!", "stale token must not fire");

        let token = state.feedback_token;
        let state = revert_feedback(state, token);
        assert_eq!(state.feedback, DETECTING);
    }

    #[test]
    fn undetected_pose_restores_placeholder() {
        let mut state = SessionState::new(Exercise::Squats);
        state.feedback = "Great Squat!".to_string();
        let state = mark_undetected(state);
        assert_eq!(state.feedback, DETECTING);
    }
}
