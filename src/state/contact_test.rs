use super::*;

// =============================================================
// Happy path
// =============================================================

#[test]
fn form_starts_idle_with_no_feedback() {
    let state = ContactState::default();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert!(state.feedback.is_none());
    assert!(state.phase.can_submit());
    assert_eq!(state.phase.button_label(), "Send Message");
    assert!(!state.phase.button_disabled());
}

#[test]
fn successful_submission_lifecycle() {
    let mut state = ContactState::default();

    state.apply(SubmitEvent::Submitted);
    assert_eq!(state.phase, SubmitPhase::Sending);
    assert_eq!(state.phase.button_label(), "Sending...");
    assert!(state.phase.button_disabled());
    assert!(state.feedback.is_none());

    state.apply(SubmitEvent::Succeeded);
    assert_eq!(state.phase, SubmitPhase::Sent);
    assert_eq!(state.phase.button_label(), "Sent!");
    assert_eq!(state.phase.button_class(), Some("btn--success"));
    assert_eq!(state.feedback, Some(Feedback::Success));

    state.apply(SubmitEvent::RevertElapsed);
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.phase.button_label(), "Send Message");
    assert!(!state.phase.button_disabled());
}

#[test]
fn failed_submission_lifecycle() {
    let mut state = ContactState::default();

    state.apply(SubmitEvent::Submitted);
    state.apply(SubmitEvent::Failed);
    assert_eq!(state.phase, SubmitPhase::Failed);
    assert_eq!(state.phase.button_label(), "Error");
    assert_eq!(state.phase.button_class(), Some("btn--error"));
    assert_eq!(state.feedback, Some(Feedback::Error));

    state.apply(SubmitEvent::RevertElapsed);
    assert_eq!(state.phase, SubmitPhase::Idle);
}

// =============================================================
// Concurrency policy: in-flight and unreverted attempts ignore submits
// =============================================================

#[test]
fn submit_while_sending_is_ignored() {
    let mut state = ContactState::default();
    state.apply(SubmitEvent::Submitted);
    state.apply(SubmitEvent::Submitted);
    assert_eq!(state.phase, SubmitPhase::Sending);

    state.apply(SubmitEvent::Succeeded);
    assert_eq!(state.phase, SubmitPhase::Sent);
}

#[test]
fn submit_before_revert_is_ignored() {
    let mut state = ContactState::default();
    state.apply(SubmitEvent::Submitted);
    state.apply(SubmitEvent::Failed);

    state.apply(SubmitEvent::Submitted);
    assert_eq!(state.phase, SubmitPhase::Failed);
    assert_eq!(state.feedback, Some(Feedback::Error));
}

#[test]
fn revert_does_not_interrupt_an_active_submission() {
    let mut state = ContactState::default();
    state.apply(SubmitEvent::Submitted);
    state.apply(SubmitEvent::RevertElapsed);
    assert_eq!(state.phase, SubmitPhase::Sending);
}

#[test]
fn outcome_events_outside_sending_are_ignored() {
    let mut state = ContactState::default();
    state.apply(SubmitEvent::Succeeded);
    state.apply(SubmitEvent::Failed);
    assert_eq!(state, ContactState::default());
}

// =============================================================
// Feedback persistence
// =============================================================

#[test]
fn feedback_outlives_the_button_revert() {
    let mut state = ContactState::default();
    state.apply(SubmitEvent::Submitted);
    state.apply(SubmitEvent::Succeeded);
    state.apply(SubmitEvent::RevertElapsed);

    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.feedback, Some(Feedback::Success));
}

#[test]
fn next_submission_clears_previous_feedback() {
    let mut state = ContactState::default();
    state.apply(SubmitEvent::Submitted);
    state.apply(SubmitEvent::Failed);
    state.apply(SubmitEvent::RevertElapsed);

    state.apply(SubmitEvent::Submitted);
    assert_eq!(state.phase, SubmitPhase::Sending);
    assert!(state.feedback.is_none());
}

#[test]
fn feedback_messages_match_outcome() {
    assert_eq!(
        Feedback::Success.message(),
        "Thanks for your message! I'll get back to you soon."
    );
    assert_eq!(
        Feedback::Error.message(),
        "Something went wrong. Please try again or email directly."
    );
    assert_eq!(Feedback::Success.css_class(), "success");
    assert_eq!(Feedback::Error.css_class(), "error");
}
