#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

/// Delay before the submit control reverts to its resting label after a
/// finished attempt.
pub const REVERT_DELAY_MS: u32 = 3000;

/// Lifecycle of a contact form submission attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

/// Feedback line shown under the form after an attempt finishes. Unlike
/// the button phase it is not cleared by the revert timer; it stays
/// until the next submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Error,
}

/// Events driving the submission lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitEvent {
    /// The user submitted the form.
    Submitted,
    /// The endpoint answered with an ok status.
    Succeeded,
    /// The request failed to send or the endpoint answered non-ok.
    Failed,
    /// The revert timer armed by a finished attempt elapsed.
    RevertElapsed,
}

/// Contact form state provided to the form component.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContactState {
    pub phase: SubmitPhase,
    pub feedback: Option<Feedback>,
}

impl ContactState {
    /// Apply one lifecycle event.
    ///
    /// Submissions are accepted only from `Idle`: while an attempt is in
    /// flight or its finished label has not reverted yet, further
    /// submits are ignored rather than queued or cancelled. A revert
    /// timer acts only on the finished phase it was armed for.
    pub fn apply(&mut self, event: SubmitEvent) {
        match (self.phase, event) {
            (SubmitPhase::Idle, SubmitEvent::Submitted) => {
                self.phase = SubmitPhase::Sending;
                self.feedback = None;
            }
            (SubmitPhase::Sending, SubmitEvent::Succeeded) => {
                self.phase = SubmitPhase::Sent;
                self.feedback = Some(Feedback::Success);
            }
            (SubmitPhase::Sending, SubmitEvent::Failed) => {
                self.phase = SubmitPhase::Failed;
                self.feedback = Some(Feedback::Error);
            }
            (SubmitPhase::Sent | SubmitPhase::Failed, SubmitEvent::RevertElapsed) => {
                self.phase = SubmitPhase::Idle;
            }
            _ => {}
        }
    }
}

impl SubmitPhase {
    /// Whether a new submission may start.
    #[must_use]
    pub fn can_submit(self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Submit control label for this phase.
    #[must_use]
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send Message",
            Self::Sending => "Sending...",
            Self::Sent => "Sent!",
            Self::Failed => "Error",
        }
    }

    /// The control stays disabled from submit until the revert timer
    /// re-enables it.
    #[must_use]
    pub fn button_disabled(self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Outcome accent class on the submit control, if any.
    #[must_use]
    pub fn button_class(self) -> Option<&'static str> {
        match self {
            Self::Sent => Some("btn--success"),
            Self::Failed => Some("btn--error"),
            Self::Idle | Self::Sending => None,
        }
    }
}

impl Feedback {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Success => "Thanks for your message! I'll get back to you soon.",
            Self::Error => "Something went wrong. Please try again or email directly.",
        }
    }

    /// State class on the feedback element.
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}
