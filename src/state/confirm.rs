//! Confirm-then-act protocol for destructive actions
//!
//! Instead of a blocking dialog the view asks for confirmation, shows the
//! returned prompt, and later feeds back the user's answer.

/// What the view shows the user while waiting for an answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationRequest<T> {
    pub subject: T,
    pub prompt: String,
}

/// Holds at most one pending confirmation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmationGate<T> {
    pending: Option<ConfirmationRequest<T>>,
}

impl<T> Default for ConfirmationGate<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T: Clone> ConfirmationGate<T> {
    /// Ask for confirmation; replaces any earlier unanswered request
    pub fn request(&mut self, subject: T, prompt: impl Into<String>) -> ConfirmationRequest<T> {
        let request = ConfirmationRequest { subject, prompt: prompt.into() };
        self.pending = Some(request.clone());
        request
    }

    pub fn pending(&self) -> Option<&ConfirmationRequest<T>> {
        self.pending.as_ref()
    }

    /// The user affirmed; hands the subject over exactly once
    pub fn confirm(&mut self) -> Option<T> {
        self.pending.take().map(|request| request.subject)
    }

    /// The user declined
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_yields_subject_once() {
        let mut gate = ConfirmationGate::default();
        let request = gate.request("e1".to_string(), "Are you sure?");
        assert_eq!(request.prompt, "Are you sure?");
        assert_eq!(gate.confirm(), Some("e1".to_string()));
        assert_eq!(gate.confirm(), None);
    }

    #[test]
    fn test_cancel_drops_request() {
        let mut gate = ConfirmationGate::default();
        gate.request(7u32, "Delete?");
        assert!(gate.cancel());
        assert!(gate.pending().is_none());
        assert_eq!(gate.confirm(), None);
        assert!(!gate.cancel());
    }
}
