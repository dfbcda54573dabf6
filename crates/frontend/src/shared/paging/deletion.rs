use crate::shared::api_utils::ApiError;

/// Row-scoped delete flow
///
/// `NoPending -> ConfirmPending -> DeleteInFlight -> NoPending`, or back to
/// `NoPending` when the user cancels the confirmation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeleteFlow {
    #[default]
    NoPending,
    ConfirmPending { target: String },
    DeleteInFlight { target: String },
}

impl DeleteFlow {
    /// Open the confirmation for `target`. Ignored while a delete is in flight.
    pub fn request(&mut self, target: impl Into<String>) -> bool {
        if matches!(self, DeleteFlow::DeleteInFlight { .. }) {
            return false;
        }
        *self = DeleteFlow::ConfirmPending {
            target: target.into(),
        };
        true
    }

    pub fn cancel(&mut self) {
        if matches!(self, DeleteFlow::ConfirmPending { .. }) {
            *self = DeleteFlow::NoPending;
        }
    }

    /// Confirm the pending deletion and return the id to delete
    pub fn confirm(&mut self) -> Option<String> {
        match std::mem::take(self) {
            DeleteFlow::ConfirmPending { target } => {
                *self = DeleteFlow::DeleteInFlight {
                    target: target.clone(),
                };
                Some(target)
            }
            other => {
                *self = other;
                None
            }
        }
    }

    /// Close the flow once the delete call returned, whatever the outcome
    pub fn finish(&mut self) {
        *self = DeleteFlow::NoPending;
    }

    pub fn is_confirm_open(&self) -> bool {
        matches!(self, DeleteFlow::ConfirmPending { .. })
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, DeleteFlow::DeleteInFlight { .. })
    }

    pub fn target(&self) -> Option<&str> {
        match self {
            DeleteFlow::NoPending => None,
            DeleteFlow::ConfirmPending { target } | DeleteFlow::DeleteInFlight { target } => {
                Some(target)
            }
        }
    }
}

/// User-facing texts of one resource's delete flow
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteMessages {
    pub confirm_title: &'static str,
    pub confirm_text: &'static str,
    /// Shown when the API answers 409
    pub conflict: &'static str,
    pub failure: &'static str,
}

impl DeleteMessages {
    pub fn for_error(&self, err: &ApiError) -> &'static str {
        if err.is_conflict() {
            self.conflict
        } else {
            self.failure
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGES: DeleteMessages = DeleteMessages {
        confirm_title: "Excluir",
        confirm_text: "Tem certeza?",
        conflict: "Em uso",
        failure: "Erro",
    };

    #[test]
    fn test_confirm_then_finish() {
        let mut flow = DeleteFlow::default();
        assert!(flow.request("p1"));
        assert!(flow.is_confirm_open());
        assert_eq!(flow.target(), Some("p1"));

        assert_eq!(flow.confirm(), Some("p1".to_string()));
        assert!(flow.is_in_flight());

        flow.finish();
        assert_eq!(flow, DeleteFlow::NoPending);
    }

    #[test]
    fn test_cancel_clears_target() {
        let mut flow = DeleteFlow::default();
        flow.request("p1");
        flow.cancel();
        assert_eq!(flow, DeleteFlow::NoPending);
        assert_eq!(flow.confirm(), None);
    }

    #[test]
    fn test_no_second_request_while_in_flight() {
        let mut flow = DeleteFlow::default();
        flow.request("p1");
        flow.confirm();
        assert!(!flow.request("p2"));
        flow.cancel();
        assert_eq!(flow.target(), Some("p1"));
        assert_eq!(flow.confirm(), None);
        assert!(flow.is_in_flight());
    }

    #[test]
    fn test_message_for_error() {
        assert_eq!(MESSAGES.for_error(&ApiError::Conflict), "Em uso");
        assert_eq!(MESSAGES.for_error(&ApiError::Status(500)), "Erro");
        assert_eq!(MESSAGES.for_error(&ApiError::Network("offline".into())), "Erro");
    }
}
