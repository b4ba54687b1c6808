use serde::Serialize;

use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthState {
    pub authenticating: bool,
    pub authenticated: bool,
    pub capabilities: Vec<String>,
    pub error: Option<String>,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            authenticating: true,
            authenticated: false,
            capabilities: Vec::new(),
            error: None,
        }
    }
}

pub fn reduce(state: &AuthState, action: &Action) -> AuthState {
    match action {
        Action::AuthAuthenticating(authenticating) => {
            let mut next = state.clone();
            next.authenticating = *authenticating;
            next.error = None;
            next
        }

        Action::AuthAuthenticated {
            authenticated,
            capabilities,
        } => {
            let mut next = state.clone();
            next.authenticated = *authenticated;
            next.capabilities = capabilities.clone();
            next.error = None;
            next
        }

        Action::AuthError(error) => {
            let mut next = state.clone();
            next.authenticated = false;
            next.error = Some(error.clone());
            next
        }

        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_stores_capabilities() {
        let state = reduce(
            &AuthState::default(),
            &Action::AuthAuthenticated {
                authenticated: true,
                capabilities: vec!["SystemAdmin".to_string()],
            },
        );
        assert!(state.authenticated);
        assert_eq!(state.capabilities, vec!["SystemAdmin".to_string()]);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_error_drops_authentication() {
        let authed = reduce(
            &AuthState::default(),
            &Action::AuthAuthenticated {
                authenticated: true,
                capabilities: Vec::new(),
            },
        );

        let failed = reduce(&authed, &Action::AuthError("session expired".to_string()));
        assert!(!failed.authenticated);
        assert_eq!(failed.error.as_deref(), Some("session expired"));
    }

    #[test]
    fn test_authenticating_flag_clears_error() {
        let failed = reduce(
            &AuthState::default(),
            &Action::AuthError("bad credentials".to_string()),
        );

        let retrying = reduce(&failed, &Action::AuthAuthenticating(true));
        assert!(retrying.authenticating);
        assert!(retrying.error.is_none());
    }
}
