use serde::{Deserialize, Serialize};

use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub name: String,
    pub unit: String,
    pub state: String,
}

/// The list is replaced wholesale on every receive; there is no history to
/// keep for services.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ServicesState {
    pub services: Vec<Service>,
    pub error: Option<String>,
}

pub fn reduce(state: &ServicesState, action: &Action) -> ServicesState {
    match action {
        Action::ServicesDataReceived(services) => ServicesState {
            services: services.clone(),
            error: None,
        },

        Action::ServicesDataError(error) => {
            let mut next = state.clone();
            next.error = Some(error.clone());
            next
        }

        Action::AuthAuthenticated { authenticated, .. } => {
            if *authenticated {
                state.clone()
            } else {
                ServicesState::default()
            }
        }

        _ => state.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn postfix() -> Service {
        Service {
            name: "Postfix".to_string(),
            unit: "postfix.service".to_string(),
            state: "running".to_string(),
        }
    }

    #[test]
    fn test_receive_replaces_list_and_clears_error() {
        let failed = reduce(
            &ServicesState::default(),
            &Action::ServicesDataError("timeout".to_string()),
        );
        assert_eq!(failed.error.as_deref(), Some("timeout"));

        let state = reduce(&failed, &Action::ServicesDataReceived(vec![postfix()]));
        assert_eq!(state.services.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn test_logout_resets_services() {
        let state = reduce(
            &ServicesState::default(),
            &Action::ServicesDataReceived(vec![postfix()]),
        );

        let reset = reduce(
            &state,
            &Action::AuthAuthenticated {
                authenticated: false,
                capabilities: Vec::new(),
            },
        );
        assert_eq!(reset, ServicesState::default());
    }
}
