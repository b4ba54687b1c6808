use log::debug;

use crate::models::{Snapshot, SnapshotDefaults};

pub mod auth;
pub mod dashboard;
pub mod services;

pub use auth::AuthState;
pub use dashboard::DashboardState;
pub use services::{Service, ServicesState};

/// Every event the console state reacts to. Snapshot and auth events come
/// from outside collaborators; each slice reducer sees every action.
#[derive(Debug, Clone)]
pub enum Action {
    DashboardDataFetch,
    DashboardDataReceived(Snapshot),
    DashboardDataError(String),
    AuthAuthenticating(bool),
    AuthAuthenticated {
        authenticated: bool,
        capabilities: Vec<String>,
    },
    AuthError(String),
    ServicesDataReceived(Vec<Service>),
    ServicesDataError(String),
}

/// Holds the whole console state, one slice per domain entity. The store is
/// plainly owned by its caller; all updates go through [`Store::dispatch`],
/// which replaces each slice with the value its reducer returns.
pub struct Store {
    defaults: SnapshotDefaults,
    dashboard: DashboardState,
    auth: AuthState,
    services: ServicesState,
}

impl Store {
    pub fn new(defaults: SnapshotDefaults) -> Self {
        Self {
            defaults,
            dashboard: DashboardState::default(),
            auth: AuthState::default(),
            services: ServicesState::default(),
        }
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn services(&self) -> &ServicesState {
        &self.services
    }

    pub fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {:?}", action);
        self.dashboard = dashboard::reduce(&self.dashboard, &action, &self.defaults);
        self.auth = auth::reduce(&self.auth, &action);
        self.services = services::reduce(&self.services, &action);
    }
}
