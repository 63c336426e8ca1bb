use crate::registration_request::RegistrationRequest;
use crate::registry::{DEMO_PASSWORD, IdentityRegistry};

use sd_core::{AccountStatus, Identity, Role};

use chrono::{DateTime, Utc};
use log::{debug, info};
use uuid::Uuid;

/// The live binding between this process and one identity.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity_id: Uuid,
    pub username: String,
    pub login_time: DateTime<Utc>,
}

/// Owns the identity registry and the zero-or-one current session.
///
/// Injected into every operation that needs identity state; there is no
/// process-global session. At most one session exists at a time; a new
/// login replaces the old binding.
#[derive(Debug)]
pub struct SessionStore {
    registry: IdentityRegistry,
    session: Option<Session>,
}

impl SessionStore {
    pub fn new(registry: IdentityRegistry) -> Self {
        Self {
            registry,
            session: None,
        }
    }

    /// Authenticate and bind the session.
    ///
    /// Fails quietly with `false`: wrong credentials are an expected
    /// outcome, not an error. The reason is only logged.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let Some(identity) = self.registry.find_by_username(username) else {
            debug!("login rejected: unknown user {username}");
            return false;
        };

        if identity.status != AccountStatus::Approved {
            debug!(
                "login rejected: {username} is {status}",
                status = identity.status
            );
            return false;
        }

        if identity.password != password {
            debug!("login rejected: wrong password for {username}");
            return false;
        }

        info!("{username} logged in as {role}", role = identity.role);
        self.session = Some(Session {
            identity_id: identity.id,
            username: identity.username.clone(),
            login_time: Utc::now(),
        });
        true
    }

    /// Clear the session. Safe to call with no session bound.
    pub fn logout(&mut self) {
        if let Some(session) = self.session.take() {
            info!("{} logged out", session.username);
        }
    }

    /// Create an account and bind the session to it immediately.
    ///
    /// Always succeeds; there is no username or email uniqueness check
    /// (a known gap, kept as-is). Any requested role is ignored: new
    /// accounts start at the lowest-privilege role.
    pub fn register(&mut self, request: RegistrationRequest) -> bool {
        if let Some(requested) = request.requested_role {
            debug!(
                "registration for {user} requested role {requested}, assigning {assigned}",
                user = request.username,
                assigned = Role::lowest_privilege()
            );
        }

        let mut identity = Identity::new(
            &request.username,
            &request.email,
            Role::lowest_privilege(),
            DEMO_PASSWORD,
        );
        identity.api_key = request.api_key;

        info!("registered {username}", username = identity.username);
        self.session = Some(Session {
            identity_id: identity.id,
            username: identity.username.clone(),
            login_time: Utc::now(),
        });
        self.registry.add(identity);
        true
    }

    /// The identity bound to the current session, if any.
    pub fn current(&self) -> Option<&Identity> {
        self.session
            .as_ref()
            .and_then(|s| self.registry.find_by_id(s.identity_id))
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn registry(&self) -> &IdentityRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut IdentityRegistry {
        &mut self.registry
    }
}
