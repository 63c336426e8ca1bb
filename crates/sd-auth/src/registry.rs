use sd_core::{AccountStatus, Identity, Role};

use uuid::Uuid;

/// Every demo account authenticates with this value. There is no hashing
/// and no lockout; credentials here are stand-ins, not secrets.
pub const DEMO_PASSWORD: &str = "password";

/// In-memory identity registry. Lives for the process lifetime only.
///
/// Usernames are not unique; registration never checks. Lookups return the
/// first match, which keeps the behavior predictable if a duplicate does
/// get in.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
    identities: Vec<Identity>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry pre-populated with the demo accounts: one per approved role
    /// plus two registrations awaiting admin review.
    pub fn with_demo_users() -> Self {
        let mut admin = Identity::new("admin", "admin@trading.com", Role::Admin, DEMO_PASSWORD);
        admin.api_key = Some("sk-or-v1-***".to_string());

        let mut trader =
            Identity::new("trader1", "trader@trading.com", Role::Trader, DEMO_PASSWORD);
        trader.api_key = Some("sk-or-v1-***".to_string());

        let viewer = Identity::new("viewer1", "viewer@trading.com", Role::Viewer, DEMO_PASSWORD);

        let mut newtrader = Identity::new(
            "newtrader1",
            "newtrader1@email.com",
            Role::Trader,
            DEMO_PASSWORD,
        );
        newtrader.status = AccountStatus::Pending;

        let mut analyst = Identity::new(
            "analyst2",
            "analyst2@email.com",
            Role::Viewer,
            DEMO_PASSWORD,
        );
        analyst.status = AccountStatus::Pending;

        Self {
            identities: vec![admin, trader, viewer, newtrader, analyst],
        }
    }

    pub fn add(&mut self, identity: Identity) -> Uuid {
        let id = identity.id;
        self.identities.push(identity);
        id
    }

    pub fn find_by_username(&self, username: &str) -> Option<&Identity> {
        self.identities.iter().find(|i| i.username == username)
    }

    pub fn find_by_username_mut(&mut self, username: &str) -> Option<&mut Identity> {
        self.identities.iter_mut().find(|i| i.username == username)
    }

    pub fn find_by_id(&self, id: Uuid) -> Option<&Identity> {
        self.identities.iter().find(|i| i.id == id)
    }

    pub fn find_by_id_mut(&mut self, id: Uuid) -> Option<&mut Identity> {
        self.identities.iter_mut().find(|i| i.id == id)
    }

    /// Accounts awaiting approval, in registration order.
    pub fn pending(&self) -> Vec<&Identity> {
        self.identities
            .iter()
            .filter(|i| i.status == AccountStatus::Pending)
            .collect()
    }

    pub fn all(&self) -> &[Identity] {
        &self.identities
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}
