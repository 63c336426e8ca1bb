mod admin;
mod profile;

use crate::{IdentityRegistry, SessionStore};

pub(crate) fn demo_store() -> SessionStore {
    SessionStore::new(IdentityRegistry::with_demo_users())
}

pub(crate) fn admin_store() -> SessionStore {
    let mut store = demo_store();
    assert!(store.login("admin", "password"));
    store
}
