//! Session state.
//!
//! Holds the authenticated identity for the lifetime of the browser tab.
//! The identity (never the password) is persisted under one well-known
//! LocalStorage key so reloads keep the session; logout clears it. The
//! router consumes a derived role signal and never reaches into session
//! internals.

use campuslink_shared::{Identity, LoginRequest, Role};
use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;

use crate::api::CampusApi;

const STORAGE_SESSION_KEY: &str = "campuslink_session";

#[derive(Clone, Default)]
pub struct SessionState {
    /// The authenticated identity, if any.
    pub identity: Option<Identity>,
    /// True until the stored session has been restored on startup.
    pub is_loading: bool,
}

/// Read/write signal pair shared through Context.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub state: ReadSignal<SessionState>,
    pub set_state: WriteSignal<SessionState>,
}

impl SessionContext {
    pub fn new() -> Self {
        let (state, set_state) = signal(SessionState {
            identity: None,
            is_loading: true,
        });
        Self { state, set_state }
    }

    /// Role signal for injection into the router.
    pub fn role_signal(&self) -> Signal<Option<Role>> {
        let state = self.state;
        Signal::derive(move || state.get().identity.as_ref().map(|i| i.role))
    }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Restores the persisted identity, if one round-trips cleanly.
pub fn init_session(ctx: &SessionContext) {
    let identity: Option<Identity> = LocalStorage::get(STORAGE_SESSION_KEY).ok();
    ctx.set_state.update(|state| {
        state.identity = identity;
        state.is_loading = false;
    });
}

/// Authenticates against the backend and persists the identity.
///
/// Bad credentials come back as `Err` with the backend's message; the
/// session is left unchanged in that case.
pub async fn login(
    ctx: &SessionContext,
    api: &CampusApi,
    username: String,
    password: String,
) -> Result<(), String> {
    let request = LoginRequest { username, password };
    let response = api.login(&request).await.map_err(|e| e.to_string())?;

    match response.user {
        Some(user) if response.success => {
            let identity = Identity::from(user);
            let _ = LocalStorage::set(STORAGE_SESSION_KEY, &identity);
            ctx.set_state.update(|state| {
                state.identity = Some(identity);
            });
            Ok(())
        }
        _ => Err(response
            .message
            .unwrap_or_else(|| "Invalid credentials".to_string())),
    }
}

/// Clears the session; the router redirects to login on the role change.
pub fn logout(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_SESSION_KEY);
    ctx.set_state.update(|state| {
        state.identity = None;
    });
}
