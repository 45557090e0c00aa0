//! Router engine.
//!
//! Wraps the History API so every `window.history` touch stays in this
//! module. Navigation follows "request -> guard -> resolve -> load": the
//! target route is checked against the injected role signal and redirects
//! are applied before any state update. The same guard runs on popstate
//! and whenever the session role changes.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;

use campuslink_shared::Role;

use super::route::{AppRoute, GuardDecision};

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Used for redirects so the denied URL does not linger in history.
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// Router service, shared through Context.
///
/// The session role is an injected signal so the router stays decoupled
/// from the session store.
#[derive(Clone, Copy)]
pub struct RouterService {
    current_route: ReadSignal<AppRoute>,
    set_route: WriteSignal<AppRoute>,
    role: Signal<Option<Role>>,
}

impl RouterService {
    fn new(role: Signal<Option<Role>>) -> Self {
        let initial_route = AppRoute::from_path(&current_path());
        let (current_route, set_route) = signal(initial_route);

        Self {
            current_route,
            set_route,
            role,
        }
    }

    pub fn current_route(&self) -> ReadSignal<AppRoute> {
        self.current_route
    }

    pub fn navigate(&self, path: &str) {
        self.navigate_to_route(AppRoute::from_path(path), true);
    }

    /// Applies the guard, then either redirects (replaceState) or loads
    /// the target (pushState when `use_push`).
    fn navigate_to_route(&self, target_route: AppRoute, use_push: bool) {
        let role = self.role.get_untracked();

        match target_route.guard(role) {
            GuardDecision::Allow => {
                if use_push {
                    push_history_state(target_route.to_path());
                } else {
                    replace_history_state(target_route.to_path());
                }
                self.set_route.set(target_route);
            }
            GuardDecision::RedirectToLogin => {
                web_sys::console::log_1(&"[Router] Access denied. Redirecting to login.".into());
                let redirect = AppRoute::Login;
                replace_history_state(redirect.to_path());
                self.set_route.set(redirect);
            }
            GuardDecision::RedirectToDashboard(dashboard) => {
                web_sys::console::log_1(
                    &"[Router] Already authenticated. Redirecting to dashboard.".into(),
                );
                replace_history_state(dashboard.to_path());
                self.set_route.set(dashboard);
            }
        }
    }

    /// Back/forward buttons also pass through the guard.
    fn init_popstate_listener(&self) {
        let this = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            let target_route = AppRoute::from_path(&current_path());
            this.navigate_to_route(target_route, false);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Leak the closure so the listener stays alive.
        closure.forget();
    }

    /// Re-runs the guard whenever the session role or route changes, so
    /// login and logout redirect without manual navigation calls.
    fn setup_session_redirect(&self) {
        let current_route = self.current_route;
        let set_route = self.set_route;
        let role = self.role;

        Effect::new(move |_| {
            let role = role.get();
            let route = current_route.get();

            match route.guard(role) {
                GuardDecision::Allow => {}
                GuardDecision::RedirectToLogin => {
                    web_sys::console::log_1(
                        &"[Router] Session changed: redirecting to login.".into(),
                    );
                    push_history_state(AppRoute::Login.to_path());
                    set_route.set(AppRoute::Login);
                }
                GuardDecision::RedirectToDashboard(dashboard) => {
                    web_sys::console::log_1(
                        &"[Router] Session changed: redirecting to dashboard.".into(),
                    );
                    push_history_state(dashboard.to_path());
                    set_route.set(dashboard);
                }
            }
        });
    }
}

fn provide_router(role: Signal<Option<Role>>) -> RouterService {
    let router = RouterService::new(role);

    router.init_popstate_listener();
    router.setup_session_redirect();

    provide_context(router);
    router
}

pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI components
// ============================================================================

/// Router root component; provides the routing context.
#[component]
pub fn Router(
    /// Session role signal
    role: Signal<Option<Role>>,
    /// Child components
    children: Children,
) -> impl IntoView {
    provide_router(role);

    children()
}

/// Renders the component matching the current route.
#[component]
pub fn RouterOutlet(
    /// Route matcher: maps the current route to a view
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}
