//! CampusLink front-end application.
//!
//! Context-driven layering:
//! - `web::route` / `web::router`: role-guarded routing over the History API
//! - `session`: authenticated identity, persisted across reloads
//! - `api`: REST gateway facade over the campus backend
//! - `view_state`: the shared fetch/derive/mutate core used by every dashboard
//! - `components`: one dashboard per role, plus login and dialogs

pub mod api;
mod session;
mod util;
mod view_state;

mod components {
    pub mod admin;
    mod dialogs;
    mod header;
    mod icons;
    pub mod login;
    mod notify;
    pub mod student;
    mod tabs;
    pub mod teacher;
    mod widgets;
}

pub(crate) mod web {
    pub mod route;
    pub mod router;
}

use leptos::prelude::*;

use crate::api::CampusApi;
use crate::components::admin::AdminDashboard;
use crate::components::login::LoginPage;
use crate::components::student::StudentDashboard;
use crate::components::teacher::TeacherDashboard;
use crate::session::{SessionContext, init_session};
use crate::web::route::AppRoute;
use crate::web::router::{Router, RouterOutlet, use_router};

/// Maps the current route to its page component.
///
/// The router has already applied the role guard by the time a route
/// reaches this function.
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::Student => view! { <StudentDashboard /> }.into_any(),
        AppRoute::Teacher => view! { <TeacherDashboard /> }.into_any(),
        AppRoute::Admin => view! { <AdminDashboard /> }.into_any(),
        AppRoute::NotFound => {
            let router = use_router();
            view! {
                <div class="flex items-center justify-center min-h-screen bg-base-200">
                    <div class="text-center">
                        <h1 class="text-6xl font-bold text-error">"404"</h1>
                        <p class="text-xl mt-4">"Page not found"</p>
                        <button class="btn btn-primary mt-6" on:click=move |_| router.navigate("/")>
                            "Back to CampusLink"
                        </button>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. Gateway facade: one base-URL-configured client for the whole app.
    provide_context(CampusApi::same_origin());

    // 2. Session context, restored from LocalStorage so reloads keep the
    //    authenticated identity until explicit logout.
    let session = SessionContext::new();
    provide_context(session);
    init_session(&session);

    // 3. Inject the role signal into the router to keep routing decoupled
    //    from session internals.
    let role = session.role_signal();

    view! {
        <Router role=role>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
