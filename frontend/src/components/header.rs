//! Navbar shared by the dashboards.

use leptos::prelude::*;

use crate::components::icons::{GraduationCap, LogOut, RefreshCw};
use crate::session::{logout, use_session};

#[component]
pub fn DashboardHeader(
    title: &'static str,
    /// Display name of the signed-in user.
    user_name: String,
    /// Re-issues the full fan-out fetch.
    #[prop(into)]
    on_refresh: Callback<()>,
) -> impl IntoView {
    let session = use_session();

    view! {
        <div class="navbar bg-base-100 shadow-md px-4">
            <div class="flex-1 gap-3">
                <div class="p-2 bg-primary/10 rounded-xl text-primary">
                    <GraduationCap attr:class="h-6 w-6" />
                </div>
                <div>
                    <h1 class="text-lg font-bold leading-tight">{title}</h1>
                    <p class="text-sm text-base-content/60">{user_name}</p>
                </div>
            </div>
            <div class="flex-none gap-2">
                <button class="btn btn-ghost btn-sm gap-2" on:click=move |_| on_refresh.run(())>
                    <RefreshCw attr:class="h-4 w-4" /> "Refresh"
                </button>
                <button class="btn btn-ghost btn-sm gap-2" on:click=move |_| logout(&session)>
                    <LogOut attr:class="h-4 w-4" /> "Logout"
                </button>
            </div>
        </div>
    }
}
