//! Tab bar shared by the dashboards.

use leptos::prelude::*;

#[component]
pub fn TabBar(
    /// (key, label) pairs in display order
    tabs: &'static [(&'static str, &'static str)],
    /// Currently active tab key
    active: RwSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div role="tablist" class="tabs tabs-boxed bg-base-100 shadow">
            {tabs
                .iter()
                .map(|&(key, label)| {
                    view! {
                        <a
                            role="tab"
                            class=move || {
                                if active.get() == key { "tab tab-active" } else { "tab" }
                            }
                            on:click=move |_| active.set(key)
                        >
                            {label}
                        </a>
                    }
                })
                .collect_view()}
        </div>
    }
}
