//! Small view helpers shared by the dashboards.

use campuslink_shared::{Notice, Priority, Schedule, view};
use leptos::prelude::*;

use crate::components::icons::{CalendarDays, Trash2};

pub fn loading_view() -> impl IntoView {
    view! {
        <div class="flex justify-center py-16">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

pub fn error_view(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow max-w-md mx-auto mt-8">
            <div class="card-body items-center text-center">
                <div role="alert" class="alert alert-error">
                    <span>{message}</span>
                </div>
                <button class="btn btn-primary mt-2" on:click=move |_| on_retry.run(())>
                    "Retry"
                </button>
            </div>
        </div>
    }
}

/// Weekday cards in fixed Monday..Friday order; empty days stay visible.
pub fn schedule_cards(schedules: Vec<Schedule>) -> impl IntoView {
    let grouped: Vec<(&'static str, Vec<Schedule>)> = view::schedule_by_weekday(&schedules)
        .into_iter()
        .map(|(day, entries)| (day, entries.into_iter().cloned().collect()))
        .collect();

    view! {
        <div class="space-y-4">
            {grouped
                .into_iter()
                .map(|(day, entries)| {
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body py-4">
                                <h3 class="font-semibold flex items-center gap-2">
                                    <CalendarDays attr:class="h-4 w-4 text-primary" />
                                    {day}
                                </h3>
                                {if entries.is_empty() {
                                    view! {
                                        <p class="text-sm text-base-content/50">"No classes"</p>
                                    }
                                        .into_any()
                                } else {
                                    entries
                                        .into_iter()
                                        .map(|s| {
                                            view! {
                                                <div class="flex justify-between text-sm py-1 border-b border-base-200 last:border-0">
                                                    <span>
                                                        {format!("{} ({})", s.subject, s.subject_code)}
                                                    </span>
                                                    <span class="text-base-content/70">
                                                        {format!("{} · {} · {}", s.time_slot, s.room, s.teacher_name)}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn priority_badge_class(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "badge badge-error",
        Priority::Medium => "badge badge-warning",
        Priority::Low => "badge badge-ghost",
    }
}

/// Notice cards, newest first as delivered by the backend. Admin passes a
/// delete callback; the other dashboards render read-only cards.
pub fn notice_cards(
    notices: Vec<Notice>,
    on_delete: Option<Callback<String>>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            {notices
                .into_iter()
                .map(|notice| {
                    let id = notice.id.clone();
                    let delete_button = on_delete.map(|on_delete| {
                        view! {
                            <button
                                class="btn btn-ghost btn-sm text-error"
                                disabled=move || busy.get()
                                on:click=move |_| on_delete.run(id.clone())
                            >
                                <Trash2 attr:class="h-4 w-4" />
                            </button>
                        }
                    });
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body py-4">
                                <div class="flex items-start justify-between gap-2">
                                    <div>
                                        <h3 class="font-semibold">{notice.title}</h3>
                                        <p class="text-sm text-base-content/70">{notice.content}</p>
                                        <p class="text-xs text-base-content/50 mt-1">
                                            {format!("{} · {}", notice.posted_by, notice.posted_date)}
                                        </p>
                                    </div>
                                    <div class="flex items-center gap-2">
                                        <span class=priority_badge_class(
                                            notice.priority,
                                        )>{format!("{:?}", notice.priority).to_lowercase()}</span>
                                        {delete_button}
                                    </div>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
