//! Student dashboard.
//!
//! Fetches every collection the student can see in one concurrent
//! fan-out, derives the per-role views on render, and re-fetches the
//! whole bundle after each mutation so the UI always reflects backend
//! state.

use campuslink_shared::{
    Attendance, Complaint, ComplaintStatus, Event, Grade, LibraryBook, Notice, Role, Schedule,
    StudyMaterial, view,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiResult, CampusApi, use_api};
use crate::components::dialogs::ComplaintDialog;
use crate::components::header::DashboardHeader;
use crate::components::icons::{BookOpen, CircleCheck, ClipboardCheck, Megaphone, ThumbsUp};
use crate::components::notify::{NotificationToast, Notifier};
use crate::components::tabs::TabBar;
use crate::components::widgets::{error_view, loading_view, notice_cards, schedule_cards};
use crate::session::use_session;
use crate::view_state::{Loader, MutationGuard, ViewState};

const TABS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("academics", "Academics"),
    ("schedule", "Schedule"),
    ("resources", "Resources"),
    ("events", "Events"),
    ("complaints", "Complaints"),
];

#[derive(Clone, PartialEq)]
struct StudentData {
    grades: Vec<Grade>,
    attendance: Vec<Attendance>,
    schedules: Vec<Schedule>,
    materials: Vec<StudyMaterial>,
    library: Vec<LibraryBook>,
    events: Vec<Event>,
    notices: Vec<Notice>,
    complaints: Vec<Complaint>,
}

/// All-or-nothing join: one failed fetch fails the whole load and no
/// partial data is kept.
async fn fetch_data(api: CampusApi, student_id: String) -> ApiResult<StudentData> {
    let (grades, attendance, schedules, materials, library, events, notices, complaints) = futures::try_join!(
        api.get_grades(&student_id),
        api.get_attendance(&student_id),
        api.get_schedules(),
        api.get_materials(),
        api.get_library_books(),
        api.get_events(),
        api.get_notices(),
        api.get_complaints(),
    )?;
    Ok(StudentData {
        grades,
        attendance,
        schedules,
        materials,
        library,
        events,
        notices,
        complaints,
    })
}

#[component]
pub fn StudentDashboard() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    // The router only routes here with a student session in place.
    let Some(identity) = session.state.get_untracked().identity else {
        return ().into_any();
    };
    let user_id = identity.id.clone();
    let user_name = identity.name.clone();

    let state = RwSignal::new(ViewState::<StudentData>::Loading);
    let loader = Loader::new();
    let guard = MutationGuard::new();
    let notifier = Notifier::new();
    let active_tab = RwSignal::new(TABS[0].0);
    let complaint_open = RwSignal::new(false);

    {
        let api = api.clone();
        let student_id = user_id.clone();
        loader.spawn(state, fetch_data(api, student_id));
    }

    let on_refresh = Callback::new({
        let api = api.clone();
        let student_id = user_id.clone();
        move |_| loader.spawn(state, fetch_data(api.clone(), student_id.clone()))
    });

    let on_register = Callback::new({
        let api = api.clone();
        let user_id = user_id.clone();
        move |event_id: String| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            let user_id = user_id.clone();
            spawn_local(async move {
                match api.register_for_event(&event_id, &user_id).await {
                    Ok(ack) => {
                        notifier.success(ack.message);
                        loader.run(state, fetch_data(api, user_id)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_vote = Callback::new({
        let api = api.clone();
        let user_id = user_id.clone();
        move |complaint_id: String| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            let user_id = user_id.clone();
            spawn_local(async move {
                match api.vote_complaint(&complaint_id, &user_id).await {
                    Ok(ack) => {
                        // The backend reports whether the vote toggled on
                        // or off.
                        if ack.action.as_deref() == Some("removed") {
                            notifier.success("Vote removed");
                        } else {
                            notifier.success("Vote added");
                        }
                        loader.run(state, fetch_data(api, user_id)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_submit_complaint = Callback::new({
        let api = api.clone();
        let user_id = user_id.clone();
        move |complaint: Complaint| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            let user_id = user_id.clone();
            spawn_local(async move {
                match api.create_complaint(&complaint).await {
                    Ok(_) => {
                        complaint_open.set(false);
                        notifier.success("Complaint submitted");
                        loader.run(state, fetch_data(api, user_id)).await;
                    }
                    // Leave the dialog open so the typed form survives.
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let uid = user_id.clone();
    let uname = identity.name.clone();
    view! {
        <div class="min-h-screen bg-base-200">
            <DashboardHeader title="Student Dashboard" user_name=user_name on_refresh=on_refresh />
            <NotificationToast notifier=notifier />
            <div class="p-4 space-y-4 max-w-6xl mx-auto">
                <TabBar tabs=TABS active=active_tab />
                {move || match state.get() {
                    ViewState::Loading => loading_view().into_any(),
                    ViewState::Error(msg) => error_view(msg, on_refresh).into_any(),
                    ViewState::Ready(data) => {
                        let user_id = uid.clone();
                        match active_tab.get() {
                            "academics" => academics_tab(data.grades, data.attendance).into_any(),
                            "schedule" => schedule_cards(data.schedules).into_any(),
                            "resources" => resources_tab(data.materials, data.library).into_any(),
                            "events" => {
                                events_tab(data.events, user_id, on_register, guard.busy()).into_any()
                            }
                            "complaints" => {
                                complaints_tab(
                                        data.complaints,
                                        user_id,
                                        uname.clone(),
                                        complaint_open,
                                        on_submit_complaint,
                                        on_vote,
                                        guard.busy(),
                                    )
                                    .into_any()
                            }
                            _ => overview_tab(&data).into_any(),
                        }
                    }
                }}
            </div>
        </div>
    }
    .into_any()
}

fn stat_card(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="stat bg-base-100 shadow rounded-box">
            <div class="stat-title">{label}</div>
            <div class="stat-value text-primary text-3xl">{value}</div>
        </div>
    }
}

fn overview_tab(data: &StudentData) -> impl IntoView {
    let average = view::average_attendance(&data.attendance);
    let notices: Vec<Notice> = view::notices_for(&data.notices, Role::Student)
        .into_iter()
        .cloned()
        .collect();

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                {stat_card("Average attendance", format!("{average:.2}%"))}
                {stat_card("Subjects graded", data.grades.len().to_string())}
                {stat_card("Upcoming events", data.events.len().to_string())}
                {stat_card("Library books", data.library.len().to_string())}
            </div>
            <h2 class="text-lg font-semibold flex items-center gap-2">
                <Megaphone attr:class="h-5 w-5 text-primary" />
                "Notices"
            </h2>
            {notice_cards(notices, None, Signal::derive(|| false))}
        </div>
    }
}

fn academics_tab(grades: Vec<Grade>, attendance: Vec<Attendance>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">
                        <ClipboardCheck attr:class="h-5 w-5 text-primary" />
                        "Internal assessment"
                    </h2>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Subject"</th>
                                    <th>"Part A (10)"</th>
                                    <th>"Part B (40)"</th>
                                    <th>"Total (50)"</th>
                                    <th>"Grade"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {grades
                                    .into_iter()
                                    .map(|g| {
                                        view! {
                                            <tr>
                                                <td>{format!("{} ({})", g.subject, g.subject_code)}</td>
                                                <td>{g.part_a_marks}</td>
                                                <td>{g.part_b_marks}</td>
                                                <td>{g.total_marks}</td>
                                                <td>
                                                    <span class="badge badge-primary">
                                                        {g.grade.to_string()}
                                                    </span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Attendance"</h2>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Subject"</th>
                                    <th>"Attended"</th>
                                    <th>"Total"</th>
                                    <th>"Percentage"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {attendance
                                    .into_iter()
                                    .map(|a| {
                                        let low = a.percentage < 75.0;
                                        view! {
                                            <tr>
                                                <td>{format!("{} ({})", a.subject, a.subject_code)}</td>
                                                <td>{a.attended_classes}</td>
                                                <td>{a.total_classes}</td>
                                                <td>
                                                    <span class=if low {
                                                        "text-error font-semibold"
                                                    } else {
                                                        ""
                                                    }>{format!("{:.1}%", a.percentage)}</span>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn resources_tab(materials: Vec<StudyMaterial>, library: Vec<LibraryBook>) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <div>
                <h2 class="text-lg font-semibold mb-2">"Study materials"</h2>
                <div class="grid md:grid-cols-2 gap-3">
                    {materials
                        .into_iter()
                        .map(|m| {
                            view! {
                                <div class="card bg-base-100 shadow">
                                    <div class="card-body py-4">
                                        <h3 class="font-semibold">{m.title}</h3>
                                        <p class="text-sm text-base-content/70">{m.description}</p>
                                        <p class="text-xs text-base-content/50">
                                            {format!(
                                                "{} ({}) · {} · {}",
                                                m.subject,
                                                m.subject_code,
                                                m.uploaded_by,
                                                m.uploaded_date,
                                            )}
                                        </p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h2 class="text-lg font-semibold mb-2 flex items-center gap-2">
                    <BookOpen attr:class="h-5 w-5 text-primary" />
                    "Library"
                </h2>
                <div class="overflow-x-auto">
                    <table class="table bg-base-100 shadow rounded-box">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Author"</th>
                                <th>"Category"</th>
                                <th>"Availability"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {library
                                .into_iter()
                                .map(|b| {
                                    view! {
                                        <tr>
                                            <td>{b.title}</td>
                                            <td>{b.author}</td>
                                            <td>{b.category}</td>
                                            <td>
                                                {if b.available {
                                                    view! {
                                                        <span class="badge badge-success">
                                                            {format!(
                                                                "{} of {}",
                                                                b.available_copies,
                                                                b.total_copies,
                                                            )}
                                                        </span>
                                                    }
                                                        .into_any()
                                                } else {
                                                    view! {
                                                        <span class="badge badge-ghost">"Unavailable"</span>
                                                    }
                                                        .into_any()
                                                }}
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

fn events_tab(
    events: Vec<Event>,
    user_id: String,
    on_register: Callback<String>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-3">
            {events
                .into_iter()
                .map(|event| {
                    let registered = view::is_registered(&event, &user_id);
                    let id = event.id.clone();
                    let action = if !event.registration_required {
                        view! { <span class="badge badge-ghost">"Open to all"</span> }.into_any()
                    } else if registered {
                        view! {
                            <span class="badge badge-success gap-1">
                                <CircleCheck attr:class="h-4 w-4" />
                                "Registered"
                            </span>
                        }
                            .into_any()
                    } else {
                        view! {
                            <button
                                class="btn btn-primary btn-sm"
                                disabled=move || busy.get()
                                on:click=move |_| on_register.run(id.clone())
                            >
                                "Register"
                            </button>
                        }
                            .into_any()
                    };
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body py-4">
                                <div class="flex items-start justify-between">
                                    <h3 class="card-title text-base">{event.title}</h3>
                                    <span class="badge badge-outline">{event.event_type.label()}</span>
                                </div>
                                <p class="text-sm text-base-content/70">{event.description}</p>
                                <p class="text-sm">
                                    {format!("{} · {} · {}", event.date, event.time, event.location)}
                                </p>
                                <div class="card-actions justify-end">{action}</div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

fn complaints_tab(
    complaints: Vec<Complaint>,
    user_id: String,
    user_name: String,
    dialog_open: RwSignal<bool>,
    on_submit: Callback<Complaint>,
    on_vote: Callback<String>,
    busy: Signal<bool>,
) -> impl IntoView {
    // Public complaints plus the student's own private ones.
    let visible: Vec<Complaint> = view::visible_complaints(&complaints, &user_id)
        .into_iter()
        .cloned()
        .collect();
    let voter_id = user_id.clone();

    view! {
        <div class="space-y-3">
            <div class="flex justify-end">
                <ComplaintDialog
                    open=dialog_open
                    submitted_by=user_id
                    submitted_by_name=user_name
                    on_submit=on_submit
                    busy=busy
                />
            </div>
            {visible
                .into_iter()
                .map(|c| {
                    let voted = view::has_voted(&c, &voter_id);
                    let id = c.id.clone();
                    let resolved = c.status == ComplaintStatus::Resolved;
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body py-4">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="font-semibold">{c.title}</h3>
                                        <p class="text-sm text-base-content/70">{c.description}</p>
                                        <p class="text-xs text-base-content/50 mt-1">
                                            {format!("{} · {}", c.submitted_by_name, c.submitted_date)}
                                        </p>
                                    </div>
                                    <span class=if resolved {
                                        "badge badge-success"
                                    } else {
                                        "badge badge-warning"
                                    }>{if resolved { "resolved" } else { "pending" }}</span>
                                </div>
                                {c
                                    .response
                                    .map(|response| {
                                        view! {
                                            <div class="bg-base-200 rounded-box p-3 text-sm mt-2">
                                                <span class="font-semibold">"Response: "</span>
                                                {response}
                                            </div>
                                        }
                                    })}
                                <div class="card-actions justify-end">
                                    <button
                                        class=if voted {
                                            "btn btn-primary btn-sm gap-1"
                                        } else {
                                            "btn btn-outline btn-sm gap-1"
                                        }
                                        disabled=move || busy.get()
                                        on:click=move |_| on_vote.run(id.clone())
                                    >
                                        <ThumbsUp attr:class="h-4 w-4" />
                                        {c.votes}
                                    </button>
                                </div>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
