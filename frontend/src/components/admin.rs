//! Admin dashboard.
//!
//! Sees every collection, manages users/events/notices, resolves
//! complaints and waives attendance shortfalls. Every mutation goes
//! through the single-in-flight guard and re-fetches the full bundle on
//! success.

use campuslink_shared::{
    Attendance, AttendanceWaiver, Complaint, ComplaintStatus, ComplaintType, Event, Grade, Notice,
    Role, Student, User, view,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiResult, CampusApi, use_api};
use crate::components::dialogs::{EventDialog, NoticeDialog, ResolveDialog, UserDialog, WaiverDialog};
use crate::components::header::DashboardHeader;
use crate::components::icons::{MessageSquare, Users};
use crate::components::notify::{NotificationToast, Notifier};
use crate::components::tabs::TabBar;
use crate::components::widgets::{error_view, loading_view, notice_cards};
use crate::session::use_session;
use crate::view_state::{Loader, MutationGuard, ViewState};

const TABS: &[(&str, &str)] = &[
    ("overview", "Overview"),
    ("users", "Users"),
    ("attendance", "Attendance"),
    ("events", "Events"),
    ("notices", "Notices"),
    ("complaints", "Complaints"),
];

#[derive(Clone, PartialEq)]
struct AdminData {
    users: Vec<User>,
    students: Vec<Student>,
    grades: Vec<Grade>,
    attendance: Vec<Attendance>,
    events: Vec<Event>,
    notices: Vec<Notice>,
    complaints: Vec<Complaint>,
}

async fn fetch_data(api: CampusApi) -> ApiResult<AdminData> {
    let (users, students, grades, attendance, events, notices, complaints) = futures::try_join!(
        api.get_users(),
        api.get_students(),
        api.get_all_grades(),
        api.get_all_attendance(),
        api.get_events(),
        api.get_notices(),
        api.get_complaints(),
    )?;
    Ok(AdminData {
        users,
        students,
        grades,
        attendance,
        events,
        notices,
        complaints,
    })
}

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let Some(identity) = session.state.get_untracked().identity else {
        return ().into_any();
    };
    let admin_id = identity.id.clone();
    let user_name = identity.name.clone();

    let state = RwSignal::new(ViewState::<AdminData>::Loading);
    let loader = Loader::new();
    let guard = MutationGuard::new();
    let notifier = Notifier::new();
    let active_tab = RwSignal::new(TABS[0].0);

    let user_open = RwSignal::new(false);
    let event_open = RwSignal::new(false);
    let notice_open = RwSignal::new(false);
    let resolve_target = RwSignal::new(Option::<Complaint>::None);
    let waiver_target = RwSignal::new(Option::<Attendance>::None);

    {
        let api = api.clone();
        loader.spawn(state, fetch_data(api));
    }

    let on_refresh = Callback::new({
        let api = api.clone();
        move |_| loader.spawn(state, fetch_data(api.clone()))
    });

    let on_create_user = Callback::new({
        let api = api.clone();
        move |user: User| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.create_user(&user).await {
                    Ok(_) => {
                        user_open.set(false);
                        notifier.success("User created");
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_delete_user = Callback::new({
        let api = api.clone();
        move |user_id: String| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.delete_user(&user_id).await {
                    Ok(()) => {
                        notifier.success("User deleted");
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_create_event = Callback::new({
        let api = api.clone();
        move |event: Event| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.create_event(&event).await {
                    Ok(_) => {
                        event_open.set(false);
                        notifier.success("Event created");
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_post_notice = Callback::new({
        let api = api.clone();
        move |notice: Notice| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.create_notice(&notice).await {
                    Ok(_) => {
                        notice_open.set(false);
                        notifier.success("Notice posted");
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_delete_notice = Callback::new({
        let api = api.clone();
        move |notice_id: String| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.delete_notice(&notice_id).await {
                    Ok(()) => {
                        notifier.success("Notice deleted");
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_resolve = Callback::new({
        let api = api.clone();
        move |(complaint_id, response): (String, String)| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.resolve_complaint(&complaint_id, &response).await {
                    Ok(_) => {
                        resolve_target.set(None);
                        notifier.success("Complaint resolved");
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_waive = Callback::new({
        let api = api.clone();
        move |waiver: AttendanceWaiver| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.waive_attendance(&waiver).await {
                    Ok(ack) => {
                        waiver_target.set(None);
                        notifier.success(ack.message);
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_reset = Callback::new({
        let api = api.clone();
        move |_| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            spawn_local(async move {
                match api.reset_demo_data().await {
                    Ok(ack) => {
                        notifier.success(ack.message);
                        loader.run(state, fetch_data(api)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let self_id = admin_id.clone();
    let poster = identity.name.clone();
    view! {
        <div class="min-h-screen bg-base-200">
            <DashboardHeader title="Admin Dashboard" user_name=user_name on_refresh=on_refresh />
            <NotificationToast notifier=notifier />
            <div class="p-4 space-y-4 max-w-6xl mx-auto">
                <TabBar tabs=TABS active=active_tab />
                {move || match state.get() {
                    ViewState::Loading => loading_view().into_any(),
                    ViewState::Error(msg) => error_view(msg, on_refresh).into_any(),
                    ViewState::Ready(data) => {
                        match active_tab.get() {
                            "users" => {
                                users_tab(
                                        data.users,
                                        self_id.clone(),
                                        user_open,
                                        on_create_user,
                                        on_delete_user,
                                        guard.busy(),
                                    )
                                    .into_any()
                            }
                            "attendance" => {
                                attendance_tab(data.attendance, waiver_target, guard.busy())
                                    .into_any()
                            }
                            "events" => {
                                events_tab(data.events, event_open, on_create_event, guard.busy())
                                    .into_any()
                            }
                            "notices" => {
                                notices_tab(
                                        data.notices,
                                        notice_open,
                                        poster.clone(),
                                        on_post_notice,
                                        on_delete_notice,
                                        guard.busy(),
                                    )
                                    .into_any()
                            }
                            "complaints" => {
                                complaints_tab(data.complaints, resolve_target, guard.busy())
                                    .into_any()
                            }
                            _ => overview_tab(&data, on_reset, guard.busy()).into_any(),
                        }
                    }
                }}
            </div>
            <ResolveDialog target=resolve_target on_resolve=on_resolve busy=guard.busy() />
            <WaiverDialog target=waiver_target on_waive=on_waive busy=guard.busy() />
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

fn overview_tab(data: &AdminData, on_reset: Callback<()>, busy: Signal<bool>) -> impl IntoView {
    let students = view::count_by_role(&data.users, Role::Student);
    let teachers = view::count_by_role(&data.users, Role::Teacher);
    let pending = view::pending_complaints(&data.complaints);

    view! {
        <div class="space-y-4">
            <div class="grid grid-cols-2 md:grid-cols-3 gap-4">
                {stat_card("Students", students.to_string())}
                {stat_card("Teachers", teachers.to_string())}
                {stat_card("Student profiles", data.students.len().to_string())}
                {stat_card("Grade records", data.grades.len().to_string())}
                {stat_card("Events", data.events.len().to_string())}
                {stat_card("Pending complaints", pending.to_string())}
            </div>
            <div class="card bg-base-100 shadow">
                <div class="card-body py-4">
                    <h2 class="card-title text-base">"Demo data"</h2>
                    <p class="text-sm text-base-content/70">
                        "Restore the backend to its seeded demo dataset. All changes are lost."
                    </p>
                    <div class="card-actions justify-end">
                        <button
                            class="btn btn-outline btn-error btn-sm"
                            disabled=move || busy.get()
                            on:click=move |_| on_reset.run(())
                        >
                            "Reset demo data"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

fn users_tab(
    users: Vec<User>,
    self_id: String,
    dialog_open: RwSignal<bool>,
    on_create: Callback<User>,
    on_delete: Callback<String>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <div class="flex items-center justify-between">
                <h2 class="text-lg font-semibold flex items-center gap-2">
                    <Users attr:class="h-5 w-5 text-primary" />
                    "Users"
                </h2>
                <UserDialog open=dialog_open on_add=on_create busy=busy />
            </div>
            <div class="overflow-x-auto">
                <table class="table bg-base-100 shadow rounded-box">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Username"</th>
                            <th>"Role"</th>
                            <th>"Email"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {users
                            .into_iter()
                            .map(|u| {
                                let id = u.id.clone();
                                let deletable = u.id != self_id;
                                view! {
                                    <tr>
                                        <td>{u.name}</td>
                                        <td>{u.username}</td>
                                        <td>
                                            <span class="badge badge-outline">
                                                {u.role.to_string()}
                                            </span>
                                        </td>
                                        <td>{u.email}</td>
                                        <td>
                                            {deletable
                                                .then(|| {
                                                    view! {
                                                        <button
                                                            class="btn btn-ghost btn-xs text-error"
                                                            disabled=move || busy.get()
                                                            on:click=move |_| on_delete.run(id.clone())
                                                        >
                                                            "Delete"
                                                        </button>
                                                    }
                                                })}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn attendance_tab(
    attendance: Vec<Attendance>,
    waiver_target: RwSignal<Option<Attendance>>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="table bg-base-100 shadow rounded-box">
                <thead>
                    <tr>
                        <th>"Student"</th>
                        <th>"Subject"</th>
                        <th>"Attended"</th>
                        <th>"Percentage"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {attendance
                        .into_iter()
                        .map(|a| {
                            let shortfall = a.percentage < 75.0;
                            let row = a.clone();
                            view! {
                                <tr>
                                    <td>{a.student_name}</td>
                                    <td>{format!("{} ({})", a.subject, a.subject_code)}</td>
                                    <td>{format!("{} / {}", a.attended_classes, a.total_classes)}</td>
                                    <td>
                                        <span class=if shortfall {
                                            "text-error font-semibold"
                                        } else {
                                            ""
                                        }>{format!("{:.1}%", a.percentage)}</span>
                                    </td>
                                    <td>
                                        {shortfall
                                            .then(|| {
                                                view! {
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| waiver_target.set(Some(row.clone()))
                                                    >
                                                        "Waive"
                                                    </button>
                                                }
                                            })}
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

fn events_tab(
    events: Vec<Event>,
    dialog_open: RwSignal<bool>,
    on_create: Callback<Event>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <div class="flex justify-end">
                <EventDialog open=dialog_open on_add=on_create busy=busy />
            </div>
            <div class="grid md:grid-cols-2 gap-3">
                {events
                    .into_iter()
                    .map(|event| {
                        view! {
                            <div class="card bg-base-100 shadow">
                                <div class="card-body py-4">
                                    <div class="flex items-start justify-between">
                                        <h3 class="card-title text-base">{event.title}</h3>
                                        <span class="badge badge-outline">
                                            {event.event_type.label()}
                                        </span>
                                    </div>
                                    <p class="text-sm text-base-content/70">{event.description}</p>
                                    <p class="text-sm">
                                        {format!(
                                            "{} · {} · {}",
                                            event.date,
                                            event.time,
                                            event.location,
                                        )}
                                    </p>
                                    <p class="text-xs text-base-content/50">
                                        {format!("{} registered", event.registered_users.len())}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

fn notices_tab(
    notices: Vec<Notice>,
    dialog_open: RwSignal<bool>,
    posted_by: String,
    on_post: Callback<Notice>,
    on_delete: Callback<String>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <div class="flex justify-end">
                <NoticeDialog open=dialog_open posted_by=posted_by on_post=on_post busy=busy />
            </div>
            {notice_cards(notices, Some(on_delete), busy)}
        </div>
    }
}

fn complaints_tab(
    complaints: Vec<Complaint>,
    resolve_target: RwSignal<Option<Complaint>>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h2 class="text-lg font-semibold flex items-center gap-2">
                <MessageSquare attr:class="h-5 w-5 text-primary" />
                "Complaints"
            </h2>
            {complaints
                .into_iter()
                .map(|c| {
                    let pending = c.status == ComplaintStatus::Pending;
                    let row = c.clone();
                    view! {
                        <div class="card bg-base-100 shadow">
                            <div class="card-body py-4">
                                <div class="flex items-start justify-between">
                                    <div>
                                        <h3 class="font-semibold">{c.title}</h3>
                                        <p class="text-sm text-base-content/70">{c.description}</p>
                                        <p class="text-xs text-base-content/50 mt-1">
                                            {format!(
                                                "{} · {} · {} votes",
                                                c.submitted_by_name,
                                                c.submitted_date,
                                                c.votes,
                                            )}
                                        </p>
                                    </div>
                                    <div class="flex items-center gap-2">
                                        <span class="badge badge-ghost">
                                            {if c.complaint_type == ComplaintType::Private {
                                                "private"
                                            } else {
                                                "public"
                                            }}
                                        </span>
                                        <span class=if pending {
                                            "badge badge-warning"
                                        } else {
                                            "badge badge-success"
                                        }>{if pending { "pending" } else { "resolved" }}</span>
                                    </div>
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
                                {pending
                                    .then(|| {
                                        view! {
                                            <div class="card-actions justify-end">
                                                <button
                                                    class="btn btn-primary btn-sm"
                                                    disabled=move || busy.get()
                                                    on:click=move |_| resolve_target.set(Some(row.clone()))
                                                >
                                                    "Resolve"
                                                </button>
                                            </div>
                                        }
                                    })}
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
