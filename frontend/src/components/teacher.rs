//! Teacher dashboard.
//!
//! Grades are scoped to the subjects this teacher actually teaches: the
//! subject codes come from their schedule entries and the grade list is
//! joined against that set on render.

use std::collections::BTreeSet;

use campuslink_shared::{
    Grade, Notice, Role, Schedule, Student, StudyMaterial, forms, grade, view,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiResult, CampusApi, use_api};
use crate::components::dialogs::{GradeDialog, MaterialDialog};
use crate::components::header::DashboardHeader;
use crate::components::notify::{NotificationToast, Notifier};
use crate::components::tabs::TabBar;
use crate::components::widgets::{error_view, loading_view, notice_cards, schedule_cards};
use crate::session::use_session;
use crate::util;
use crate::view_state::{Loader, MutationGuard, ViewState};

const TABS: &[(&str, &str)] = &[
    ("schedule", "My schedule"),
    ("grades", "Grades"),
    ("materials", "Materials"),
    ("notices", "Notices"),
];

#[derive(Clone, PartialEq)]
struct TeacherData {
    /// Only this teacher's schedule entries.
    schedules: Vec<Schedule>,
    grades: Vec<Grade>,
    students: Vec<Student>,
    materials: Vec<StudyMaterial>,
    notices: Vec<Notice>,
}

async fn fetch_data(api: CampusApi, teacher_id: String) -> ApiResult<TeacherData> {
    let (schedules, grades, students, materials, notices) = futures::try_join!(
        api.get_teacher_schedules(&teacher_id),
        api.get_all_grades(),
        api.get_students(),
        api.get_materials(),
        api.get_notices(),
    )?;
    Ok(TeacherData {
        schedules,
        grades,
        students,
        materials,
        notices,
    })
}

#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let session = use_session();
    let api = use_api();

    let Some(identity) = session.state.get_untracked().identity else {
        return ().into_any();
    };
    let user_id = identity.id.clone();
    let user_name = identity.name.clone();

    let state = RwSignal::new(ViewState::<TeacherData>::Loading);
    let loader = Loader::new();
    let guard = MutationGuard::new();
    let notifier = Notifier::new();
    let active_tab = RwSignal::new(TABS[0].0);

    let editing_grade = RwSignal::new(Option::<Grade>::None);
    let material_open = RwSignal::new(false);
    // "Add grade" picker state, kept across renders.
    let sel_student = RwSignal::new(String::new());
    let sel_subject = RwSignal::new(String::new());

    {
        let api = api.clone();
        let teacher_id = user_id.clone();
        loader.spawn(state, fetch_data(api, teacher_id));
    }

    let on_refresh = Callback::new({
        let api = api.clone();
        let teacher_id = user_id.clone();
        move |_| loader.spawn(state, fetch_data(api.clone(), teacher_id.clone()))
    });

    // Seeds a zero-marks grade for the picked student/subject pair and
    // hands it to the edit dialog.
    let on_add_grade = Callback::new(move |_| {
        let snapshot = state.get_untracked();
        let Some(data) = snapshot.ready() else {
            return;
        };
        let student_id = sel_student.get_untracked();
        let code = sel_subject.get_untracked();
        let Some(student) = data.students.iter().find(|s| s.id == student_id) else {
            notifier.error("Pick a student first");
            return;
        };
        if code.is_empty() {
            notifier.error("Pick a subject first");
            return;
        }
        let subject = data
            .schedules
            .iter()
            .find(|s| s.subject_code == code)
            .map(|s| s.subject.clone())
            .unwrap_or_else(|| code.clone());
        editing_grade.set(Some(Grade {
            id: forms::make_id("G", util::now_ms()),
            student_id: student.id.clone(),
            student_name: student.name.clone(),
            subject,
            subject_code: code,
            part_a_marks: 0,
            part_b_marks: 0,
            total_marks: 0,
            grade: grade::letter_for(0),
            semester: student.semester,
            year: student.year,
        }));
    });

    // Create vs. update is decided by whether the id already exists in
    // the fetched grade list.
    let on_save_grade = Callback::new({
        let api = api.clone();
        let teacher_id = user_id.clone();
        move |row: Grade| {
            if !guard.try_begin() {
                return;
            }
            let snapshot = state.get_untracked();
            let exists = snapshot
                .ready()
                .map(|d| d.grades.iter().any(|g| g.id == row.id))
                .unwrap_or(false);
            let api = api.clone();
            let teacher_id = teacher_id.clone();
            spawn_local(async move {
                let result = if exists {
                    api.update_grade(&row).await.map(|_| ())
                } else {
                    api.create_grade(&row).await.map(|_| ())
                };
                match result {
                    Ok(()) => {
                        editing_grade.set(None);
                        notifier.success("Grade saved");
                        loader.run(state, fetch_data(api, teacher_id)).await;
                    }
                    Err(e) => notifier.error(e.to_string()),
                }
                guard.finish();
            });
        }
    });

    let on_add_material = Callback::new({
        let api = api.clone();
        let teacher_id = user_id.clone();
        move |material: StudyMaterial| {
            if !guard.try_begin() {
                return;
            }
            let api = api.clone();
            let teacher_id = teacher_id.clone();
            spawn_local(async move {
                match api.create_material(&material).await {
                    Ok(_) => {
                        material_open.set(false);
                        notifier.success("Material uploaded");
                        loader.run(state, fetch_data(api, teacher_id)).await;
                    }
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
            <DashboardHeader title="Teacher Dashboard" user_name=user_name on_refresh=on_refresh />
            <NotificationToast notifier=notifier />
            <div class="p-4 space-y-4 max-w-6xl mx-auto">
                <TabBar tabs=TABS active=active_tab />
                {move || match state.get() {
                    ViewState::Loading => loading_view().into_any(),
                    ViewState::Error(msg) => error_view(msg, on_refresh).into_any(),
                    ViewState::Ready(data) => {
                        match active_tab.get() {
                            "grades" => {
                                grades_tab(
                                        &data,
                                        &uid,
                                        sel_student,
                                        sel_subject,
                                        on_add_grade,
                                        editing_grade,
                                        guard.busy(),
                                    )
                                    .into_any()
                            }
                            "materials" => {
                                materials_tab(
                                        data.materials,
                                        material_open,
                                        uname.clone(),
                                        on_add_material,
                                        guard.busy(),
                                    )
                                    .into_any()
                            }
                            "notices" => {
                                let notices: Vec<Notice> = view::notices_for(
                                        &data.notices,
                                        Role::Teacher,
                                    )
                                    .into_iter()
                                    .cloned()
                                    .collect();
                                notice_cards(notices, None, guard.busy()).into_any()
                            }
                            _ => schedule_cards(data.schedules).into_any(),
                        }
                    }
                }}
            </div>
            <GradeDialog editing=editing_grade on_save=on_save_grade busy=guard.busy() />
        </div>
    }
    .into_any()
}

fn grades_tab(
    data: &TeacherData,
    teacher_id: &str,
    sel_student: RwSignal<String>,
    sel_subject: RwSignal<String>,
    on_add: Callback<()>,
    editing: RwSignal<Option<Grade>>,
    busy: Signal<bool>,
) -> impl IntoView {
    let subjects: BTreeSet<String> = view::teacher_subject_codes(&data.schedules, teacher_id);
    let scoped: Vec<Grade> = view::grades_for_subjects(&data.grades, &subjects)
        .into_iter()
        .cloned()
        .collect();
    let students = data.students.clone();
    let subject_options: Vec<String> = subjects.into_iter().collect();

    view! {
        <div class="space-y-4">
            <div class="card bg-base-100 shadow">
                <div class="card-body py-4">
                    <h2 class="card-title text-base">"Add grade"</h2>
                    <div class="flex flex-wrap items-end gap-3">
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Student"</span>
                            </label>
                            <select
                                class="select select-bordered select-sm"
                                on:change=move |ev| sel_student.set(event_target_value(&ev))
                            >
                                <option value="">"Select student"</option>
                                {students
                                    .into_iter()
                                    .map(|s| {
                                        let label = format!("{} ({})", s.name, s.id);
                                        view! { <option value=s.id>{label}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Subject"</span>
                            </label>
                            <select
                                class="select select-bordered select-sm"
                                on:change=move |ev| sel_subject.set(event_target_value(&ev))
                            >
                                <option value="">"Select subject"</option>
                                {subject_options
                                    .into_iter()
                                    .map(|code| view! { <option value=code.clone()>{code.clone()}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <button
                            class="btn btn-primary btn-sm"
                            disabled=move || busy.get()
                            on:click=move |_| on_add.run(())
                        >
                            "Add grade"
                        </button>
                    </div>
                </div>
            </div>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <h2 class="card-title">"Grades for my subjects"</h2>
                    <div class="overflow-x-auto">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Student"</th>
                                    <th>"Subject"</th>
                                    <th>"Part A"</th>
                                    <th>"Part B"</th>
                                    <th>"Total"</th>
                                    <th>"Grade"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {scoped
                                    .into_iter()
                                    .map(|g| {
                                        let row = g.clone();
                                        view! {
                                            <tr>
                                                <td>{g.student_name}</td>
                                                <td>{format!("{} ({})", g.subject, g.subject_code)}</td>
                                                <td>{g.part_a_marks}</td>
                                                <td>{g.part_b_marks}</td>
                                                <td>{g.total_marks}</td>
                                                <td>
                                                    <span class="badge badge-primary">
                                                        {g.grade.to_string()}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn-ghost btn-xs"
                                                        disabled=move || busy.get()
                                                        on:click=move |_| editing.set(Some(row.clone()))
                                                    >
                                                        "Edit"
                                                    </button>
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

fn materials_tab(
    materials: Vec<StudyMaterial>,
    dialog_open: RwSignal<bool>,
    uploaded_by: String,
    on_add: Callback<StudyMaterial>,
    busy: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <div class="flex justify-end">
                <MaterialDialog open=dialog_open uploaded_by=uploaded_by on_add=on_add busy=busy />
            </div>
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
    }
}
