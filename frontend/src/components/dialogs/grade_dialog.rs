//! Grade edit dialog.
//!
//! Part A and part B are validated against their ranges before the
//! callback runs; the total and letter grade are recomputed client-side
//! so the submitted record stays internally consistent.

use campuslink_shared::{Grade, forms, grade};
use leptos::prelude::*;

#[component]
pub fn GradeDialog(
    /// Row being edited; `None` keeps the dialog closed.
    editing: RwSignal<Option<Grade>>,
    #[prop(into)] on_save: Callback<Grade>,
    /// True while the save mutation is in flight.
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (part_a, set_part_a) = signal(String::new());
    let (part_b, set_part_b) = signal(String::new());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    // Seed the inputs from the selected row and sync the modal element.
    Effect::new(move |_| {
        if let Some(row) = editing.get() {
            set_part_a.set(row.part_a_marks.to_string());
            set_part_b.set(row.part_b_marks.to_string());
            set_error_msg.set(None);
        }
        if let Some(dialog) = dialog_ref.get() {
            if editing.get().is_some() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(mut row) = editing.get_untracked() else {
            return;
        };
        match forms::validate_grade_marks(&part_a.get(), &part_b.get()) {
            Ok((a, b, total)) => {
                row.part_a_marks = a;
                row.part_b_marks = b;
                row.total_marks = total;
                row.grade = grade::letter_for(total);
                set_error_msg.set(None);
                on_save.run(row);
            }
            Err(e) => set_error_msg.set(Some(e.to_string())),
        }
    };

    view! {
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| editing.set(None)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Edit grade"</h3>
                <p class="py-2 text-base-content/70">
                    {move || {
                        editing
                            .get()
                            .map(|row| format!("{} — {} ({})", row.student_name, row.subject, row.subject_code))
                            .unwrap_or_default()
                    }}
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="part_a" class="label">
                                <span class="label-text">"Part A (out of 10)"</span>
                            </label>
                            <input
                                id="part_a"
                                required
                                type="number"
                                on:input=move |ev| set_part_a.set(event_target_value(&ev))
                                prop:value=part_a
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="part_b" class="label">
                                <span class="label-text">"Part B (out of 40)"</span>
                            </label>
                            <input
                                id="part_b"
                                required
                                type="number"
                                on:input=move |ev| set_part_b.set(event_target_value(&ev))
                                prop:value=part_b
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    // Live preview of total and letter while typing
                    <div class="text-sm text-base-content/70">
                        {move || {
                            match forms::validate_grade_marks(&part_a.get(), &part_b.get()) {
                                Ok((_, _, total)) => {
                                    format!("Total: {} / 50 — grade {}", total, grade::letter_for(total))
                                }
                                Err(_) => String::new(),
                            }
                        }}
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| editing.set(None)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            {move || {
                                if busy.get() {
                                    view! {
                                        <span class="loading loading-spinner"></span>
                                        "Saving..."
                                    }
                                        .into_any()
                                } else {
                                    "Save grade".into_any()
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
            <form method="dialog" class="modal-backdrop">
                <button>"close"</button>
            </form>
        </dialog>
    }
}
