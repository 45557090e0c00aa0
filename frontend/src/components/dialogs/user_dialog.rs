//! User creation dialog (admin).
//!
//! Role is chosen at creation and immutable in this UI afterwards.

use campuslink_shared::{Role, User, forms};
use leptos::prelude::*;

use crate::components::icons::Plus;
use crate::util;

fn role_from(value: &str) -> Role {
    match value {
        "teacher" => Role::Teacher,
        "admin" => Role::Admin,
        _ => Role::Student,
    }
}

#[component]
pub fn UserDialog(
    open: RwSignal<bool>,
    #[prop(into)] on_add: Callback<User>,
    busy: Signal<bool>,
) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (role, set_role) = signal(Role::Student);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                set_username.set(String::new());
                set_password.set(String::new());
                set_name.set(String::new());
                set_email.set(String::new());
                set_role.set(Role::Student);
                set_error_msg.set(None);
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
        if let Err(e) = forms::validate_user(&username.get(), &password.get(), &name.get(), &email.get()) {
            set_error_msg.set(Some(e.to_string()));
            return;
        }

        set_error_msg.set(None);
        on_add.run(User {
            id: forms::make_id("U", util::now_ms()),
            username: username.get().trim().to_string(),
            password: password.get(),
            role: role.get(),
            name: name.get().trim().to_string(),
            email: email.get().trim().to_string(),
            profile_pic: None,
        });
    };

    view! {
        <button class="btn btn-primary gap-2" on:click=move |_| open.set(true)>
            <Plus attr:class="h-4 w-4" /> "New user"
        </button>

        <dialog class="modal" node_ref=dialog_ref on:close=move |_| open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"Create user"</h3>

                <form on:submit=on_submit class="space-y-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap()}</span>
                        </div>
                    </Show>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="user_username" class="label">
                                <span class="label-text">"Username"</span>
                            </label>
                            <input
                                id="user_username"
                                required
                                type="text"
                                on:input=move |ev| set_username.set(event_target_value(&ev))
                                prop:value=username
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label for="user_password" class="label">
                                <span class="label-text">"Password"</span>
                            </label>
                            <input
                                id="user_password"
                                required
                                type="password"
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                                prop:value=password
                                class="input input-bordered w-full"
                            />
                        </div>
                    </div>

                    <div class="form-control">
                        <label for="user_name" class="label">
                            <span class="label-text">"Full name"</span>
                        </label>
                        <input
                            id="user_name"
                            required
                            type="text"
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:value=name
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="grid grid-cols-2 gap-4">
                        <div class="form-control">
                            <label for="user_email" class="label">
                                <span class="label-text">"Email"</span>
                            </label>
                            <input
                                id="user_email"
                                required
                                type="email"
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                                prop:value=email
                                class="input input-bordered w-full"
                            />
                        </div>
                        <div class="form-control">
                            <label class="label">
                                <span class="label-text">"Role"</span>
                            </label>
                            <select
                                class="select select-bordered w-full"
                                on:change=move |ev| set_role.set(role_from(&event_target_value(&ev)))
                            >
                                <option value="student">"Student"</option>
                                <option value="teacher">"Teacher"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </div>
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn btn-ghost" on:click=move |_| open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" disabled=move || busy.get() class="btn btn-primary">
                            "Create user"
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
