use super::view_model::use_signup_view_model;
use crate::api::SignupRequest;
use crate::components::messages::ResultLine;
use crate::utils::nav::RedirectTimer;
use leptos::*;

#[component]
pub fn SignupPanel() -> impl IntoView {
    let vm = use_signup_view_model();
    let name = vm.name;
    let email = vm.email;
    let password = vm.password;
    let outcome = vm.outcome;
    let submit_action = vm.submit_action;

    // Dropped (and the pending navigation cancelled) with the panel.
    let redirect_timer = store_value(RedirectTimer::default());

    create_effect(move |_| {
        if let Some(outcome) = outcome.get() {
            if outcome.is_success() {
                redirect_timer.update_value(|timer| timer.schedule());
            }
        }
    });

    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_action.dispatch(SignupRequest {
            name: name.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <div>
                <label for="signup-name" class="block text-sm font-medium text-fg">
                    "Name"
                </label>
                <input
                    id="signup-name"
                    name="name"
                    type="text"
                    placeholder="Enter name"
                    class="mt-1 block w-full px-3 py-2 rounded-md border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text sm:text-sm"
                    prop:value=name
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="signup-email" class="block text-sm font-medium text-fg">
                    "Email address"
                </label>
                <input
                    id="signup-email"
                    name="email"
                    type="email"
                    placeholder="Enter email"
                    class="mt-1 block w-full px-3 py-2 rounded-md border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text sm:text-sm"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="signup-password" class="block text-sm font-medium text-fg">
                    "Password"
                </label>
                <input
                    id="signup-password"
                    name="password"
                    type="password"
                    placeholder="Password"
                    class="mt-1 block w-full px-3 py-2 rounded-md border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text sm:text-sm"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </div>
            <button
                type="submit"
                class="w-full flex justify-center py-2 px-4 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
            >
                "Submit"
            </button>
            <ResultLine outcome=outcome/>
        </form>
    }
}
