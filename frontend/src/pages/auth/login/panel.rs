use super::view_model::use_login_view_model;
use crate::api::LoginRequest;
use crate::components::messages::ResultLine;
use crate::utils::nav::RedirectTimer;
use leptos::*;

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let email = vm.email;
    let password = vm.password;
    let outcome = vm.outcome;
    let submit_action = vm.submit_action;

    // The redirect handle lives with the panel; it is dropped (and the
    // pending navigation cancelled) when the panel is unmounted.
    let redirect_timer = store_value(RedirectTimer::default());

    create_effect(move |_| {
        if let Some(outcome) = outcome.get() {
            if outcome.is_success() {
                redirect_timer.update_value(|timer| timer.schedule());
            }
        }
    });

    // A second submit while one request is in flight starts an independent
    // request; whichever response completes last owns the result line.
    // TODO: attach a request generation token if stale responses overtaking
    // newer ones shows up in practice.
    let handle_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        submit_action.dispatch(LoginRequest {
            email: email.get_untracked(),
            password: password.get_untracked(),
        });
    };

    view! {
        <form class="space-y-4" on:submit=handle_submit>
            <div>
                <label for="login-email" class="block text-sm font-medium text-fg">
                    "Email address"
                </label>
                <input
                    id="login-email"
                    name="email"
                    type="email"
                    placeholder="Enter email"
                    class="mt-1 block w-full px-3 py-2 rounded-md border border-form-control-border bg-form-control-bg placeholder-form-control-placeholder text-form-control-text sm:text-sm"
                    prop:value=email
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <div>
                <label for="login-password" class="block text-sm font-medium text-fg">
                    "Password"
                </label>
                <input
                    id="login-password"
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
