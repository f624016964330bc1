use super::AuthTab;
use leptos::*;

/// Entry panel: a welcome blurb plus shortcuts into either form.
#[component]
pub fn LandingPanel(#[prop(into)] on_select: Callback<AuthTab>) -> impl IntoView {
    view! {
        <div class="text-center">
            <h1 class="text-4xl font-extrabold text-fg">"Welcome to Gambit"</h1>
            <p class="mt-3 text-base text-fg-muted">
                "Log in with your account to continue."
            </p>
            <hr class="my-6 border-form-control-border"/>
            <div class="flex gap-2 justify-center">
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                    on:click=move |_| on_select.call(AuthTab::Login)
                >
                    "Login"
                </button>
                <button
                    type="button"
                    class="px-4 py-2 rounded-md text-sm font-medium text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg-hover"
                    on:click=move |_| on_select.call(AuthTab::Signup)
                >
                    "Sign Up"
                </button>
            </div>
        </div>
    }
}
