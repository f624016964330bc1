use leptos::*;
use leptos_meta::Title;

pub mod landing;
pub mod login;
pub mod signup;

use landing::LandingPanel;
use login::LoginPanel;
use signup::SignupPanel;

/// The three mutually exclusive views hosted by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthTab {
    Landing,
    Login,
    Signup,
}

impl AuthTab {
    pub const ALL: [AuthTab; 3] = [AuthTab::Landing, AuthTab::Login, AuthTab::Signup];

    pub fn label(self) -> &'static str {
        match self {
            AuthTab::Landing => "Welcome",
            AuthTab::Login => "Login",
            AuthTab::Signup => "Sign Up",
        }
    }
}

/// Pure mapping from the current selection to the one visible panel.
fn active_panel(tab: AuthTab, on_select: Callback<AuthTab>) -> View {
    match tab {
        AuthTab::Landing => view! { <LandingPanel on_select=on_select/> }.into_view(),
        AuthTab::Login => view! { <LoginPanel/> }.into_view(),
        AuthTab::Signup => view! { <SignupPanel/> }.into_view(),
    }
}

#[component]
fn TabBar(active: ReadSignal<AuthTab>, #[prop(into)] on_select: Callback<AuthTab>) -> impl IntoView {
    view! {
        <nav class="flex gap-1 border-b border-form-control-border" role="tablist">
            {AuthTab::ALL
                .into_iter()
                .map(|tab| {
                    view! {
                        <button
                            type="button"
                            role="tab"
                            aria-selected=move || (active.get() == tab).to_string()
                            class="px-4 py-2 text-sm font-medium rounded-t-md"
                            class=("bg-action-primary-bg", move || active.get() == tab)
                            class=("text-action-primary-text", move || active.get() == tab)
                            class=("text-fg-muted", move || active.get() != tab)
                            on:click=move |_| on_select.call(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Hosts the three panels. The selection signal is the only shell state; it
/// starts at Landing on every mount and changes only through the tab bar or
/// the landing buttons.
#[component]
pub fn AuthShell() -> impl IntoView {
    let (tab, set_tab) = create_signal(AuthTab::Landing);
    let on_select = Callback::new(move |next: AuthTab| set_tab.set(next));

    view! {
        <div class="min-h-screen bg-surface py-12 px-4 sm:px-6 lg:px-8">
            <div class="max-w-md mx-auto space-y-6">
                <TabBar active=tab on_select=on_select/>
                <main>{move || active_panel(tab.get(), on_select)}</main>
            </div>
        </div>
    }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    view! {
        <Title text="Gambit"/>
        <AuthShell/>
    }
}
