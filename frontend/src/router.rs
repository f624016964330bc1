use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::api::ApiClient;
use crate::pages::auth::AuthPage;

/// Mounts the application. wasm32 only; host tests render `app_root`'s
/// pieces to strings instead.
#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(ApiClient::new());
    view! {
        <Router>
            <Routes>
                <Route path="/" view=AuthPage/>
                <Route path="/*any" view=NotFound/>
            </Routes>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! { <h1 class="text-xl font-bold">"Not Found"</h1> }
}
