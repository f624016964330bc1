use super::repository::LoginRepository;
use crate::api::{ApiClient, ApiError, LoginRequest, RawResponse, SubmitOutcome};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginViewModel {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub outcome: RwSignal<Option<SubmitOutcome>>,
    pub submit_action: Action<LoginRequest, Result<RawResponse, ApiError>>,
}

pub fn use_login_view_model() -> LoginViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = LoginRepository::new_with_client(Rc::new(api));

    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let outcome = create_rw_signal(None);

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |request: &LoginRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move { repo.login(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            outcome.set(Some(SubmitOutcome::from_result(result)));
        }
    });

    LoginViewModel {
        email,
        password,
        outcome,
        submit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.email.get().is_empty());
            assert!(vm.password.get().is_empty());
            assert!(vm.outcome.get().is_none());
        });
    }

    #[test]
    fn editing_one_field_leaves_the_rest_untouched() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.email.set("a@example.com".into());
            assert_eq!(vm.email.get(), "a@example.com");
            assert!(vm.password.get().is_empty());
            assert!(vm.outcome.get().is_none());
        });
    }
}
