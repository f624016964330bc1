use super::repository::SignupRepository;
use crate::api::{ApiClient, ApiError, RawResponse, SignupRequest, SubmitOutcome};
use leptos::*;
use std::rc::Rc;

#[derive(Clone)]
pub struct SignupViewModel {
    pub name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub outcome: RwSignal<Option<SubmitOutcome>>,
    pub submit_action: Action<SignupRequest, Result<RawResponse, ApiError>>,
}

pub fn use_signup_view_model() -> SignupViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = SignupRepository::new_with_client(Rc::new(api));

    let name = create_rw_signal(String::new());
    let email = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let outcome = create_rw_signal(None);

    let repo_for_submit = repository.clone();
    let submit_action = create_action(move |request: &SignupRequest| {
        let repo = repo_for_submit.clone();
        let request = request.clone();
        async move { repo.signup(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            outcome.set(Some(SubmitOutcome::from_result(result)));
        }
    });

    SignupViewModel {
        name,
        email,
        password,
        outcome,
        submit_action,
    }
}
