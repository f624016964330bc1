use crate::api::SubmitOutcome;
use leptos::*;

/// Verbatim outcome line shown under each form. Empty until the first
/// submission completes; afterwards it always shows the latest completed
/// request's outcome.
#[component]
pub fn ResultLine(outcome: RwSignal<Option<SubmitOutcome>>) -> impl IntoView {
    view! {
        <p class="mt-4 text-sm text-fg-muted break-all">
            "result: "
            {move || outcome.get().map(|o| o.display_text()).unwrap_or_default()}
        </p>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::ApiError;
    use crate::test_support::helpers::raw_response;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn result_line_starts_empty() {
        let html = render_to_string(|| {
            let outcome = create_rw_signal(None::<SubmitOutcome>);
            view! { <ResultLine outcome=outcome/> }
        });
        assert!(html.contains("result: "));
        assert!(!html.contains("error: "));
    }

    #[test]
    fn result_line_shows_a_failure_verbatim() {
        let html = render_to_string(|| {
            let outcome = create_rw_signal(Some(SubmitOutcome::from_result(Err(
                ApiError::transport("network down"),
            ))));
            view! { <ResultLine outcome=outcome/> }
        });
        assert!(html.contains("error: network down"));
    }

    #[test]
    fn result_line_shows_a_success_serialization() {
        let html = render_to_string(|| {
            let outcome = create_rw_signal(Some(SubmitOutcome::from_result(Ok(raw_response(
                200,
                r#"{"ok":true}"#,
            )))));
            view! { <ResultLine outcome=outcome/> }
        });
        assert!(html.contains("&quot;status&quot;:200") || html.contains("\"status\":200"));
    }
}
