#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::RawResponse;
    use std::collections::BTreeMap;

    pub fn raw_response(status: u16, body: &str) -> RawResponse {
        let mut headers = BTreeMap::new();
        headers.insert("content-type".into(), "application/json".into());
        RawResponse {
            status,
            headers,
            body: body.to_string(),
        }
    }
}
