use crate::api::{ApiClient, ApiError, LoginRequest, RawResponse};
use std::rc::Rc;

#[derive(Clone)]
pub struct LoginRepository {
    client: Rc<ApiClient>,
}

impl LoginRepository {
    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn login(&self, request: LoginRequest) -> Result<RawResponse, ApiError> {
        self.client.login(request).await
    }
}
