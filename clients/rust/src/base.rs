use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use thiserror::Error;

pub(crate) struct BaseClient {
    address: String,
    api_token: Option<String>,
    client: Client,
}

#[derive(Error, Debug)]
pub enum APIError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("The request was rejected as unauthorized")]
    Unauthorized,
    #[error("The request was not authenticated")]
    Unauthenticated,
    #[error("The request body was rejected as invalid")]
    BadClientData,
    #[error("Unexpected status code: {0}")]
    UnexpectedStatusCode(StatusCode),
}
pub type APIResponse<T> = Result<T, APIError>;

/// Create endpoints answer with either of these
pub(crate) const CREATED: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];

pub(crate) fn check_status_code(
    status: StatusCode,
    expected_status_codes: &[StatusCode],
) -> APIResponse<()> {
    if expected_status_codes.contains(&status) {
        return Ok(());
    }
    Err(match status {
        StatusCode::BAD_REQUEST => APIError::BadClientData,
        StatusCode::UNAUTHORIZED => APIError::Unauthenticated,
        StatusCode::FORBIDDEN => APIError::Unauthorized,
        status => APIError::UnexpectedStatusCode(status),
    })
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        Self {
            address: address.trim_end_matches('/').to_string(),
            api_token: None,
            client: Client::new(),
        }
    }

    pub fn set_api_token(&mut self, api_token: String) {
        self.api_token = Some(api_token);
    }

    fn get_client(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}/{}", self.address, path);
        let builder = self.client.request(method, &url);

        match &self.api_token {
            Some(api_token) => builder.bearer_auth(api_token),
            None => builder,
        }
    }

    fn handle_api_response(
        &self,
        res: Response,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<()> {
        check_status_code(res.status(), expected_status_codes)
    }

    /// Posts a JSON body. Response bodies are not inspected.
    pub async fn post<S: Serialize>(
        &self,
        body: S,
        path: &str,
        expected_status_codes: &[StatusCode],
    ) -> APIResponse<()> {
        let res = self
            .get_client(Method::POST, path)
            .json(&body)
            .send()
            .await
            .map_err(|e| APIError::Network(e.to_string()))?;
        self.handle_api_response(res, expected_status_codes)
    }
}
