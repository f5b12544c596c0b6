//! HTTP helpers for the showroom REST API.
//!
//! Reads (`GET`) answer with the bare payload. Mutations answer with the
//! `{ success, message, data }` envelope. Every request carries the
//! session's bearer token when one exists.

use contracts::domain::common::ApiResponse;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::api_error::{classify_status, ApiError};

/// Request context taken from `AppGlobalContext::api`: the resolved API
/// base and the current session token.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base: base.into(),
            token,
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Builds `<base><path>[?<query>]`; an empty query adds nothing.
    pub fn url<Q: Serialize>(&self, path: &str, query: Option<&Q>) -> Result<String, ApiError> {
        let mut url = format!("{}{}", self.base, path);
        if let Some(query) = query {
            let qs = serde_qs::to_string(query).map_err(|e| ApiError::Decode(e.to_string()))?;
            if !qs.is_empty() {
                url.push('?');
                url.push_str(&qs);
            }
        }
        Ok(url)
    }

    /// `Authorization` header value, if signed in.
    pub fn bearer(&self) -> Option<String> {
        self.token.as_ref().map(|token| format!("Bearer {}", token))
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    pub async fn get_json<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize,
    {
        let url = self.url(path, query)?;
        let response = self
            .authorized(Request::get(&url))
            .send()
            .await
            .map_err(network)?;
        read_response(response).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<Option<T>, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url::<()>(path, None)?;
        let response = self
            .authorized(Request::post(&url))
            .json(body)
            .map_err(network)?
            .send()
            .await
            .map_err(network)?;
        read_envelope(response).await
    }

    /// `POST` whose parameters travel in the query string.
    pub async fn post_query<Q, T>(&self, path: &str, query: &Q) -> Result<Option<T>, ApiError>
    where
        Q: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path, Some(query))?;
        let response = self
            .authorized(Request::post(&url))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(network)?;
        read_envelope(response).await
    }

    pub async fn delete(&self, path: &str) -> Result<Option<String>, ApiError> {
        let url = self.url::<()>(path, None)?;
        let response = self
            .authorized(Request::delete(&url))
            .send()
            .await
            .map_err(network)?;
        let status = response.status();
        let body = response.text().await.map_err(network)?;
        classify_status(status, &body)?;
        if body.trim().is_empty() {
            return Ok(None);
        }
        let envelope: ApiResponse<serde_json::Value> =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;
        let message = envelope.message.clone();
        envelope.into_result().map_err(ApiError::Rejected)?;
        Ok(message)
    }
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// Checks the status and decodes the body as `T`.
pub async fn read_response<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await.map_err(network)?;
    classify_status(status, &body)?;
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<Option<T>, ApiError> {
    read_response::<ApiResponse<T>>(response)
        .await?
        .into_result()
        .map_err(ApiError::Rejected)
}

/// Unauthenticated probe; any 2xx counts as healthy.
pub async fn probe(url: &str) -> Result<(), ApiError> {
    let response = Request::get(url).send().await.map_err(network)?;
    classify_status(response.status(), "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Page {
        outlet: &'static str,
        page: u32,
    }

    #[test]
    fn url_joins_base_path_and_query() {
        let api = ApiClient::new("http://localhost:8080/api", None);
        assert_eq!(
            api.url::<()>("/users", None).unwrap(),
            "http://localhost:8080/api/users"
        );
        let query = Page { outlet: "SKY_BLUE_WOMEN", page: 2 };
        assert_eq!(
            api.url("/sales", Some(&query)).unwrap(),
            "http://localhost:8080/api/sales?outlet=SKY_BLUE_WOMEN&page=2"
        );
    }

    #[test]
    fn bearer_header_follows_session_token() {
        assert_eq!(ApiClient::new("/api", None).bearer(), None);
        assert_eq!(
            ApiClient::new("/api", Some("abc".to_string())).bearer().as_deref(),
            Some("Bearer abc")
        );
    }
}
