//! HTTP client helpers (REST) and the fixture-backed alternative.
//!
//! # Design
//! - One [`ApiClient`] enum so views never branch on which backend serves
//!   them; the variant is picked once at startup from preferences.
//! - Every HTTP verb funnels through the same send/check pair so status
//!   mapping and session handling live in one place.

use crate::services::error::ApiError;
use crate::services::fixtures::FixtureStore;
use crate::services::resource::{ApiResource, ListPage};
use draftsmith_api_models::{
    AckEnvelope, ItemEnvelope, ListEnvelope, MarketingPlanSummary, ResourceKind, UploadResponse,
};
use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::rc::Rc;
use uuid::Uuid;
use web_sys::FormData;

/// Session token header expected by the backend.
const SESSION_HEADER: &str = "x-draftsmith-session";

/// Backend access for the dashboard, live or fixture-backed.
#[derive(Clone, Debug)]
pub enum ApiClient {
    /// Talks to the generation backend over REST.
    Http(HttpClient),
    /// Serves seeded in-memory data, for development and demos.
    Fixture(Rc<FixtureStore>),
}

impl ApiClient {
    /// Fetch one page of records for a resource list.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures as [`ApiError`].
    pub async fn list<R: ApiResource>(
        &self,
        page: usize,
        filters: &R::Filters,
    ) -> Result<ListPage<R::Summary>, ApiError> {
        match self {
            Self::Http(http) => http.list::<R>(page, filters).await,
            Self::Fixture(store) => Ok(store.list::<R>(page, filters)),
        }
    }

    /// Fetch the full record behind a list row.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures as [`ApiError`].
    pub async fn get<R: ApiResource>(&self, id: Uuid) -> Result<R::Detail, ApiError> {
        match self {
            Self::Http(http) => http.get::<R>(id).await,
            Self::Fixture(store) => store.get::<R>(id),
        }
    }

    /// Delete a record by id.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures as [`ApiError`].
    pub async fn delete<R: ApiResource>(&self, id: Uuid) -> Result<(), ApiError> {
        match self {
            Self::Http(http) => http.delete::<R>(id).await,
            Self::Fixture(store) => store.delete::<R>(id),
        }
    }

    /// Submit a generation request and return the queued record.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures as [`ApiError`].
    pub async fn generate<R: ApiResource>(&self, input: &R::Input) -> Result<R::Summary, ApiError> {
        match self {
            Self::Http(http) => http.generate::<R>(input).await,
            Self::Fixture(store) => Ok(store.generate::<R>(input)),
        }
    }

    /// Clone a marketing plan server-side and return the new draft.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures as [`ApiError`].
    pub async fn duplicate_plan(&self, id: Uuid) -> Result<MarketingPlanSummary, ApiError> {
        match self {
            Self::Http(http) => http.duplicate_plan(id).await,
            Self::Fixture(store) => store.duplicate_plan(id),
        }
    }

    /// Upload a reference asset and return its backend URL.
    ///
    /// # Errors
    /// Propagates transport, status, and decode failures as [`ApiError`].
    pub async fn upload_asset(
        &self,
        file: &web_sys::File,
        folder: &str,
    ) -> Result<String, ApiError> {
        match self {
            Self::Http(http) => http.upload_asset(file, folder).await,
            Self::Fixture(store) => Ok(store.upload_asset(&file.name(), folder)),
        }
    }

    /// Origin used to resolve backend-relative asset paths.
    #[must_use]
    pub fn asset_origin(&self) -> &str {
        match self {
            Self::Http(http) => &http.base_url,
            Self::Fixture(_) => "",
        }
    }
}

/// REST client for the generation backend.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// Backend origin, no trailing slash.
    pub base_url: String,
    /// Session token attached to every request, when present.
    pub session_token: Option<String>,
}

impl HttpClient {
    /// Build a client for the given backend origin.
    pub fn new(base_url: impl Into<String>, session_token: Option<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            session_token,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn attach_session(&self, req: Request) -> Request {
        match &self.session_token {
            Some(token) => req.header(SESSION_HEADER, token),
            None => req,
        }
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        if matches!(status, 401 | 403 | 404) {
            return Err(ApiError::from_status(status));
        }
        match resp.json::<AckEnvelope>().await {
            Ok(AckEnvelope {
                message: Some(message),
                ..
            }) => Err(ApiError::Backend(message)),
            _ => Err(ApiError::from_status(status)),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let req = self.attach_session(Request::get(&self.url(path)));
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::check(resp)
            .await?
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let req = self
            .attach_session(Request::post(&self.url(path)))
            .json(body)
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        Self::check(resp)
            .await?
            .json::<T>()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))
    }

    fn list_path(kind: ResourceKind, page: usize, limit: usize, pairs: &[(&str, String)]) -> String {
        let mut path = format!("/v1/{}?page={page}&limit={limit}", kind.path());
        for (key, value) in pairs {
            path.push('&');
            path.push_str(key);
            path.push('=');
            path.push_str(&urlencoding::encode(value));
        }
        path
    }

    async fn list<R: ApiResource>(
        &self,
        page: usize,
        filters: &R::Filters,
    ) -> Result<ListPage<R::Summary>, ApiError> {
        use crate::features::lists::state::ListFilter;
        let path = Self::list_path(R::KIND, page, R::page_size(), &filters.query_pairs());
        let envelope: ListEnvelope<R::Summary> = self.get_json(&path).await?;
        if !envelope.success {
            return Err(ApiError::Backend("list request rejected".to_string()));
        }
        Ok(ListPage {
            rows: envelope.data,
            total: envelope.pagination.total,
        })
    }

    async fn get<R: ApiResource>(&self, id: Uuid) -> Result<R::Detail, ApiError> {
        let envelope: ItemEnvelope<R::Detail> = self
            .get_json(&format!("/v1/{}/{id}", R::KIND.path()))
            .await?;
        Ok(envelope.data)
    }

    async fn delete<R: ApiResource>(&self, id: Uuid) -> Result<(), ApiError> {
        let req = self.attach_session(Request::delete(
            &self.url(&format!("/v1/{}/{id}", R::KIND.path())),
        ));
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let ack: AckEnvelope = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        if ack.success {
            Ok(())
        } else {
            Err(ApiError::Backend(
                ack.message.unwrap_or_else(|| "delete rejected".to_string()),
            ))
        }
    }

    async fn generate<R: ApiResource>(&self, input: &R::Input) -> Result<R::Summary, ApiError> {
        let envelope: ItemEnvelope<R::Summary> = self
            .post_json(&format!("/v1/{}", R::KIND.path()), input)
            .await?;
        Ok(envelope.data)
    }

    async fn duplicate_plan(&self, id: Uuid) -> Result<MarketingPlanSummary, ApiError> {
        let path = format!("/v1/{}/{id}/duplicate", ResourceKind::MarketingPlans.path());
        let req = self.attach_session(Request::post(&self.url(&path)));
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let envelope: ItemEnvelope<MarketingPlanSummary> = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(envelope.data)
    }

    async fn upload_asset(&self, file: &web_sys::File, folder: &str) -> Result<String, ApiError> {
        let form = FormData::new().map_err(|_| ApiError::Network("form-data failed".to_string()))?;
        form.append_with_blob_and_filename("file", file, &file.name())
            .map_err(|_| ApiError::Network("attach file failed".to_string()))?;
        let _ = form.append_with_str("folder", folder);
        let req = self
            .attach_session(Request::post(&self.url("/v1/assets")))
            .body(form);
        let resp = req
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let upload: UploadResponse = Self::check(resp)
            .await?
            .json()
            .await
            .map_err(|err| ApiError::Decode(err.to_string()))?;
        Ok(upload.url)
    }
}
