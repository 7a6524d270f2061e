//! HTTP implementation of the persistence boundary.

use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use repairstock_catalog::CatalogProduct;
use repairstock_parties::{Supplier, Technician};

use crate::error::{ClientError, SubmitError};
use crate::session::Session;
use crate::submit::{PurchaseSubmission, SaleSubmission, SubmitAdapter};

/// REST backend client.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch the nested product catalog (products → brand + grade variants).
    pub async fn fetch_catalog(&self, session: &Session) -> Result<Vec<CatalogProduct>, ClientError> {
        self.get_json("/products", session).await
    }

    /// Fetch the supplier list for the purchase dialog.
    pub async fn fetch_suppliers(&self, session: &Session) -> Result<Vec<Supplier>, ClientError> {
        self.get_json("/suppliers", session).await
    }

    /// Fetch the technician list for the sale dialog.
    pub async fn fetch_technicians(
        &self,
        session: &Session,
    ) -> Result<Vec<Technician>, ClientError> {
        self.get_json("/technicians", session).await
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        session: &Session,
    ) -> Result<T, ClientError> {
        tracing::debug!(path, "fetching");
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(session.token())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(path, status = status.as_u16(), "fetch failed");
            return Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_message(&body).unwrap_or_else(|| status.to_string()),
            });
        }
        Ok(response.json().await?)
    }

    async fn post_submission<T: Serialize>(
        &self,
        path: &str,
        body: &T,
        session: &Session,
        what: &str,
    ) -> Result<(), SubmitError> {
        tracing::debug!(path, "submitting {what}");
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(session.token())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            tracing::info!(path, "{what} submitted");
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message =
            extract_message(&body).unwrap_or_else(|| format!("failed to save the {what}"));
        tracing::warn!(path, status = status.as_u16(), message, "{what} rejected");
        Err(SubmitError::Rejected(message))
    }
}

impl SubmitAdapter for HttpBackend {
    async fn submit_purchase(
        &self,
        submission: &PurchaseSubmission,
        session: &Session,
    ) -> Result<(), SubmitError> {
        self.post_submission("/purchases", submission, session, "purchase")
            .await
    }

    async fn submit_sale(
        &self,
        submission: &SaleSubmission,
        session: &Session,
    ) -> Result<(), SubmitError> {
        self.post_submission("/sales", submission, session, "sale")
            .await
    }
}

/// Pull the backend's `message` field out of an error body, if any.
///
/// The backend reports validation failures as `{"message": "..."}`; that
/// text is shown to the operator verbatim.
fn extract_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::to_string)
}
