use async_trait::async_trait;
use reqwest::Client;
use shared::{
    domain::{Benefit, BenefitId},
    error::RequestError,
    protocol::{BenefitDraft, ErrorBody, TransferRequest},
};
use tracing::{debug, error};

/// Default resource path on the server, relative to the server URL.
pub const DEFAULT_BASE_PATH: &str = "/api/v1/beneficios";

/// Gateway to the benefits REST resource.
///
/// No retries anywhere; every transport or server failure is normalized into
/// a single [`RequestError`] whose only payload is the optional
/// server-supplied message.
#[async_trait]
pub trait BenefitRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Benefit>, RequestError>;
    async fn create(&self, draft: &BenefitDraft) -> Result<Benefit, RequestError>;
    async fn update(&self, id: BenefitId, draft: &BenefitDraft) -> Result<Benefit, RequestError>;
    async fn delete(&self, id: BenefitId) -> Result<(), RequestError>;
    async fn transfer(&self, request: &TransferRequest) -> Result<(), RequestError>;
}

pub struct HttpBenefitRepository {
    http: Client,
    base_url: String,
}

impl HttpBenefitRepository {
    /// `server_url` is the scheme+authority part, e.g. `http://localhost:8080`;
    /// the resource lives under [`DEFAULT_BASE_PATH`].
    pub fn new(server_url: impl Into<String>) -> Self {
        Self::with_base_path(server_url, DEFAULT_BASE_PATH)
    }

    pub fn with_base_path(server_url: impl Into<String>, base_path: &str) -> Self {
        let server_url = server_url.into();
        Self {
            http: Client::new(),
            base_url: format!("{}{}", server_url.trim_end_matches('/'), base_path),
        }
    }

    async fn expect_ok(response: reqwest::Response) -> Result<reqwest::Response, RequestError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        // Failed responses may carry `{"message": ...}`; surface it verbatim.
        let detail = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message);
        error!(%status, ?detail, "benefits API returned an error response");
        Err(RequestError { detail })
    }
}

fn transport(err: reqwest::Error) -> RequestError {
    error!(error = %err, "benefits API request failed in transport");
    RequestError::opaque()
}

#[async_trait]
impl BenefitRepository for HttpBenefitRepository {
    async fn list(&self) -> Result<Vec<Benefit>, RequestError> {
        debug!(url = %self.base_url, "listing benefits");
        let response = self
            .http
            .get(&self.base_url)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_ok(response)
            .await?
            .json()
            .await
            .map_err(transport)
    }

    async fn create(&self, draft: &BenefitDraft) -> Result<Benefit, RequestError> {
        debug!(name = %draft.name, "creating benefit");
        let response = self
            .http
            .post(&self.base_url)
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_ok(response)
            .await?
            .json()
            .await
            .map_err(transport)
    }

    async fn update(&self, id: BenefitId, draft: &BenefitDraft) -> Result<Benefit, RequestError> {
        debug!(id = id.0, "updating benefit");
        let response = self
            .http
            .put(format!("{}/{}", self.base_url, id.0))
            .json(draft)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_ok(response)
            .await?
            .json()
            .await
            .map_err(transport)
    }

    async fn delete(&self, id: BenefitId) -> Result<(), RequestError> {
        debug!(id = id.0, "deleting benefit");
        let response = self
            .http
            .delete(format!("{}/{}", self.base_url, id.0))
            .send()
            .await
            .map_err(transport)?;
        Self::expect_ok(response).await?;
        Ok(())
    }

    async fn transfer(&self, request: &TransferRequest) -> Result<(), RequestError> {
        debug!(
            source = request.source_id.0,
            destination = request.destination_id.0,
            "requesting transfer"
        );
        let response = self
            .http
            .post(format!("{}/transferir", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(transport)?;
        Self::expect_ok(response).await?;
        Ok(())
    }
}
