use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use crate::core::domain::{Configuration, RecordId};
use crate::core::library::{LibraryError, LibraryResult};
use crate::remote::domain::RemoteSyncClient;
use crate::remote::dto::{CreateItemRequest, CreateItemResponse, ListLibraryResponse, RemoteItem};

// HttpSyncClient talks to the `/library` resource under the configured api base.
#[derive(Debug, Clone)]
pub struct HttpSyncClient {
    client: Client,
    api_base: Url,
}

impl HttpSyncClient {
    pub fn new(config: &Configuration) -> LibraryResult<Self> {
        Self::with_client(config, Client::new())
    }

    pub fn with_client(config: &Configuration, client: Client) -> LibraryResult<Self> {
        let api_base = Url::parse(config.api_base.as_str()).map_err(|err| {
            LibraryError::validation(
                format!("invalid api base {} {:?}", config.api_base, err).as_str(), Some("api_base".to_string()))
        })?;
        if api_base.cannot_be_a_base() {
            return Err(LibraryError::validation(
                format!("api base {} cannot hold paths", config.api_base).as_str(), Some("api_base".to_string())));
        }
        Ok(Self { client, api_base })
    }

    fn endpoint(&self, segments: &[&str]) -> LibraryResult<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| LibraryError::validation(
                format!("api base {} cannot hold paths", self.api_base).as_str(), None))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

// a non-success status is a rejection, whatever the body says
async fn check_status(res: Response) -> LibraryResult<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().await.unwrap_or_default();
    Err(LibraryError::remote_rejected(
        format!("remote library returned {} {}", status, body.trim()).as_str(), status.as_u16()))
}

async fn parse_body<T: DeserializeOwned>(res: Response) -> LibraryResult<T> {
    let bytes = res.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[async_trait]
impl RemoteSyncClient for HttpSyncClient {
    async fn list_library(&self, user_id: &RecordId) -> LibraryResult<Vec<RemoteItem>> {
        let url = self.endpoint(&["library", user_id.to_string().as_str()])?;
        debug!("GET {}", url);
        let res = check_status(self.client.get(url).send().await?).await?;
        let body: ListLibraryResponse = parse_body(res).await?;
        Ok(body.library)
    }

    async fn create_item(&self, payload: &CreateItemRequest) -> LibraryResult<RemoteItem> {
        let url = self.endpoint(&["library"])?;
        debug!("POST {} {}", url, payload.catalog_id);
        let res = check_status(self.client.post(url).json(payload).send().await?).await?;
        let body: CreateItemResponse = parse_body(res).await?;
        Ok(body.item)
    }

    async fn delete_item(&self, remote_id: &RecordId) -> LibraryResult<()> {
        let url = self.endpoint(&["library", remote_id.to_string().as_str()])?;
        debug!("DELETE {}", url);
        let _ = check_status(self.client.delete(url).send().await?).await?;
        Ok(())
    }
}

impl From<reqwest::Error> for LibraryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            LibraryError::serialization(format!("remote body {:?}", err).as_str())
        } else {
            LibraryError::network(format!("{:?}", err).as_str(), err.is_timeout() || err.is_connect())
        }
    }
}
