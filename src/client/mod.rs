//! Client layer: orchestrates transport calls and maps transport ↔ domain.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    DeleteDevice, DeleteSms, DeviceInfo, EditDevice, GetDeviceInfo, GetSms, ListSms,
    ListSmsResponse, SendSms, SendSmsResponse, SmsRecord, Token, ValidationError,
};
use crate::transport;

const DEFAULT_BASE_URL: &str = "https://api.gosms.ru/v1";

const SMS_SEND_PATH: &str = "/sms/send";
const SMS_GET_PATH: &str = "/sms/get";
const SMS_DELETE_PATH: &str = "/sms/del";
const SMS_LIST_PATH: &str = "/sms";
const DEVICE_INFO_PATH: &str = "/devices/get/info";
const DEVICE_EDIT_PATH: &str = "/devices/edit";
const DEVICE_DELETE_PATH: &str = "/devices/del";

const STATUS_OK: u16 = 200;
const STATUS_NO_CONTENT: u16 = 204;

type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HttpMethod {
    Get,
    Post,
    Delete,
}

impl HttpMethod {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Delete => "DELETE",
        }
    }
}

#[derive(Debug, Clone)]
struct HttpRequest {
    method: HttpMethod,
    url: Url,
    authorization: String,
    /// Sent with `Content-Type: application/json` when present.
    json_body: Option<Vec<u8>>,
}

#[derive(Debug, Clone)]
struct HttpResponse {
    status: u16,
    body: String,
}

trait HttpTransport: Send + Sync {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>>;
}

#[derive(Debug, Clone)]
struct ReqwestTransport {
    client: reqwest::Client,
}

impl HttpTransport for ReqwestTransport {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let builder = match request.method {
                HttpMethod::Get => self.client.get(request.url),
                HttpMethod::Post => self.client.post(request.url),
                HttpMethod::Delete => self.client.delete(request.url),
            };
            let mut builder = builder.header(reqwest::header::AUTHORIZATION, request.authorization);
            if let Some(body) = request.json_body {
                builder = builder
                    .header(reqwest::header::CONTENT_TYPE, "application/json")
                    .body(body);
            }

            let response = builder.send().await?;
            let status = response.status().as_u16();
            let body = response.text().await?;
            Ok(HttpResponse { status, body })
        })
    }
}

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`GoSmsClient`].
///
/// Every failure of a call surfaces here; nothing is retried or swallowed.
pub enum GoSmsError {
    /// The request could not be encoded as JSON.
    #[error("request encoding error: {0}")]
    Encode(#[source] serde_json::Error),

    /// HTTP client / transport failure (DNS, TLS, timeouts, etc).
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn StdError + Send + Sync>),

    /// The server answered with a status other than the one the operation expects.
    ///
    /// `body` is the raw response body (unparsed), `None` when blank.
    #[error("unexpected HTTP status: {status} (expected {expected})")]
    UnexpectedStatus {
        expected: u16,
        status: u16,
        body: Option<String>,
    },

    /// Response body could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(#[source] Box<dyn StdError + Send + Sync>),

    /// A client-side precondition failed before any request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// The configured base URL does not form a valid endpoint URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[source] url::ParseError),
}

impl GoSmsError {
    /// HTTP status observed for [`GoSmsError::UnexpectedStatus`].
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
/// Builder for [`GoSmsClient`].
///
/// Use this when you need to customize the base URL, timeout, or user-agent, or to
/// share an existing `reqwest::Client`.
pub struct GoSmsClientBuilder {
    token: Token,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<reqwest::Client>,
}

impl GoSmsClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(token: impl Into<Token>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            http_client: None,
        }
    }

    /// Override the API base URL (`https://api.gosms.ru/v1`), e.g. to target a stub server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Use a preconfigured `reqwest::Client`.
    ///
    /// When set, [`timeout`](Self::timeout) and [`user_agent`](Self::user_agent) are ignored;
    /// configure them on the supplied client instead.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Build a [`GoSmsClient`].
    pub fn build(self) -> Result<GoSmsClient, GoSmsError> {
        let base_url = self.base_url.trim_end_matches('/').to_owned();
        Url::parse(&base_url).map_err(GoSmsError::InvalidUrl)?;

        let client = match self.http_client {
            Some(client) => {
                if self.timeout.is_some() || self.user_agent.is_some() {
                    tracing::debug!(
                        timeout = ?self.timeout,
                        user_agent = ?self.user_agent,
                        "ignoring timeout/user-agent overrides for preconfigured reqwest client"
                    );
                }
                client
            }
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                builder
                    .build()
                    .map_err(|err| GoSmsError::Transport(Box::new(err)))?
            }
        };

        Ok(GoSmsClient {
            token: self.token,
            base_url,
            http: Arc::new(ReqwestTransport { client }),
        })
    }
}

#[derive(Clone)]
/// High-level GoSMS client.
///
/// Each method performs exactly one HTTPS call against `https://api.gosms.ru/v1`
/// (or the base URL set on the builder), authenticated with `Authorization: Bearer`.
/// Clones share the underlying connection pool and can be used concurrently.
pub struct GoSmsClient {
    token: Token,
    base_url: String,
    http: Arc<dyn HttpTransport>,
}

impl GoSmsClient {
    /// Create a client using the default base URL.
    ///
    /// No network activity happens here. For more customization, use
    /// [`GoSmsClient::builder`].
    pub fn new(token: impl Into<Token>) -> Self {
        Self {
            token: token.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            http: Arc::new(ReqwestTransport {
                client: reqwest::Client::new(),
            }),
        }
    }

    /// Start building a client with custom settings.
    pub fn builder(token: impl Into<Token>) -> GoSmsClientBuilder {
        GoSmsClientBuilder::new(token)
    }

    /// Send an SMS message (`POST /sms/send`, expects `200`).
    pub async fn send_sms(&self, request: SendSms) -> Result<SendSmsResponse, GoSmsError> {
        let body = transport::encode_send_sms_json(&request).map_err(GoSmsError::Encode)?;
        let url = self.endpoint(SMS_SEND_PATH)?;
        let response = self
            .call("send_sms", HttpMethod::Post, url, Some(body), STATUS_OK)
            .await?;

        transport::decode_send_sms_json_response(&response.body)
            .map_err(|err| GoSmsError::Decode(Box::new(err)))
    }

    /// Fetch a single message by id (`POST /sms/get`, expects `200`).
    pub async fn get_sms(&self, request: GetSms) -> Result<SmsRecord, GoSmsError> {
        let body = transport::encode_get_sms_json(&request).map_err(GoSmsError::Encode)?;
        let url = self.endpoint(SMS_GET_PATH)?;
        let response = self
            .call("get_sms", HttpMethod::Post, url, Some(body), STATUS_OK)
            .await?;

        transport::decode_sms_record_json_response(&response.body)
            .map_err(|err| GoSmsError::Decode(Box::new(err)))
    }

    /// Delete a message by id (`DELETE /sms/del`, expects `204`).
    pub async fn delete_sms(&self, request: DeleteSms) -> Result<(), GoSmsError> {
        let body = transport::encode_delete_sms_json(&request).map_err(GoSmsError::Encode)?;
        let url = self.endpoint(SMS_DELETE_PATH)?;
        self.call(
            "delete_sms",
            HttpMethod::Delete,
            url,
            Some(body),
            STATUS_NO_CONTENT,
        )
        .await?;
        Ok(())
    }

    /// List messages page by page (`GET /sms`, expects `200`).
    ///
    /// Errors:
    /// - Returns [`GoSmsError::Validation`] without sending anything when `limit` is
    ///   outside `1..=100`.
    pub async fn list_sms(&self, request: ListSms) -> Result<ListSmsResponse, GoSmsError> {
        request.validate()?;

        let mut url = self.endpoint(SMS_LIST_PATH)?;
        transport::append_list_sms_query(&mut url, &request);
        let response = self
            .call("list_sms", HttpMethod::Get, url, None, STATUS_OK)
            .await?;

        transport::decode_list_sms_json_response(&response.body)
            .map_err(|err| GoSmsError::Decode(Box::new(err)))
    }

    /// Fetch device state (`POST /devices/get/info`, expects `200`).
    pub async fn get_device_info(&self, request: GetDeviceInfo) -> Result<DeviceInfo, GoSmsError> {
        let body = transport::encode_get_device_info_json(&request).map_err(GoSmsError::Encode)?;
        let url = self.endpoint(DEVICE_INFO_PATH)?;
        let response = self
            .call("get_device_info", HttpMethod::Post, url, Some(body), STATUS_OK)
            .await?;

        transport::decode_device_info_json_response(&response.body)
            .map_err(|err| GoSmsError::Decode(Box::new(err)))
    }

    /// Update device settings (`POST /devices/edit`, expects `204`).
    pub async fn edit_device(&self, request: EditDevice) -> Result<(), GoSmsError> {
        let body = transport::encode_edit_device_json(&request).map_err(GoSmsError::Encode)?;
        let url = self.endpoint(DEVICE_EDIT_PATH)?;
        self.call(
            "edit_device",
            HttpMethod::Post,
            url,
            Some(body),
            STATUS_NO_CONTENT,
        )
        .await?;
        Ok(())
    }

    /// Remove a device from the account (`POST /devices/del`, expects `204`).
    pub async fn delete_device(&self, request: DeleteDevice) -> Result<(), GoSmsError> {
        let body = transport::encode_delete_device_json(&request).map_err(GoSmsError::Encode)?;
        let url = self.endpoint(DEVICE_DELETE_PATH)?;
        self.call(
            "delete_device",
            HttpMethod::Post,
            url,
            Some(body),
            STATUS_NO_CONTENT,
        )
        .await?;
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, GoSmsError> {
        Url::parse(&format!("{}{}", self.base_url, path)).map_err(GoSmsError::InvalidUrl)
    }

    async fn call(
        &self,
        operation: &'static str,
        method: HttpMethod,
        url: Url,
        json_body: Option<Vec<u8>>,
        expected_status: u16,
    ) -> Result<HttpResponse, GoSmsError> {
        tracing::debug!(
            operation,
            method = method.as_str(),
            path = url.path(),
            "sending GoSMS request"
        );

        let response = self
            .http
            .execute(HttpRequest {
                method,
                url,
                authorization: self.token.bearer(),
                json_body,
            })
            .await
            .map_err(GoSmsError::Transport)?;

        tracing::debug!(operation, status = response.status, "received GoSMS response");

        if response.status != expected_status {
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(GoSmsError::UnexpectedStatus {
                expected: expected_status,
                status: response.status,
                body,
            });
        }

        Ok(response)
    }
}
