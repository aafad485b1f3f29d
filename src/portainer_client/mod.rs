//! Client for the Portainer container-management REST API.
//!
//! A [`PortainerClient`] is constructed from a [`PortainerConfig`], exchanges
//! the configured credentials for a bearer token with [`authenticate`], and
//! then exposes one typed operation per API call: endpoint listing, container
//! listing, and container start/stop.
//!
//! [`authenticate`]: PortainerClient::authenticate

use reqwest::{Client, Method, Response, StatusCode};
use url::Url;

mod config;
mod errors;
mod types;

pub use config::PortainerConfig;
pub use errors::PortainerError;
pub use types::{
    Container, ContainerPort, Endpoint, HostConfig, Mount, NetworkConfig, NetworkSettings,
};

use types::{AuthRequest, AuthResponse};

/// Typed client for one Portainer instance
#[derive(Debug)]
pub struct PortainerClient {
    config: PortainerConfig,
    http_client: Client,
    api_url: Url,
    token: Option<String>,
}

impl PortainerClient {
    /// Create a client for the instance described by `config`.
    ///
    /// The API base URL is derived once here; the client holds no token until
    /// [`authenticate`](Self::authenticate) succeeds.
    pub fn new(config: PortainerConfig) -> Result<Self, PortainerError> {
        let api_url = Url::parse(&format!(
            "{}://{}:{}{}",
            config.schema, config.host, config.port, config.base_path
        ))?;

        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            config,
            http_client,
            api_url,
            token: None,
        })
    }

    /// The derived API base URL
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// The bearer token obtained by the last successful authentication
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Exchange the configured credentials for a bearer token.
    ///
    /// Any response other than 200 is treated as an authentication rejection
    /// and leaves the stored token untouched.
    pub async fn authenticate(&mut self) -> Result<(), PortainerError> {
        let url = self.endpoint_url("/auth", &[]);
        let credentials = AuthRequest {
            username: self.config.username.clone(),
            password: self.config.password.clone(),
        };

        log::debug!("POST {}", url);
        let response = self
            .http_client
            .post(url)
            .json(&credentials)
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            log::warn!("Authentication rejected with status {}", response.status());
            return Err(PortainerError::Unauthorized);
        }

        let body = response.text().await?;
        let auth: AuthResponse = serde_json::from_str(&body)?;
        self.token = Some(auth.jwt);

        log::info!("Authenticated against {}", self.api_url);
        Ok(())
    }

    /// List the endpoints (Docker hosts/clusters) known to the instance.
    pub async fn list_endpoints(&self) -> Result<Vec<Endpoint>, PortainerError> {
        let url = self.endpoint_url("/endpoints", &[]);
        let response = self.make_request(Method::GET, url).await?;

        let body = response.text().await?;
        let endpoints: Vec<Endpoint> = serde_json::from_str(&body)?;
        Ok(endpoints)
    }

    /// List all containers on an endpoint, including stopped ones.
    pub async fn list_containers(&self, endpoint_id: i32) -> Result<Vec<Container>, PortainerError> {
        let url = self.endpoint_url(
            &format!("/endpoints/{}/docker/containers/json", endpoint_id),
            &[("all", "1")],
        );
        let response = self.make_request(Method::GET, url).await?;

        let body = response.text().await?;
        let containers: Vec<Container> = serde_json::from_str(&body)?;
        Ok(containers)
    }

    /// Stop a container on an endpoint.
    pub async fn stop_container(
        &self,
        endpoint_id: i32,
        container_id: &str,
    ) -> Result<(), PortainerError> {
        let url = self.endpoint_url(
            &format!(
                "/endpoints/{}/docker/containers/{}/stop",
                endpoint_id, container_id
            ),
            &[],
        );
        let response = self.make_request(Method::POST, url).await?;
        Self::container_action_result(response)
    }

    /// Start a container on an endpoint.
    ///
    /// Starting a container that is already running fails with
    /// [`PortainerError::AlreadyStarted`].
    pub async fn start_container(
        &self,
        endpoint_id: i32,
        container_id: &str,
    ) -> Result<(), PortainerError> {
        let url = self.endpoint_url(
            &format!(
                "/endpoints/{}/docker/containers/{}/start",
                endpoint_id, container_id
            ),
            &[],
        );
        let response = self.make_request(Method::POST, url).await?;

        if response.status() == StatusCode::NOT_MODIFIED {
            return Err(PortainerError::AlreadyStarted {
                url: response.url().to_string(),
            });
        }
        Self::container_action_result(response)
    }

    /// Map the status of a start/stop response to an outcome.
    fn container_action_result(response: Response) -> Result<(), PortainerError> {
        let url = response.url().to_string();
        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            StatusCode::INTERNAL_SERVER_ERROR => {
                Err(PortainerError::InternalServerError { url })
            }
            StatusCode::NOT_FOUND => Err(PortainerError::NotFound { url }),
            other => {
                log::warn!("Unhandled API status {} for {}", other, url);
                Err(PortainerError::UnhandledStatus {
                    status: other.as_u16(),
                    url,
                })
            }
        }
    }

    /// Build a request URL below the API base path, with percent-encoded
    /// query pairs.
    fn endpoint_url(&self, path: &str, query: &[(&str, &str)]) -> Url {
        let mut url = self.api_url.clone();
        url.set_path(&format!(
            "{}{}",
            self.api_url.path().trim_end_matches('/'),
            path
        ));
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }

    /// Issue a bodyless request, attaching the bearer token once one is held.
    async fn make_request(&self, method: Method, url: Url) -> Result<Response, PortainerError> {
        log::debug!("{} {}", method, url);
        let mut request = self.http_client.request(method, url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }
}
