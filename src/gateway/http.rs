use log::debug;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;

use crate::common::Direction;
use crate::config::ClientConfig;
use crate::domain::{CreateMazeRequest, CreateMazeResponse, MazeResponse, MoveOutcome, MoveRequest, MoveResponse};
use crate::maze::MazeState;

use super::{GatewayError, MazeGateway};

/// Maze service reached over HTTP with JSON bodies.
pub struct HttpGateway {
    client: Client,
    base_url: Url,
}

impl HttpGateway {
    pub fn new(config: &ClientConfig) -> Result<Self, GatewayError> {
        let mut base = config.api_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base)
            .map_err(|e| GatewayError::Request(format!("invalid service URL '{}': {}", base, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(GatewayError::Request(format!(
                "invalid service URL '{}': not a base URL",
                base
            )));
        }
        let mut builder = Client::builder().timeout(config.request_timeout);
        if !config.use_proxy {
            builder = builder.no_proxy();
        }
        let client = builder
            .build()
            .map_err(|e| GatewayError::Request(e.to_string()))?;
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn url(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::Request(format!("invalid path '{}': {}", path, e)))
    }

    /// Send a request and return the body of a success response.
    async fn send(&self, request: RequestBuilder) -> Result<String, GatewayError> {
        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(format!("reading response body: {}", e)))?;
        if status.is_success() {
            return Ok(body);
        }
        debug!("maze service answered {} with {:?}", status, body);
        let payload = match serde_json::from_str::<serde_json::Value>(&body) {
            Ok(value) => value,
            Err(_) => serde_json::Value::String(body),
        };
        Err(GatewayError::Remote {
            status: status.as_u16(),
            payload,
        })
    }

    async fn send_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, GatewayError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| GatewayError::Malformed(e.to_string()))
    }
}

fn classify(err: reqwest::Error) -> GatewayError {
    if err.is_builder() {
        GatewayError::Request(err.to_string())
    } else {
        GatewayError::Transport(err.to_string())
    }
}

#[async_trait::async_trait]
impl MazeGateway for HttpGateway {
    async fn create_maze(
        &mut self,
        player_name: &str,
        width: u32,
        height: u32,
    ) -> Result<String, GatewayError> {
        let url = self.url("maze")?;
        debug!("POST {} ({}x{} for {})", url, width, height, player_name);
        let body = CreateMazeRequest {
            player_name: player_name.to_string(),
            width,
            height,
        };
        let res: CreateMazeResponse = self.send_json(self.client.post(url).json(&body)).await?;
        Ok(res.maze_id)
    }

    async fn fetch_state(&mut self, maze_id: &str) -> Result<MazeState, GatewayError> {
        let url = self.url(&format!("maze/{}", maze_id))?;
        debug!("GET {}", url);
        let res: MazeResponse = self.send_json(self.client.get(url)).await?;
        MazeState::try_from(res).map_err(|e| GatewayError::Malformed(e.to_string()))
    }

    async fn submit_move(
        &mut self,
        maze_id: &str,
        direction: Direction,
    ) -> Result<MoveOutcome, GatewayError> {
        let url = self.url(&format!("maze/{}", maze_id))?;
        debug!("POST {} ({})", url, direction);
        let res: MoveResponse = self
            .send_json(self.client.post(url).json(&MoveRequest { direction }))
            .await?;
        Ok(MoveOutcome::from(res))
    }

    async fn fetch_print(&mut self, maze_id: &str) -> Result<String, GatewayError> {
        let url = self.url(&format!("maze/{}/print", maze_id))?;
        debug!("GET {}", url);
        self.send(self.client.get(url)).await
    }
}
