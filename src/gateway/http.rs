//! reqwest-backed [`Gateway`].

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::timeout;

use super::{Endpoint, Gateway};
use crate::config::ServerConfig;
use crate::error::GatewayError;
use crate::logutil::escape_log;
use crate::model::{
    AchievementList, ContainerPayload, ItemActionRequest, ItemActionResponse, MessageResponse,
    Navigation, SpellList,
};

/// Gateway talking to the game server over HTTP.
///
/// The underlying client keeps a cookie jar, so a session started by one request
/// carries over to the next. Redirects are followed; navigation endpoints report
/// the final URL.
pub struct HttpGateway {
    base_url: String,
    client: reqwest::Client,
    timeout: Option<Duration>,
}

impl HttpGateway {
    pub fn new(config: &ServerConfig) -> Result<Self, GatewayError> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = &config.session_cookie {
            let value = HeaderValue::from_str(cookie).map_err(|e| GatewayError::Transport {
                endpoint: "config".into(),
                reason: format!("invalid session cookie: {}", e),
            })?;
            headers.insert(COOKIE, value);
        }

        let client = reqwest::Client::builder()
            .cookie_store(true)
            .default_headers(headers)
            .build()
            .map_err(|e| GatewayError::Transport {
                endpoint: "config".into(),
                reason: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout: config.timeout(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint, with an optional percent-encoded trailing segment.
    pub fn build_url(&self, endpoint: Endpoint, segment: Option<&str>) -> String {
        match segment {
            Some(segment) => format!(
                "{}{}/{}",
                self.base_url,
                endpoint.path(),
                urlencoding::encode(segment)
            ),
            None => format!("{}{}", self.base_url, endpoint.path()),
        }
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<Response, GatewayError> {
        let name = endpoint.path();
        debug!("Requesting {}", name);

        let pending = request.send();
        let result = match self.timeout {
            Some(limit) => timeout(limit, pending)
                .await
                .map_err(|_| GatewayError::Transport {
                    endpoint: name.to_string(),
                    reason: format!("request timeout after {}s", limit.as_secs()),
                })?,
            None => pending.await,
        };

        let response = result.map_err(|e| GatewayError::Transport {
            endpoint: name.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", name, status);
            return Err(GatewayError::Status {
                endpoint: name.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<T, GatewayError> {
        let response = self.send(endpoint, request).await?;
        let body = response.bytes().await.map_err(|e| GatewayError::Transport {
            endpoint: endpoint.path().to_string(),
            reason: e.to_string(),
        })?;
        serde_json::from_slice(&body).map_err(|e| GatewayError::Decode {
            endpoint: endpoint.path().to_string(),
            reason: e.to_string(),
        })
    }

    async fn navigation(
        &self,
        endpoint: Endpoint,
        request: RequestBuilder,
    ) -> Result<Navigation, GatewayError> {
        let response = self.send(endpoint, request).await?;
        let location = response.url().to_string();
        debug!("{} navigated to {}", endpoint.path(), location);
        Ok(Navigation { location })
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_spells(&self) -> Result<SpellList, GatewayError> {
        let url = self.build_url(Endpoint::Spells, None);
        self.json(Endpoint::Spells, self.client.get(url)).await
    }

    async fn fetch_container(&self, container_id: &str) -> Result<ContainerPayload, GatewayError> {
        let url = self.build_url(Endpoint::Container, Some(container_id));
        self.json(Endpoint::Container, self.client.get(url)).await
    }

    async fn fetch_achievements(&self) -> Result<AchievementList, GatewayError> {
        let url = self.build_url(Endpoint::Achievements, None);
        self.json(Endpoint::Achievements, self.client.get(url)).await
    }

    async fn post_item_action(
        &self,
        request: &ItemActionRequest,
    ) -> Result<ItemActionResponse, GatewayError> {
        let url = self.build_url(Endpoint::ItemAction, None);
        let response: ItemActionResponse = self
            .json(
                Endpoint::ItemAction,
                self.client.post(url).form(&request.form_fields()),
            )
            .await?;
        if let Some(message) = &response.event_message {
            debug!("Item action event: {}", escape_log(message));
        }
        Ok(response)
    }

    async fn post_undo_item_action(&self) -> Result<ItemActionResponse, GatewayError> {
        let url = self.build_url(Endpoint::UndoItemAction, None);
        self.json(Endpoint::UndoItemAction, self.client.post(url))
            .await
    }

    async fn submit_skills(&self, skills: &[String]) -> Result<Navigation, GatewayError> {
        let url = self.build_url(Endpoint::SelectSkills, None);
        let fields: Vec<(&str, &str)> = skills.iter().map(|s| ("skills", s.as_str())).collect();
        self.navigation(Endpoint::SelectSkills, self.client.post(url).form(&fields))
            .await
    }

    async fn submit_battle_choice(&self, choice: usize) -> Result<Navigation, GatewayError> {
        let url = self.build_url(Endpoint::BattleChoice, None);
        let choice = choice.to_string();
        self.navigation(
            Endpoint::BattleChoice,
            self.client.post(url).form(&[("choice", choice.as_str())]),
        )
        .await
    }

    async fn submit_talk_choice(&self, choice: usize) -> Result<Navigation, GatewayError> {
        let url = self.build_url(Endpoint::TalkChoice, None);
        let choice = choice.to_string();
        self.navigation(
            Endpoint::TalkChoice,
            self.client.post(url).form(&[("choice", choice.as_str())]),
        )
        .await
    }

    async fn navigate(&self, scene_id: &str) -> Result<Navigation, GatewayError> {
        let url = self.build_url(Endpoint::Navigate, Some(scene_id));
        self.navigation(Endpoint::Navigate, self.client.get(url))
            .await
    }

    async fn undo(&self) -> Result<Navigation, GatewayError> {
        let url = self.build_url(Endpoint::Undo, None);
        self.navigation(Endpoint::Undo, self.client.get(url)).await
    }

    async fn gain_all_spells(&self) -> Result<MessageResponse, GatewayError> {
        let url = self.build_url(Endpoint::GainAllSpells, None);
        self.json(Endpoint::GainAllSpells, self.client.post(url))
            .await
    }

    async fn restore_stats(&self) -> Result<MessageResponse, GatewayError> {
        let url = self.build_url(Endpoint::RestoreStats, None);
        self.json(Endpoint::RestoreStats, self.client.post(url))
            .await
    }

    async fn reload_scenes(&self) -> Result<String, GatewayError> {
        let url = self.build_url(Endpoint::ReloadScenes, None);
        let response = self
            .send(Endpoint::ReloadScenes, self.client.get(url))
            .await?;
        response.text().await.map_err(|e| GatewayError::Decode {
            endpoint: Endpoint::ReloadScenes.path().to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway(base_url: &str) -> HttpGateway {
        HttpGateway::new(&ServerConfig {
            base_url: base_url.to_string(),
            session_cookie: Some("session=abc".into()),
            timeout_seconds: None,
        })
        .expect("client")
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let gw = gateway("http://localhost:5000/");
        assert_eq!(gw.base_url(), "http://localhost:5000");
        assert_eq!(
            gw.build_url(Endpoint::Spells, None),
            "http://localhost:5000/get_spells"
        );
    }

    #[test]
    fn container_ids_are_percent_encoded() {
        let gw = gateway("http://localhost:5000");
        assert_eq!(
            gw.build_url(Endpoint::Container, Some("trunk")),
            "http://localhost:5000/scene_container/trunk"
        );
        assert_eq!(
            gw.build_url(Endpoint::Navigate, Some("great hall")),
            "http://localhost:5000/navigate/great%20hall"
        );
    }

    #[test]
    fn invalid_cookie_is_rejected() {
        let result = HttpGateway::new(&ServerConfig {
            base_url: "http://localhost:5000".into(),
            session_cookie: Some("bad\ncookie".into()),
            timeout_seconds: Some(5),
        });
        assert!(matches!(result, Err(GatewayError::Transport { .. })));
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        // Port 9 (discard) is closed on test machines.
        let gw = HttpGateway::new(&ServerConfig {
            base_url: "http://127.0.0.1:9".into(),
            session_cookie: None,
            timeout_seconds: Some(2),
        })
        .expect("client");
        let err = gw.fetch_spells().await.expect_err("no server");
        assert!(matches!(err, GatewayError::Transport { .. }));
        assert!(!err.is_rejection());
    }
}
