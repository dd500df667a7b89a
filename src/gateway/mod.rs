//! HTTP gateway to the game server.
//!
//! [`Gateway`] is the seam between the view layer and the network: one method per
//! endpoint, one request per call, no retries. [`HttpGateway`] talks to a real
//! server; tests drive the view layer through an in-memory implementation.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::model::{
    AchievementList, ContainerPayload, ItemActionRequest, ItemActionResponse, MessageResponse,
    Navigation, SpellList,
};

pub mod http;

pub use http::HttpGateway;

/// Fixed set of server endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Spells,
    Container,
    Achievements,
    ItemAction,
    UndoItemAction,
    SelectSkills,
    BattleChoice,
    TalkChoice,
    Navigate,
    Undo,
    GainAllSpells,
    RestoreStats,
    ReloadScenes,
}

impl Endpoint {
    /// Path without dynamic segments.
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Spells => "/get_spells",
            Endpoint::Container => "/scene_container",
            Endpoint::Achievements => "/get_achievements",
            Endpoint::ItemAction => "/item_action",
            Endpoint::UndoItemAction => "/undo_item_action",
            Endpoint::SelectSkills => "/select_skills",
            Endpoint::BattleChoice => "/battle_choose",
            Endpoint::TalkChoice => "/talk_choose",
            Endpoint::Navigate => "/navigate",
            Endpoint::Undo => "/undo",
            Endpoint::GainAllSpells => "/gain_all_spells",
            Endpoint::RestoreStats => "/restore_stats",
            Endpoint::ReloadScenes => "/reload_scenes",
        }
    }

    /// True for endpoints the server answers with a full page instead of JSON.
    pub fn navigates(&self) -> bool {
        matches!(
            self,
            Endpoint::SelectSkills
                | Endpoint::BattleChoice
                | Endpoint::TalkChoice
                | Endpoint::Navigate
                | Endpoint::Undo
        )
    }
}

#[async_trait]
pub trait Gateway: Send + Sync {
    /// Every spell the player knows. The server never pages this list.
    async fn fetch_spells(&self) -> Result<SpellList, GatewayError>;

    /// Contents of a named container plus the player inventory.
    async fn fetch_container(&self, container_id: &str) -> Result<ContainerPayload, GatewayError>;

    async fn fetch_achievements(&self) -> Result<AchievementList, GatewayError>;

    async fn post_item_action(
        &self,
        request: &ItemActionRequest,
    ) -> Result<ItemActionResponse, GatewayError>;

    /// Revert the last item action.
    async fn post_undo_item_action(&self) -> Result<ItemActionResponse, GatewayError>;

    /// Submit the chosen battle skills, one `skills` field per name.
    async fn submit_skills(&self, skills: &[String]) -> Result<Navigation, GatewayError>;

    async fn submit_battle_choice(&self, choice: usize) -> Result<Navigation, GatewayError>;

    async fn submit_talk_choice(&self, choice: usize) -> Result<Navigation, GatewayError>;

    async fn navigate(&self, scene_id: &str) -> Result<Navigation, GatewayError>;

    /// Step the whole game state back once.
    async fn undo(&self) -> Result<Navigation, GatewayError>;

    async fn gain_all_spells(&self) -> Result<MessageResponse, GatewayError>;

    async fn restore_stats(&self) -> Result<MessageResponse, GatewayError>;

    /// Plain-text status line.
    async fn reload_scenes(&self) -> Result<String, GatewayError>;
}
