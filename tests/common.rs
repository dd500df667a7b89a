//! Test utilities & fixtures.
//! Provides an in-memory [`Gateway`] that serves canned payloads, records every
//! call, and can be told to fail or stall individual endpoints.
#![allow(dead_code)] // each test binary uses a different subset

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use wandview::client::GameClient;
use wandview::config::ViewConfig;
use wandview::error::GatewayError;
use wandview::gateway::{Endpoint, Gateway};
use wandview::model::{
    Achievement, AchievementList, ContainerPayload, Equipment, InventoryMap, ItemActionRequest,
    ItemActionResponse, MessageResponse, Navigation, Spell, SpellList, Stats,
    INVENTORY_CONTAINER_ID,
};

/// One recorded request: the endpoint plus its form fields / path segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Call {
    pub endpoint: Endpoint,
    pub fields: Vec<(String, String)>,
}

#[derive(Default)]
struct Script {
    spells: Vec<Spell>,
    achievements: Vec<Achievement>,
    containers: HashMap<String, ContainerPayload>,
    item_response: ItemActionResponse,
    message: String,
    failures: HashMap<Endpoint, GatewayError>,
    delays: HashMap<Endpoint, VecDeque<Duration>>,
    calls: Vec<Call>,
}

/// Cloneable handle; clones share the same script and call log.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    script: Arc<Mutex<Script>>,
}

impl ScriptedGateway {
    pub fn new() -> Self {
        Self::default()
    }

    fn with<R>(&self, f: impl FnOnce(&mut Script) -> R) -> R {
        f(&mut *self.script.lock().unwrap())
    }

    pub fn set_spells(&self, spells: Vec<Spell>) {
        self.with(|s| s.spells = spells);
    }

    pub fn set_achievements(&self, achievements: Vec<Achievement>) {
        self.with(|s| s.achievements = achievements);
    }

    pub fn set_container(&self, id: &str, payload: ContainerPayload) {
        self.with(|s| {
            s.containers.insert(id.to_string(), payload);
        });
    }

    pub fn set_item_response(&self, response: ItemActionResponse) {
        self.with(|s| s.item_response = response);
    }

    pub fn set_message(&self, message: &str) {
        self.with(|s| s.message = message.to_string());
    }

    pub fn fail(&self, endpoint: Endpoint, err: GatewayError) {
        self.with(|s| {
            s.failures.insert(endpoint, err);
        });
    }

    pub fn recover(&self, endpoint: Endpoint) {
        self.with(|s| {
            s.failures.remove(&endpoint);
        });
    }

    /// Queue a delay for the next call to `endpoint`. Later calls use later entries.
    pub fn delay_next(&self, endpoint: Endpoint, delay: Duration) {
        self.with(|s| s.delays.entry(endpoint).or_default().push_back(delay));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.with(|s| s.calls.clone())
    }

    pub fn calls_to(&self, endpoint: Endpoint) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.endpoint == endpoint)
            .collect()
    }

    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.calls_to(endpoint).len()
    }

    pub fn clear_calls(&self) {
        self.with(|s| s.calls.clear());
    }

    /// Record the call, wait out any queued delay, then hand back the scripted failure if one is set.
    async fn enter(&self, endpoint: Endpoint, fields: Vec<(String, String)>) -> Result<(), GatewayError> {
        let delay = self.with(|s| {
            s.calls.push(Call { endpoint, fields });
            s.delays.get_mut(&endpoint).and_then(|q| q.pop_front())
        });
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        match self.with(|s| s.failures.get(&endpoint).cloned()) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn navigation(path: &str) -> Navigation {
        Navigation {
            location: format!("http://game.test{}", path),
        }
    }
}

fn field(name: &str, value: impl Into<String>) -> (String, String) {
    (name.to_string(), value.into())
}

#[async_trait]
impl Gateway for ScriptedGateway {
    async fn fetch_spells(&self) -> Result<SpellList, GatewayError> {
        self.enter(Endpoint::Spells, vec![]).await?;
        Ok(SpellList {
            spells: self.with(|s| s.spells.clone()),
        })
    }

    async fn fetch_container(&self, container_id: &str) -> Result<ContainerPayload, GatewayError> {
        self.enter(Endpoint::Container, vec![field("container", container_id)])
            .await?;
        Ok(self.with(|s| s.containers.get(container_id).cloned().unwrap_or_default()))
    }

    async fn fetch_achievements(&self) -> Result<AchievementList, GatewayError> {
        self.enter(Endpoint::Achievements, vec![]).await?;
        Ok(AchievementList {
            achievements: self.with(|s| s.achievements.clone()),
        })
    }

    async fn post_item_action(
        &self,
        request: &ItemActionRequest,
    ) -> Result<ItemActionResponse, GatewayError> {
        let fields = request
            .form_fields()
            .iter()
            .map(|(k, v)| field(k, *v))
            .collect();
        self.enter(Endpoint::ItemAction, fields).await?;
        Ok(self.with(|s| s.item_response.clone()))
    }

    async fn post_undo_item_action(&self) -> Result<ItemActionResponse, GatewayError> {
        self.enter(Endpoint::UndoItemAction, vec![]).await?;
        Ok(self.with(|s| s.item_response.clone()))
    }

    async fn submit_skills(&self, skills: &[String]) -> Result<Navigation, GatewayError> {
        let fields = skills.iter().map(|name| field("skills", name.as_str())).collect();
        self.enter(Endpoint::SelectSkills, fields).await?;
        Ok(Self::navigation("/battle"))
    }

    async fn submit_battle_choice(&self, choice: usize) -> Result<Navigation, GatewayError> {
        self.enter(Endpoint::BattleChoice, vec![field("choice", choice.to_string())])
            .await?;
        Ok(Self::navigation("/battle"))
    }

    async fn submit_talk_choice(&self, choice: usize) -> Result<Navigation, GatewayError> {
        self.enter(Endpoint::TalkChoice, vec![field("choice", choice.to_string())])
            .await?;
        Ok(Self::navigation("/talk"))
    }

    async fn navigate(&self, scene_id: &str) -> Result<Navigation, GatewayError> {
        self.enter(Endpoint::Navigate, vec![field("scene", scene_id)])
            .await?;
        Ok(Self::navigation(&format!("/scene/{}", scene_id)))
    }

    async fn undo(&self) -> Result<Navigation, GatewayError> {
        self.enter(Endpoint::Undo, vec![]).await?;
        Ok(Self::navigation("/"))
    }

    async fn gain_all_spells(&self) -> Result<MessageResponse, GatewayError> {
        self.enter(Endpoint::GainAllSpells, vec![]).await?;
        Ok(MessageResponse {
            message: self.with(|s| s.message.clone()),
        })
    }

    async fn restore_stats(&self) -> Result<MessageResponse, GatewayError> {
        self.enter(Endpoint::RestoreStats, vec![]).await?;
        Ok(MessageResponse {
            message: self.with(|s| s.message.clone()),
        })
    }

    async fn reload_scenes(&self) -> Result<String, GatewayError> {
        self.enter(Endpoint::ReloadScenes, vec![]).await?;
        Ok(self.with(|s| s.message.clone()))
    }
}

/// Client over a fresh scripted gateway with default view settings.
pub fn client() -> (GameClient<ScriptedGateway>, ScriptedGateway) {
    let gateway = ScriptedGateway::new();
    let client = GameClient::new(gateway.clone(), ViewConfig::default()).expect("default config");
    (client, gateway)
}

pub fn spells(n: usize) -> Vec<Spell> {
    (1..=n)
        .map(|i| Spell {
            name: format!("Spell {}", i),
            description: format!("Effect {}", i),
        })
        .collect()
}

pub fn inventory(entries: &[(&str, u32)]) -> InventoryMap {
    entries
        .iter()
        .map(|(name, qty)| (name.to_string(), *qty))
        .collect()
}

pub fn backpack(entries: &[(&str, u32)]) -> ContainerPayload {
    let inventory = inventory(entries);
    ContainerPayload {
        items: InventoryMap::new(),
        inventory_length: inventory.values().sum(),
        inventory,
    }
}

/// Scripted gateway preloaded with a backpack and a `trunk` container.
pub fn stocked() -> (GameClient<ScriptedGateway>, ScriptedGateway) {
    let (client, gateway) = client();
    gateway.set_container(INVENTORY_CONTAINER_ID, backpack(&[("Chocolate Frog", 2), ("Wand", 1)]));
    let mut trunk = backpack(&[("Chocolate Frog", 2), ("Wand", 1)]);
    trunk.items = inventory(&[("Old Book", 1)]);
    gateway.set_container("trunk", trunk);
    (client, gateway)
}

pub fn stats(health: f64, san: f64) -> Stats {
    Stats {
        health,
        san,
        fatigue: 10.0,
        galleons: 3,
        sickle: 7,
        knut: 12,
        time: "Day 1 08:00".to_string(),
        enemy_health: None,
        enemy_max_health: None,
    }
}

pub fn item_response(message: Option<&str>, stats: Stats, hand: Option<&str>) -> ItemActionResponse {
    ItemActionResponse {
        event_message: message.map(str::to_string),
        stats,
        equipment: Equipment {
            hand: hand.map(str::to_string),
            body: None,
        },
        can_undo: true,
    }
}

pub fn rejected(endpoint: Endpoint) -> GatewayError {
    GatewayError::Status {
        endpoint: endpoint.path().to_string(),
        status: 400,
    }
}

pub fn unreachable(endpoint: Endpoint) -> GatewayError {
    GatewayError::Transport {
        endpoint: endpoint.path().to_string(),
        reason: "connection refused".to_string(),
    }
}
