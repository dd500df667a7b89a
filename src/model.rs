//! Payload types exchanged with the game server.
//!
//! Everything here mirrors what the server sends or expects. The client never
//! owns authoritative state; these values are rendered and then dropped.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Item name -> quantity. Sorted by name so rendering is deterministic.
pub type InventoryMap = BTreeMap<String, u32>;

/// Container id the server uses for "the player's own backpack".
pub const INVENTORY_CONTAINER_ID: &str = "inventory";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spell {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SpellList {
    #[serde(default)]
    pub spells: Vec<Spell>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AchievementList {
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

/// Response of `/scene_container/{id}`.
///
/// For the `inventory` id the server omits `items`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContainerPayload {
    #[serde(default)]
    pub items: InventoryMap,
    #[serde(default)]
    pub inventory: InventoryMap,
    #[serde(default)]
    pub inventory_length: u32,
}

/// Player stats. Bars are percentages; enemy fields only exist during battle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default)]
    pub health: f64,
    #[serde(default)]
    pub san: f64,
    #[serde(default)]
    pub fatigue: f64,
    #[serde(default)]
    pub galleons: i64,
    #[serde(default)]
    pub sickle: i64,
    #[serde(default)]
    pub knut: i64,
    /// In-game clock. Some scenes send a bare number; it is shown as-is.
    #[serde(default, deserialize_with = "text_or_number")]
    pub time: String,
    #[serde(default)]
    pub enemy_health: Option<f64>,
    #[serde(default)]
    pub enemy_max_health: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<TextOrNumber>::deserialize(deserializer)? {
        Some(TextOrNumber::Text(text)) => text,
        Some(TextOrNumber::Number(n)) => n.to_string(),
        None => String::new(),
    })
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub hand: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Response of `/item_action` and `/undo_item_action`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemActionResponse {
    #[serde(default)]
    pub event_message: Option<String>,
    #[serde(default)]
    pub stats: Stats,
    #[serde(default)]
    pub equipment: Equipment,
    /// Whether the server kept a snapshot to undo this action.
    #[serde(default)]
    pub can_undo: bool,
}

/// `{message}` answer of the debug endpoints.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

/// Result of a form post or GET that the server answers with a redirect.
///
/// The server re-renders the whole page; the client only learns where it ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub location: String,
}

/// Where an item lives when an action is taken on it.
///
/// On the wire `Inventory` is the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContainerScope {
    Inventory,
    Named(String),
}

impl ContainerScope {
    pub fn named(id: impl Into<String>) -> Self {
        let id = id.into();
        if id.is_empty() {
            ContainerScope::Inventory
        } else {
            ContainerScope::Named(id)
        }
    }

    /// Form value for the `container` field.
    pub fn as_form_value(&self) -> &str {
        match self {
            ContainerScope::Inventory => "",
            ContainerScope::Named(id) => id,
        }
    }

    pub fn container_id(&self) -> Option<&str> {
        match self {
            ContainerScope::Inventory => None,
            ContainerScope::Named(id) => Some(id),
        }
    }
}

/// Item verbs understood by `/item_action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemVerb {
    Use,
    Discard,
    MoveToInventory,
    MoveToContainer,
}

impl ItemVerb {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemVerb::Use => "use",
            ItemVerb::Discard => "discard",
            ItemVerb::MoveToInventory => "move_to_inventory",
            ItemVerb::MoveToContainer => "move_to_container",
        }
    }
}

impl fmt::Display for ItemVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a `/item_action` post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemActionRequest {
    pub verb: ItemVerb,
    pub item: String,
    pub scope: ContainerScope,
}

impl ItemActionRequest {
    pub fn new(verb: ItemVerb, item: impl Into<String>, scope: ContainerScope) -> Self {
        Self {
            verb,
            item: item.into(),
            scope,
        }
    }

    pub fn form_fields(&self) -> [(&'static str, &str); 3] {
        [
            ("action", self.verb.as_str()),
            ("item", self.item.as_str()),
            ("container", self.scope.as_form_value()),
        ]
    }
}
