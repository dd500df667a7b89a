//! In-memory model of the game page.
//!
//! Regions hold rendered list fragments, widgets hold the scalar bits (bar widths,
//! counters, labels, button state), panels track modal visibility. Every region
//! and widget is addressed by a stable identifier rather than by position.

use std::collections::{HashMap, HashSet};

use super::notice::NoticeLog;
use crate::model::{ItemActionRequest, Navigation};

/// List areas repainted by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegionId {
    Inventory,
    ContainerItems,
    ContainerInventory,
    Spells,
    Skills,
    Achievements,
}

/// Scalar widgets patched by the reconciler and the pagination controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    HealthBar,
    HealthText,
    SanBar,
    SanText,
    FatigueBar,
    FatigueText,
    Galleons,
    Sickle,
    Knut,
    Time,
    EnemyHealth,
    HandSlot,
    BodySlot,
    InventoryCapacity,
    SpellsPageInfo,
    PrevSpells,
    NextSpells,
    PrevSkills,
    NextSkills,
    UndoItem,
}

/// Overlay panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelId {
    Inventory,
    Container,
    Spells,
    Skills,
    Achievements,
}

impl PanelId {
    /// Content regions living inside the panel, first one shown by default.
    pub fn regions(&self) -> &'static [RegionId] {
        match self {
            PanelId::Inventory => &[RegionId::Inventory],
            PanelId::Container => &[RegionId::ContainerItems, RegionId::ContainerInventory],
            PanelId::Spells => &[RegionId::Spells],
            PanelId::Skills => &[RegionId::Skills],
            PanelId::Achievements => &[RegionId::Achievements],
        }
    }
}

/// Something a click on a rendered node asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Item(ItemActionRequest),
    ToggleSkill(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBinding {
    pub label: String,
    pub intent: Intent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemNode {
    pub icon: &'static str,
    pub title: String,
    pub description: Option<String>,
    pub actions: Vec<ActionBinding>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Placeholder(String),
    Item(ItemNode),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    pub nodes: Vec<Node>,
}

impl Fragment {
    pub fn placeholder(text: &str) -> Self {
        Self {
            nodes: vec![Node::Placeholder(text.to_string())],
        }
    }

    pub fn items(nodes: Vec<ItemNode>) -> Self {
        Self {
            nodes: nodes.into_iter().map(Node::Item).collect(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.nodes.as_slice(), [Node::Placeholder(_)])
    }

    pub fn item_nodes(&self) -> impl Iterator<Item = &ItemNode> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Item(item) => Some(item),
            Node::Placeholder(_) => None,
        })
    }

    /// Find the binding with `label` on the node titled `title`.
    pub fn binding(&self, title: &str, label: &str) -> Option<&Intent> {
        self.item_nodes()
            .find(|n| n.title == title)?
            .actions
            .iter()
            .find(|a| a.label == label)
            .map(|a| &a.intent)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Widget {
    pub text: String,
    /// CSS-style width, e.g. `45%`, for bars.
    pub width: Option<String>,
    pub class: Option<String>,
    pub disabled: bool,
}

#[derive(Debug, Clone, Default)]
struct Region {
    fragment: Fragment,
    revision: u64,
}

#[derive(Debug, Clone)]
pub struct Page {
    regions: HashMap<RegionId, Region>,
    widgets: HashMap<WidgetId, Widget>,
    open_panels: HashSet<PanelId>,
    active_tabs: HashMap<PanelId, RegionId>,
    sidebar_collapsed: bool,
    stats_revision: u64,
    navigation: Option<Navigation>,
    pub notices: NoticeLog,
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl Page {
    pub fn new() -> Self {
        Self {
            regions: HashMap::new(),
            widgets: HashMap::new(),
            open_panels: HashSet::new(),
            active_tabs: HashMap::new(),
            sidebar_collapsed: true,
            stats_revision: 0,
            navigation: None,
            notices: NoticeLog::default(),
        }
    }

    pub fn replace_region(&mut self, id: RegionId, fragment: Fragment) {
        let region = self.regions.entry(id).or_default();
        region.fragment = fragment;
        region.revision += 1;
    }

    pub fn region(&self, id: RegionId) -> Option<&Fragment> {
        self.regions.get(&id).map(|r| &r.fragment)
    }

    /// How many times the region has been painted since the page loaded.
    pub fn revision(&self, id: RegionId) -> u64 {
        self.regions.get(&id).map_or(0, |r| r.revision)
    }

    pub fn widget(&self, id: WidgetId) -> Option<&Widget> {
        self.widgets.get(&id)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> &mut Widget {
        self.widgets.entry(id).or_default()
    }

    pub fn text(&self, id: WidgetId) -> Option<&str> {
        self.widgets.get(&id).map(|w| w.text.as_str())
    }

    pub fn set_text(&mut self, id: WidgetId, text: impl Into<String>) {
        self.widget_mut(id).text = text.into();
    }

    pub fn set_disabled(&mut self, id: WidgetId, disabled: bool) {
        self.widget_mut(id).disabled = disabled;
    }

    pub(crate) fn bump_stats_revision(&mut self) {
        self.stats_revision += 1;
    }

    /// How many times the stat widgets have been reconciled since the page loaded.
    pub fn stats_revision(&self) -> u64 {
        self.stats_revision
    }

    pub fn open_panel(&mut self, id: PanelId) {
        self.open_panels.insert(id);
        if let Some(first) = id.regions().first() {
            self.active_tabs.entry(id).or_insert(*first);
        }
    }

    pub fn close_panel(&mut self, id: PanelId) {
        self.open_panels.remove(&id);
    }

    pub fn is_open(&self, id: PanelId) -> bool {
        self.open_panels.contains(&id)
    }

    /// Switch the visible content group of a panel. Regions outside the panel are ignored.
    pub fn show_tab(&mut self, panel: PanelId, region: RegionId) -> bool {
        if !panel.regions().contains(&region) {
            return false;
        }
        self.active_tabs.insert(panel, region);
        true
    }

    pub fn active_tab(&self, panel: PanelId) -> Option<RegionId> {
        self.active_tabs.get(&panel).copied()
    }

    /// A region is visible when its panel is open and it is the active tab.
    pub fn is_visible(&self, region: RegionId) -> bool {
        // the picker also sits inline on battle pages
        if region == RegionId::Skills {
            return true;
        }
        self.open_panels
            .iter()
            .any(|p| self.active_tabs.get(p) == Some(&region))
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn set_sidebar_collapsed(&mut self, collapsed: bool) {
        self.sidebar_collapsed = collapsed;
    }

    pub fn navigation(&self) -> Option<&Navigation> {
        self.navigation.as_ref()
    }

    /// The server replaced the whole page. Everything client-painted is gone;
    /// notices survive so the last message can still be read.
    pub fn reload(&mut self, navigation: Option<Navigation>) {
        let notices = std::mem::take(&mut self.notices);
        *self = Page::new();
        self.notices = notices;
        self.navigation = navigation;
    }
}
