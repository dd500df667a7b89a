//! Panels, tabs and the sidebar. Opening a panel triggers exactly one initial load;
//! closing a panel or switching a tab never talks to the server.

use log::debug;

use super::{GameClient, Outcome};
use crate::error::ViewError;
use crate::gateway::Gateway;
use crate::view::page::{PanelId, RegionId};

/// A panel together with what it shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Inventory,
    Container(String),
    Spells,
    Skills,
    Achievements,
}

impl Panel {
    pub fn id(&self) -> PanelId {
        match self {
            Panel::Inventory => PanelId::Inventory,
            Panel::Container(_) => PanelId::Container,
            Panel::Spells => PanelId::Spells,
            Panel::Skills => PanelId::Skills,
            Panel::Achievements => PanelId::Achievements,
        }
    }
}

impl<G: Gateway> GameClient<G> {
    pub async fn open(&self, panel: Panel) -> Result<Outcome, ViewError> {
        debug!("Opening panel {:?}", panel);
        self.lock().page.open_panel(panel.id());
        match panel {
            Panel::Inventory => self.load_inventory().await,
            Panel::Container(container_id) => self.load_container(&container_id).await,
            Panel::Spells => self.load_spells(1).await,
            Panel::Skills => self.load_skills().await,
            Panel::Achievements => self.load_achievements().await,
        }
    }

    /// Open the container panel on the configured default container.
    pub async fn open_default_container(&self) -> Result<Outcome, ViewError> {
        let container_id = self.config.default_container.clone();
        self.open(Panel::Container(container_id)).await
    }

    pub fn close(&self, panel: PanelId) {
        let mut store = self.lock();
        store.page.close_panel(panel);
        if panel == PanelId::Container {
            store.state.open_container = None;
        }
    }

    /// Switch the visible content group of an open panel. No data is reloaded.
    pub fn show_tab(&self, panel: PanelId, region: RegionId) -> bool {
        self.lock().page.show_tab(panel, region)
    }

    /// Flip the sidebar; returns whether it is now collapsed.
    pub fn toggle_sidebar(&self) -> bool {
        let mut store = self.lock();
        let collapsed = !store.page.sidebar_collapsed();
        store.page.set_sidebar_collapsed(collapsed);
        collapsed
    }

    /// What the page does once loaded: collapse the sidebar and fill the skill picker.
    pub async fn page_loaded(&self) -> Result<Outcome, ViewError> {
        self.lock().page.set_sidebar_collapsed(true);
        self.load_skills().await
    }
}
