//! List loads and paging.
//!
//! Every load follows the same shape: take a ticket, fetch, then paint only if the
//! ticket is still current. Spells and skills share one endpoint and one cached
//! list; paging back re-slices that cache without a request.

use log::debug;

use super::{GameClient, Outcome};
use crate::error::ViewError;
use crate::gateway::Gateway;
use crate::model::INVENTORY_CONTAINER_ID;
use crate::view::page::RegionId;
use crate::view::state::Resource;
use crate::view::{reconcile, render};

impl<G: Gateway> GameClient<G> {
    /// Fetch the backpack and repaint the inventory panel and capacity counter.
    pub async fn load_inventory(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Inventory);
        let payload = match self.gateway.fetch_container(INVENTORY_CONTAINER_ID).await {
            Ok(payload) => payload,
            Err(e) => return self.settle_failure(&ticket, e),
        };

        let mut store = self.lock();
        if !store.state.tokens.is_current(&ticket) {
            debug!("Discarding stale inventory response");
            return Ok(Outcome::Stale);
        }
        store.page.replace_region(
            RegionId::Inventory,
            render::render_inventory(&payload.inventory),
        );
        reconcile::update_capacity(&mut store.page, payload.inventory_length, &self.config);
        Ok(Outcome::Applied)
    }

    /// Fetch a container and repaint both sides of the container panel.
    pub async fn load_container(&self, container_id: &str) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Container(container_id.to_string()));
        let payload = match self.gateway.fetch_container(container_id).await {
            Ok(payload) => payload,
            Err(e) => return self.settle_failure(&ticket, e),
        };

        let mut store = self.lock();
        if !store.state.tokens.is_current(&ticket) {
            debug!("Discarding stale response for container {}", container_id);
            return Ok(Outcome::Stale);
        }
        store.page.replace_region(
            RegionId::ContainerItems,
            render::render_container_items(container_id, &payload.items),
        );
        store.page.replace_region(
            RegionId::ContainerInventory,
            render::render_container_inventory(container_id, &payload.inventory),
        );
        reconcile::update_capacity(&mut store.page, payload.inventory_length, &self.config);
        store.state.open_container = Some(container_id.to_string());
        Ok(Outcome::Applied)
    }

    /// Fetch the spell list and show `page` (1-based, clamped to the pages that exist).
    pub async fn load_spells(&self, page: usize) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Spells);
        let list = match self.gateway.fetch_spells().await {
            Ok(list) => list,
            Err(e) => return self.settle_failure(&ticket, e),
        };

        let mut store = self.lock();
        if !store.state.tokens.is_current(&ticket) {
            debug!("Discarding stale spells response");
            return Ok(Outcome::Stale);
        }
        let len = list.spells.len();
        store.state.spell_cache = Some(list.spells);
        store.state.spells.jump_to(page, len);
        store.paint_spells();
        Ok(Outcome::Applied)
    }

    /// Re-fetch the list and move one page forward if there is one. A list that
    /// changed length is repainted even when there is no next page.
    pub async fn next_spells_page(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Spells);
        let list = match self.gateway.fetch_spells().await {
            Ok(list) => list,
            Err(e) => return self.settle_failure(&ticket, e),
        };

        let mut store = self.lock();
        if !store.state.tokens.is_current(&ticket) {
            debug!("Discarding stale spells response");
            return Ok(Outcome::Stale);
        }
        let len = list.spells.len();
        let previous = store.state.spell_cache.replace(list.spells).map(|s| s.len());
        if !store.state.spells.advance(len) {
            if previous == Some(len) {
                return Ok(Outcome::Unchanged);
            }
            // the list changed under us; the current page may no longer exist
            let current = store.state.spells.current();
            store.state.spells.jump_to(current, len);
        }
        store.paint_spells();
        Ok(Outcome::Applied)
    }

    /// Move one page back, re-slicing the list already fetched.
    pub async fn prev_spells_page(&self) -> Result<Outcome, ViewError> {
        let page = {
            let mut store = self.lock();
            if !store.state.spells.retreat() {
                return Ok(Outcome::Unchanged);
            }
            if store.state.spell_cache.is_some() {
                // invalidate any forward request still in flight
                store.state.tokens.issue(Resource::Spells);
                store.paint_spells();
                return Ok(Outcome::Applied);
            }
            store.state.spells.current()
        };
        self.load_spells(page).await
    }

    /// Fetch the spell list and repaint the skill picker at its current page.
    pub async fn load_skills(&self) -> Result<Outcome, ViewError> {
        let current = self.skills_page();
        self.load_skills_page(current).await
    }

    pub async fn next_skills_page(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Skills);
        let list = match self.gateway.fetch_spells().await {
            Ok(list) => list,
            Err(e) => return self.settle_failure(&ticket, e),
        };

        let mut store = self.lock();
        if !store.state.tokens.is_current(&ticket) {
            debug!("Discarding stale skills response");
            return Ok(Outcome::Stale);
        }
        let len = list.spells.len();
        let previous = store.state.spell_cache.replace(list.spells).map(|s| s.len());
        if !store.state.skills.advance(len) {
            if previous == Some(len) {
                return Ok(Outcome::Unchanged);
            }
            let current = store.state.skills.current();
            store.state.skills.jump_to(current, len);
        }
        store.paint_skills();
        Ok(Outcome::Applied)
    }

    pub async fn prev_skills_page(&self) -> Result<Outcome, ViewError> {
        {
            let mut store = self.lock();
            if !store.state.skills.retreat() {
                return Ok(Outcome::Unchanged);
            }
            if store.state.spell_cache.is_some() {
                store.state.tokens.issue(Resource::Skills);
                store.paint_skills();
                return Ok(Outcome::Applied);
            }
        }
        self.load_skills().await
    }

    /// Jump the skill picker to `page` (0-based) and repaint it.
    pub async fn load_skills_page(&self, page: usize) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Skills);
        let list = match self.gateway.fetch_spells().await {
            Ok(list) => list,
            Err(e) => return self.settle_failure(&ticket, e),
        };

        let mut store = self.lock();
        if !store.state.tokens.is_current(&ticket) {
            debug!("Discarding stale skills response");
            return Ok(Outcome::Stale);
        }
        let len = list.spells.len();
        store.state.spell_cache = Some(list.spells);
        store.state.skills.jump_to(page, len);
        store.paint_skills();
        Ok(Outcome::Applied)
    }

    pub async fn load_achievements(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Achievements);
        let list = match self.gateway.fetch_achievements().await {
            Ok(list) => list,
            Err(e) => return self.settle_failure(&ticket, e),
        };

        let mut store = self.lock();
        if !store.state.tokens.is_current(&ticket) {
            debug!("Discarding stale achievements response");
            return Ok(Outcome::Stale);
        }
        store.page.replace_region(
            RegionId::Achievements,
            render::render_achievements(&list.achievements),
        );
        Ok(Outcome::Applied)
    }
}
