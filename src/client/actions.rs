//! Action dispatcher: user intents in, gateway calls out, affected views repainted.

use log::{debug, info};
use std::time::Instant;

use super::{GameClient, Outcome};
use crate::error::{GatewayError, ViewError};
use crate::gateway::Gateway;
use crate::logutil::escape_log;
use crate::model::{ContainerScope, ItemActionRequest, ItemActionResponse, ItemVerb, Navigation};
use crate::view::notice::Notice;
use crate::view::page::{Intent, PanelId};
use crate::view::selection::Toggle;
use crate::view::state::{Resource, Ticket};
use crate::view::{labels, reconcile};

impl<G: Gateway> GameClient<G> {
    /// Run whatever a rendered binding asks for.
    pub async fn perform(&self, intent: &Intent) -> Result<Outcome, ViewError> {
        match intent {
            Intent::Item(request) => self.item_action(request).await,
            Intent::ToggleSkill(name) => Ok(self.toggle_skill(name)),
        }
    }

    pub async fn use_item(&self, item: &str) -> Result<Outcome, ViewError> {
        self.item_action(&ItemActionRequest::new(
            ItemVerb::Use,
            item,
            ContainerScope::Inventory,
        ))
        .await
    }

    pub async fn discard_item(&self, item: &str, scope: ContainerScope) -> Result<Outcome, ViewError> {
        self.item_action(&ItemActionRequest::new(ItemVerb::Discard, item, scope))
            .await
    }

    pub async fn take_from_container(&self, item: &str, container_id: &str) -> Result<Outcome, ViewError> {
        self.item_action(&ItemActionRequest::new(
            ItemVerb::MoveToInventory,
            item,
            ContainerScope::named(container_id),
        ))
        .await
    }

    pub async fn put_into_container(&self, item: &str, container_id: &str) -> Result<Outcome, ViewError> {
        self.item_action(&ItemActionRequest::new(
            ItemVerb::MoveToContainer,
            item,
            ContainerScope::named(container_id),
        ))
        .await
    }

    /// Post an item action, reconcile stats from the answer, then re-fetch the
    /// view the item lives in: the named container, or the backpack.
    pub async fn item_action(&self, request: &ItemActionRequest) -> Result<Outcome, ViewError> {
        info!(
            "Item action {} on {} (container: {:?})",
            request.verb,
            escape_log(&request.item),
            request.scope.container_id()
        );
        let ticket = self.issue(Resource::Stats);
        let response = match self.gateway.post_item_action(request).await {
            Ok(response) => response,
            Err(e) => return self.settle_failure(&ticket, e),
        };
        self.apply_item_response(&ticket, &response);

        match request.scope.container_id() {
            Some(container_id) => self.load_container(container_id).await?,
            None => self.load_inventory().await?,
        };
        Ok(Outcome::Applied)
    }

    /// Revert the last item action and refresh whichever item view is showing.
    pub async fn undo_item_action(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Stats);
        let response = match self.gateway.post_undo_item_action().await {
            Ok(response) => response,
            Err(e) => return self.settle_failure(&ticket, e),
        };
        self.apply_item_response(&ticket, &response);

        let open_container = {
            let store = self.lock();
            if store.page.is_open(PanelId::Container) {
                store.state.open_container.clone()
            } else {
                None
            }
        };
        match open_container {
            Some(container_id) => self.load_container(&container_id).await?,
            None => self.load_inventory().await?,
        };
        Ok(Outcome::Applied)
    }

    fn apply_item_response(&self, ticket: &Ticket, response: &ItemActionResponse) {
        let mut store = self.lock();
        if let Some(message) = &response.event_message {
            debug!("Event: {}", escape_log(message));
            self.show_event(&mut store, message);
        }
        if store.state.tokens.is_current(ticket) {
            reconcile::reconcile(&mut store.page, &response.stats, &response.equipment);
            reconcile::update_undo(&mut store.page, response.can_undo);
        } else {
            debug!("Skipping stale stats from item action");
        }
    }

    /// Add or remove a battle skill. A full selection shows a warning instead.
    pub fn toggle_skill(&self, name: &str) -> Outcome {
        let mut store = self.lock();
        match store.state.selection.toggle(name) {
            Toggle::Added | Toggle::Removed => {
                // nothing to repaint until the picker has been loaded
                if store.state.spell_cache.is_some() {
                    store.paint_skills();
                }
                Outcome::Applied
            }
            Toggle::Rejected => {
                let limit = store.state.selection.limit();
                let text = labels::max_skills(limit);
                store.page.notices.push(Notice::warning(
                    text.clone(),
                    Instant::now(),
                    self.config.event_message_ttl(),
                ));
                Outcome::Rejected(text)
            }
        }
    }

    /// Submit the picked skills as one form. The selection is gone afterwards
    /// whichever way the request goes; the server owns it from here.
    pub async fn confirm_skill_selection(&self) -> Result<Outcome, ViewError> {
        let skills = self.lock().state.selection.take();
        info!("Confirming {} battle skill(s)", skills.len());
        let ticket = self.issue(Resource::Page);
        let result = self.gateway.submit_skills(&skills).await;
        self.finish_navigation(&ticket, result)
    }

    pub async fn choose_battle_action(&self, choice: usize) -> Result<Outcome, ViewError> {
        info!("Battle choice {}", choice);
        let ticket = self.issue(Resource::Page);
        let result = self.gateway.submit_battle_choice(choice).await;
        self.finish_navigation(&ticket, result)
    }

    pub async fn choose_talk_option(&self, choice: usize) -> Result<Outcome, ViewError> {
        info!("Talk choice {}", choice);
        let ticket = self.issue(Resource::Page);
        let result = self.gateway.submit_talk_choice(choice).await;
        self.finish_navigation(&ticket, result)
    }

    pub async fn travel_to(&self, scene_id: &str) -> Result<Outcome, ViewError> {
        info!("Travelling to {}", escape_log(scene_id));
        let ticket = self.issue(Resource::Page);
        let result = self.gateway.navigate(scene_id).await;
        self.finish_navigation(&ticket, result)
    }

    /// Step the game back once; the server re-renders the page.
    pub async fn undo(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Page);
        let result = self.gateway.undo().await;
        self.finish_navigation(&ticket, result)
    }

    fn finish_navigation(
        &self,
        ticket: &Ticket,
        result: Result<Navigation, GatewayError>,
    ) -> Result<Outcome, ViewError> {
        match result {
            Ok(navigation) => {
                debug!("Page replaced by {}", navigation.location);
                self.lock().navigated(Some(navigation.clone()));
                Ok(Outcome::Navigated(navigation))
            }
            Err(e) => self.settle_failure(ticket, e),
        }
    }

    /// Debug helper: learn every spell, then refresh the spells panel if it is open.
    pub async fn gain_all_spells(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Page);
        let response = match self.gateway.gain_all_spells().await {
            Ok(response) => response,
            Err(e) => return self.settle_failure(&ticket, e),
        };
        let reload_page = {
            let mut store = self.lock();
            self.show_event(&mut store, &response.message);
            let open = store.page.is_open(PanelId::Spells);
            let current = store.state.spells.current();
            open.then_some(current)
        };
        if let Some(page) = reload_page {
            self.load_spells(page).await?;
        }
        Ok(Outcome::Applied)
    }

    /// Debug helper: refill health and sanity; the page reloads afterwards.
    pub async fn restore_stats(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Page);
        let response = match self.gateway.restore_stats().await {
            Ok(response) => response,
            Err(e) => return self.settle_failure(&ticket, e),
        };
        let mut store = self.lock();
        self.show_event(&mut store, &response.message);
        store.navigated(None);
        Ok(Outcome::Reloaded)
    }

    /// Debug helper: ask the server to re-read its scene files.
    pub async fn reload_scenes(&self) -> Result<Outcome, ViewError> {
        let ticket = self.issue(Resource::Page);
        let message = match self.gateway.reload_scenes().await {
            Ok(message) => message,
            Err(e) => return self.settle_failure(&ticket, e),
        };
        info!("Reload scenes: {}", escape_log(&message));
        let mut store = self.lock();
        self.show_event(&mut store, message.trim());
        Ok(Outcome::Applied)
    }
}
