//! # Game Client
//!
//! [`GameClient`] ties a [`Gateway`] to the page model. It owns the page and the
//! view state behind a mutex that is never held across a request, so several
//! requests may be in flight at once; request tickets decide which responses
//! still get painted.
//!
//! - [`loaders`] - list loads and paging (inventory, container, spells, skills, achievements)
//! - [`actions`] - item actions, skill selection, battle/talk/travel navigation, debug helpers
//! - [`modal`] - panels, tabs, sidebar and page-load behaviour

use log::{debug, warn};
use std::sync::{Mutex, MutexGuard};
use std::time::Instant;

use crate::config::ViewConfig;
use crate::error::{GatewayError, ViewError};
use crate::gateway::Gateway;
use crate::model::{Navigation, Spell};
use crate::view::notice::Notice;
use crate::view::page::{Page, RegionId};
use crate::view::state::{Resource, Ticket, ViewState};
use crate::view::{labels, reconcile, render};

pub mod actions;
pub mod loaders;
pub mod modal;

pub use modal::Panel;

/// What happened to the page as a result of one interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The response was painted.
    Applied,
    /// Nothing needed to change (e.g. already on the last page).
    Unchanged,
    /// A newer request for the same resource superseded this one.
    Stale,
    /// The action was refused; a warning notice is showing.
    Rejected(String),
    /// The server replaced the page.
    Navigated(Navigation),
    /// The page was reloaded in place.
    Reloaded,
}

pub(crate) struct ViewStore {
    pub(crate) page: Page,
    pub(crate) state: ViewState,
}

impl ViewStore {
    /// Paint the spells page from the cached list.
    pub(crate) fn paint_spells(&mut self) {
        let spells: &[Spell] = self.state.spell_cache.as_deref().unwrap_or(&[]);
        let slice = self.state.spells.slice(spells);
        self.page
            .replace_region(RegionId::Spells, render::render_spells(slice));
        reconcile::update_spells_pagination(&mut self.page, &self.state.spells, spells.len());
    }

    /// Paint the skill picker from the cached list and the current selection.
    pub(crate) fn paint_skills(&mut self) {
        let spells: &[Spell] = self.state.spell_cache.as_deref().unwrap_or(&[]);
        let slice = self.state.skills.slice(spells);
        self.page.replace_region(
            RegionId::Skills,
            render::render_skills(slice, &self.state.selection),
        );
        reconcile::update_skills_pagination(&mut self.page, &self.state.skills, spells.len());
    }

    pub(crate) fn navigated(&mut self, navigation: Option<Navigation>) {
        self.state.reset();
        self.page.reload(navigation);
    }
}

pub struct GameClient<G: Gateway> {
    gateway: G,
    config: ViewConfig,
    store: Mutex<ViewStore>,
}

impl<G: Gateway> GameClient<G> {
    pub fn new(gateway: G, config: ViewConfig) -> Result<Self, ViewError> {
        config.validate()?;
        let store = ViewStore {
            page: Page::new(),
            state: ViewState::new(&config),
        };
        Ok(Self {
            gateway,
            config,
            store: Mutex::new(store),
        })
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    pub(crate) fn lock(&self) -> MutexGuard<'_, ViewStore> {
        // A panic while painting leaves the page no worse than a half-applied render.
        self.store.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Snapshot of the page.
    pub fn page(&self) -> Page {
        self.lock().page.clone()
    }

    /// Read the page without cloning it.
    pub fn with_page<R>(&self, f: impl FnOnce(&Page) -> R) -> R {
        f(&self.lock().page)
    }

    pub fn selected_skills(&self) -> Vec<String> {
        self.lock().state.selection.names().to_vec()
    }

    pub fn spells_page(&self) -> usize {
        self.lock().state.spells.current()
    }

    pub fn skills_page(&self) -> usize {
        self.lock().state.skills.current()
    }

    /// Drop notices whose display time is over.
    pub fn prune_notices(&self) -> usize {
        self.lock().page.notices.prune(Instant::now())
    }

    pub(crate) fn issue(&self, resource: Resource) -> Ticket {
        self.lock().state.tokens.issue(resource)
    }

    pub(crate) fn show_event(&self, store: &mut ViewStore, text: &str) {
        store.page.notices.push(Notice::event(
            text,
            Instant::now(),
            self.config.event_message_ttl(),
        ));
    }

    /// Map a failed round-trip onto the page: refusals become warnings and an
    /// `Outcome::Rejected`; everything else becomes a retryable error and an `Err`.
    /// A failure whose request was already superseded leaves the page alone.
    pub(crate) fn settle_failure(
        &self,
        ticket: &Ticket,
        err: GatewayError,
    ) -> Result<Outcome, ViewError> {
        let mut store = self.lock();
        if !store.state.tokens.is_current(ticket) {
            debug!("Ignoring failure of superseded request: {}", err);
            return Ok(Outcome::Stale);
        }
        if err.is_rejection() {
            warn!("Server rejected request: {}", err);
            store.page.notices.push(Notice::warning(
                labels::ACTION_REJECTED,
                Instant::now(),
                self.config.event_message_ttl(),
            ));
            return Ok(Outcome::Rejected(err.to_string()));
        }
        warn!("Request failed: {}", err);
        store.page.notices.push(Notice::error(labels::REQUEST_FAILED));
        Err(err.into())
    }
}
