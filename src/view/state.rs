//! Ephemeral client view state: page numbers, selection, the last fetched spell
//! list, and request tickets. All of it is thrown away when the page reloads.

use std::collections::HashMap;

use super::pagination::Pager;
use super::selection::SkillSelection;
use crate::config::ViewConfig;
use crate::model::Spell;

/// Something the client fetches and paints independently.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Resource {
    Spells,
    Skills,
    Inventory,
    Container(String),
    Achievements,
    Stats,
    /// Requests that replace or reload the whole page.
    Page,
}

/// Proof that a response belongs to the latest request for its resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    resource: Resource,
    seq: u64,
    epoch: u64,
}

impl Ticket {
    pub fn resource(&self) -> &Resource {
        &self.resource
    }
}

/// Per-resource request counters. A response is applied only if its ticket is
/// still the newest one issued for that resource and no page reload happened
/// since it was issued.
#[derive(Debug, Clone, Default)]
pub struct RequestTokens {
    latest: HashMap<Resource, u64>,
    epoch: u64,
}

impl RequestTokens {
    pub fn issue(&mut self, resource: Resource) -> Ticket {
        let seq = self.latest.entry(resource.clone()).or_insert(0);
        *seq += 1;
        Ticket {
            resource,
            seq: *seq,
            epoch: self.epoch,
        }
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.epoch == self.epoch && self.latest.get(&ticket.resource) == Some(&ticket.seq)
    }

    /// Make every ticket issued so far stale.
    pub fn invalidate_all(&mut self) {
        self.epoch += 1;
    }
}

#[derive(Debug, Clone)]
pub struct ViewState {
    pub spells: Pager,
    pub skills: Pager,
    pub selection: SkillSelection,
    /// Last spell list the server sent; re-sliced when paging back.
    pub spell_cache: Option<Vec<Spell>>,
    /// Container shown in the container panel, if any.
    pub open_container: Option<String>,
    pub tokens: RequestTokens,
}

impl ViewState {
    pub fn new(config: &ViewConfig) -> Self {
        Self {
            spells: Pager::one_based(config.spells_page_size),
            skills: Pager::zero_based(config.skills_page_size),
            selection: SkillSelection::new(config.max_selected_skills),
            spell_cache: None,
            open_container: None,
            tokens: RequestTokens::default(),
        }
    }

    /// Fresh state after a full page load. Requests issued before the reload
    /// can no longer paint.
    pub fn reset(&mut self) {
        self.tokens.invalidate_all();
        self.spells.reset();
        self.skills.reset();
        self.selection.clear();
        self.spell_cache = None;
        self.open_container = None;
    }
}
