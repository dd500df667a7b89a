//! # View Synchronization Layer
//!
//! Turns server payloads into a [`Page`] and keeps the client-side view state
//! that pagination and skill selection need.
//!
//! ## Components
//!
//! - [`page`] - regions, widgets, panels and typed action bindings
//! - [`state`] - page numbers, selection, spell cache, request tickets
//! - [`pagination`] - client-side slicing of fully fetched lists
//! - [`selection`] - the up-to-three battle skill picks
//! - [`render`] - list renderers (inventory, container, spells, skills, achievements)
//! - [`reconcile`] - stat and equipment widgets, capacity and paging controls
//! - [`notice`] - transient event messages, warnings and retryable errors
//! - [`text`] - plain-text presentation for the CLI

pub mod labels;
pub mod notice;
pub mod page;
pub mod pagination;
pub mod reconcile;
pub mod render;
pub mod selection;
pub mod state;
pub mod text;

pub use notice::{Notice, NoticeLevel, NoticeLog};
pub use page::{
    ActionBinding, Fragment, Intent, ItemNode, Node, Page, PanelId, RegionId, Widget, WidgetId,
};
pub use pagination::{page_count, Pager};
pub use selection::{SkillSelection, Toggle};
pub use state::{RequestTokens, Resource, Ticket, ViewState};
