//! # wandview - view synchronization for a browser text RPG
//!
//! The game server owns all state: stats, inventory, containers, known spells,
//! achievements. This crate is the client half that keeps a page in step with it:
//! it fetches lists, pages through them client-side, paints them into a page model
//! with typed action bindings, reconciles stat widgets after every mutating call,
//! and turns player intents into form posts and JSON requests.
//!
//! ## Features
//!
//! - **Typed gateway**: one async method per server endpoint behind the [`gateway::Gateway`] trait.
//! - **Page model**: regions, widgets and panels addressed by stable identifiers.
//! - **Client-side paging**: the spells viewer and skill picker slice one fetched list.
//! - **Skill selection**: up to three picks, submitted as a single form.
//! - **Explicit failures**: success, server rejection and transport failure are
//!   told apart; stale responses from overlapping requests are dropped.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use wandview::client::{GameClient, Panel};
//! use wandview::config::Config;
//! use wandview::gateway::HttpGateway;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load("wandview.toml").await?;
//!     let gateway = HttpGateway::new(&config.server)?;
//!     let client = GameClient::new(gateway, config.view)?;
//!
//!     client.open(Panel::Inventory).await?;
//!     client.use_item("Chocolate Frog").await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`client`] - game client: loaders, action dispatcher, panels
//! - [`gateway`] - HTTP gateway trait and reqwest implementation
//! - [`view`] - page model, pagination, selection, renderers, stat reconciler
//! - [`model`] - server payload types
//! - [`config`] - TOML configuration
//! - [`error`] - gateway and view errors
//! - [`logutil`] - log-safe rendering of server strings
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   GameClient    │ ← panels, loaders, action dispatch
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   View layer    │ ← page model, renderers, reconciler, view state
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │   Gateway       │ ← game server over HTTP
//! └─────────────────┘
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gateway;
pub mod logutil;
pub mod model;
pub mod view;
