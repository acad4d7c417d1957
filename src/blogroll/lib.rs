//! # Blogroll Architecture
//!
//! Blogroll is the state core of a blog listing: it loads posts and category
//! labels once, then lets a user filter by category, search by keyword and add
//! posts of their own. Everything is memory-resident and lasts one session.
//! The CLI shipped with the crate is one client of this core; a browser or TUI
//! front end would drive the same [`controller::ViewController`].
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints listings, owns stdout/stderr    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Controller (controller.rs)                                 │
//! │  - Loading / Ready / Error phases                           │
//! │  - Routes category, search and submit events                │
//! │  - Hands out immutable snapshots                            │
//! └─────────────────────────────────────────────────────────────┘
//!            │                    │                    │
//!            ▼                    ▼                    ▼
//! ┌────────────────┐  ┌───────────────────┐  ┌──────────────────┐
//! │ filter.rs      │  │ validation.rs     │  │ store/           │
//! │ pure filtering │  │ form → Post       │  │ posts+categories │
//! └────────────────┘  └───────────────────┘  └──────────────────┘
//!                              ▲
//!                              │ seeded once by
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Providers (provider/)                                      │
//! │  - Async PostProvider trait                                 │
//! │  - StaticProvider (memory), JsonFileProvider (file)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Derived State Is Recomputed, Never Patched
//!
//! The visible post list is a pure function of the full post sequence, the
//! active category and the active search term. Every mutating event ends by
//! re-running the filter over the full sequence, so a new post shows up in
//! the listing exactly when it matches the current filters.
//!
//! ## Module Overview
//!
//! - [`controller`]: Session state machine and snapshots
//! - [`filter`]: Category and keyword filtering
//! - [`validation`]: New-post form checks and post construction
//! - [`store`]: Post sequence and category set
//! - [`provider`]: Sources of initial data
//! - [`model`]: `Post`, slug and excerpt derivation
//! - [`index`]: Render keys for listings
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod config;
pub mod controller;
pub mod error;
pub mod filter;
pub mod index;
pub mod model;
pub mod provider;
pub mod store;
pub mod validation;
