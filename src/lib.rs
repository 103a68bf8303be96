//! View navigation for a single-page site.
//!
//! A [`state::Navigator`] owns the active view, validates requested
//! transitions against an immutable [`model::ViewRegistry`], writes host
//! history through the [`io::HistoryStack`] seam and broadcasts
//! [`view::NavEvent`]s to presentation observers. Input sources (keys, links,
//! history pops) are adapters that turn raw events into [`message::Message`]s
//! handled by [`app::Crossroads`].

pub mod app;
pub mod config;
pub mod error;
pub mod input;
pub mod io;
pub mod logging;
pub mod message;
pub mod model;
pub mod state;
pub mod subscription;
pub mod view;
