//! # recipe-page
//!
//! A headless model of a static recipe-listing page and the small amount of
//! script that makes it interactive.
//!
//! The page is a slotmap-backed document with fixed layout. On load a
//! [`UiController`](behavior::UiController) attaches three behaviors: smooth
//! scrolling for in-page links, category filtering of recipe cards with a
//! fade-in, and a navbar shadow that deepens once the window scrolls past a
//! threshold. Time is virtual, so every behavior can be driven and asserted
//! deterministically; [`Page::run`](page::Page::run) drives the same page
//! from a tokio channel in real time.
//!
//! ## Core Systems
//!
//! - **[`dom`]**: document arena, tree walks and selector queries
//! - **[`selector`]**: selector tokenizer, parser and matcher
//! - **[`style`]**: typed inline style properties
//! - **[`viewport`]**: scroll offset, clamping and smooth `scroll_into_view`
//! - **[`timer`]**: deferred one-shot tasks on a virtual clock
//! - **[`event`]**: page events, the dispatch queue and bubbling
//! - **[`behavior`]**: the controller and its anchor, filter and navbar behaviors
//! - **[`page`]**: `Page` and `PageConfig`
//! - **[`recipe`]**: CookLang recipes, recipe pages and listing documents
//! - **[`testing`]**: headless `Pilot` and document outlines

// Foundation
pub mod dom;
pub mod selector;
pub mod style;

// Scrolling and time
pub mod timer;
pub mod viewport;

// Events and behaviors
pub mod behavior;
pub mod event;

// Page
pub mod page;

// Content
pub mod recipe;

pub mod testing;

pub use page::{Page, PageConfig};
