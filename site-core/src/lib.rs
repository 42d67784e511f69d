//! # touchstone-core
//!
//! Browser-free core of the Touchstone marketing site.
//!
//! Everything the Leptos front-end needs that is not markup lives here, so it
//! can be exercised with plain `cargo test` on the host target:
//!
//! - [`carousel`] - testimonial rotation state and the timer commands it emits
//! - [`timeline`] - deterministic timer host driving a [`carousel::Carousel`]
//! - [`timers`] - armed-timer bookkeeping shared by both carousel hosts
//! - [`contact`] - contact form values, validation and submission status
//! - [`relay`] - the form-relay payload and the [`relay::FormRelay`] seam
//! - [`metadata`] - per-page document head tags
//! - [`host`] - the [`host::HostEnvironment`] seam over `window`/`document`
//! - [`config`] / [`content`] - embedded site configuration and copy
//!
//! ## Quick Start
//!
//! ```rust
//! use touchstone_core::carousel::{Carousel, CarouselConfig};
//! use touchstone_core::timeline::Timeline;
//! use std::time::Duration;
//!
//! let mut carousel = Carousel::new(6, CarouselConfig::default());
//! let mut timeline = Timeline::mount(&carousel);
//!
//! timeline.advance(&mut carousel, Duration::from_secs(5));
//! assert_eq!(carousel.start_index(), 1);
//!
//! timeline.teardown();
//! timeline.advance(&mut carousel, Duration::from_secs(60));
//! assert_eq!(carousel.start_index(), 1);
//! ```
//!
//! ---
//!
//! Touchstone Digital Solutions (c)2025

pub mod carousel;
pub mod config;
pub mod contact;
pub mod content;
pub mod error;
pub mod host;
pub mod metadata;
pub mod relay;
pub mod timeline;
pub mod timers;

pub use error::SiteError;
