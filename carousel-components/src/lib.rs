//! Gesture-driven components built on `carousel-ui`.
//!
//! # Usage
//!
//! Build an [`InfiniteCarousel`](infinite_carousel::InfiniteCarousel), report
//! layout sizes as the host measures them, forward touch events and tick it
//! once per frame.
//!
//! ```
//! use std::time::{Duration, Instant};
//!
//! use carousel_components::infinite_carousel::{CarouselArgs, InfiniteCarousel, page};
//! use carousel_ui::{Px, PxPosition, PxSize, TouchEvent};
//!
//! let pages = ["Leon", "Cat", "Elephant", "Unicorn"]
//!     .map(|name| page(move |_| name))
//!     .to_vec();
//! let mut carousel = InfiniteCarousel::new(CarouselArgs::default(), pages).unwrap();
//! carousel.on_container_layout(PxSize::from_raw(300, 300));
//! carousel.on_content_layout(PxSize::from_raw(1200, 300));
//!
//! let now = Instant::now();
//! let finger = |x| PxPosition::new(Px::new(x), Px::new(150));
//! carousel.handle_touch(TouchEvent::started(0, finger(250)), now);
//! carousel.handle_touch(TouchEvent::moved(0, finger(50)), now);
//! carousel.handle_touch(TouchEvent::ended(0, finger(50)), now);
//! carousel.tick(now + Duration::from_millis(100));
//!
//! assert_eq!(carousel.current_canonical_page(), 1);
//! assert_eq!(carousel.scene().slots.len(), 8);
//! ```
#![deny(missing_docs, clippy::unwrap_used)]

pub mod infinite_carousel;

pub use infinite_carousel::{CarouselArgs, ConfigurationError, InfiniteCarousel};
