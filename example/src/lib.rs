//! Scripted demo of the infinite animal carousel.
//!
//! There is no window here: a [`DemoHost`] plays the part of a platform
//! shell, reporting layout sizes, replaying finger movements and ticking the
//! carousel at 60 frames per second while the frames are logged.

pub mod animals;

use std::time::{Duration, Instant};

use carousel_components::{CarouselArgs, ConfigurationError, InfiniteCarousel};
use carousel_ui::{Px, PxPosition, PxSize, State, TouchEvent};
use tracing::{debug, info, instrument};

use crate::animals::{AnimalCard, animal_pages};

const FRAME: Duration = Duration::from_micros(16_667);
const CONTAINER: PxSize = PxSize::from_raw(360, 420);

/// Simulated platform shell driving a shared carousel.
pub struct DemoHost {
    carousel: State<InfiniteCarousel<AnimalCard>>,
    now: Instant,
    next_touch: u64,
}

impl DemoHost {
    /// Builds the carousel and reports the initial layout.
    pub fn new() -> Result<Self, ConfigurationError> {
        let carousel = InfiniteCarousel::new(CarouselArgs::default(), animal_pages())?;
        let args = carousel.args();
        info!(
            drag_sensitivity = args.drag_sensitivity,
            animation_ms = args.animation_duration.as_millis() as u64,
            easing = ?args.easing,
            "carousel configured"
        );
        let host = Self {
            carousel: State::new(carousel),
            now: Instant::now(),
            next_touch: 0,
        };
        host.layout(CONTAINER);
        Ok(host)
    }

    /// Shared handle to the carousel, as an input handler would hold it.
    pub fn carousel(&self) -> State<InfiniteCarousel<AnimalCard>> {
        self.carousel.clone()
    }

    /// Reports a container size and a content strip that fits the pages.
    pub fn layout(&self, container: PxSize) {
        self.carousel.with_mut(|carousel| {
            carousel.on_container_layout(container);
            let strip = Px::saturating_from_f32(carousel.strip_width());
            carousel.on_content_layout(PxSize::new(strip, container.height));
        });
    }

    /// Drags a finger horizontally by `dx` over `frames` frames, then lifts it.
    #[instrument(skip(self))]
    pub fn swipe(&mut self, dx: i32, frames: u32) {
        let id = self.next_touch;
        self.next_touch += 1;
        let start = PxPosition::new(CONTAINER.width / 2, CONTAINER.height / 2);

        self.touch(TouchEvent::started(id, start));
        let frames = frames.max(1);
        for step in 1..=frames {
            let travelled = Px::new(dx).mul_f32(step as f32 / frames as f32);
            self.touch(TouchEvent::moved(id, start.offset(travelled, Px::ZERO)));
            self.advance(1);
        }
        self.touch(TouchEvent::ended(id, start.offset(Px::new(dx), Px::ZERO)));
    }

    /// Puts a finger down, moves it and hands the touch to another responder.
    #[instrument(skip(self))]
    pub fn interrupted_swipe(&mut self, dx: i32) {
        let id = self.next_touch;
        self.next_touch += 1;
        let start = PxPosition::new(CONTAINER.width / 2, CONTAINER.height / 2);
        let end = start.offset(Px::new(dx), Px::ZERO);
        self.touch(TouchEvent::started(id, start));
        self.touch(TouchEvent::moved(id, end));
        self.touch(TouchEvent::cancelled(id, end));
    }

    /// Ticks the carousel for `frames` frames.
    pub fn advance(&mut self, frames: u32) {
        for _ in 0..frames {
            self.now += FRAME;
            let now = self.now;
            self.carousel.with_mut(|carousel| carousel.tick(now));
            self.log_frame();
        }
    }

    /// Ticks until no animation is running.
    pub fn settle(&mut self) {
        while self.carousel.with(|carousel| carousel.is_animating()) {
            self.advance(1);
        }
    }

    /// Name of the animal currently in the center.
    pub fn centered(&self) -> &'static str {
        self.carousel.with(|carousel| {
            let index = carousel.current_canonical_page();
            animals::ANIMALS[index].name
        })
    }

    fn touch(&self, event: TouchEvent) {
        let now = self.now;
        self.carousel
            .with_mut(|carousel| carousel.handle_touch(event, now));
    }

    fn log_frame(&self) {
        self.carousel.with(|carousel| {
            let scene = carousel.scene();
            let visible: Vec<_> = scene
                .slots
                .iter()
                .filter(|slot| slot.content.scale > animals::MIN_SCALE)
                .map(|slot| (slot.content.animal.name, slot.content.scale))
                .collect();
            debug!(
                translate_x = scene.translate_x,
                phase = ?carousel.phase(),
                ?visible,
                "frame"
            );
        });
    }
}

/// Initializes logging, honouring `RUST_LOG` when it is set.
pub fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(
            "error,carousel_components=debug,example=info",
        ) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

/// Plays the scripted session: a lap forwards, a lap backwards, an
/// interrupted drag and a rotation-style resize.
pub fn run() -> Result<(), ConfigurationError> {
    let mut host = DemoHost::new()?;
    info!(centered = host.centered(), "carousel ready");

    for _ in 0..animals::ANIMALS.len() {
        host.swipe(-240, 12);
        host.settle();
        info!(centered = host.centered(), "swiped left");
    }

    for _ in 0..animals::ANIMALS.len() {
        host.swipe(240, 12);
        host.settle();
        info!(centered = host.centered(), "swiped right");
    }

    host.interrupted_swipe(-90);
    info!(centered = host.centered(), "drag interrupted");
    host.swipe(0, 1);
    host.settle();

    host.layout(PxSize::from_raw(CONTAINER.height.raw(), CONTAINER.width.raw()));
    info!(centered = host.centered(), "container rotated");

    let now = host.now;
    host.carousel()
        .with_mut(|carousel| carousel.scroll_to_page(2, now));
    host.settle();
    info!(centered = host.centered(), "scrolled programmatically");
    Ok(())
}
