use std::time::Duration;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::carousel::config::CarouselConfig;
use crate::carousel::state::{CarouselState, Direction};
use crate::carousel::view::CarouselView;
use crate::error::Result;
use crate::input::{Command, HoverChange, Key, dispatch_key};
use crate::scheduler::{Clock, Scheduler, TimerKind};

/// The carousel controller: pure state plus the timers that drive it.
///
/// Every public operation reads the clock once and then behaves as if it ran
/// at that instant. Timer ticks are replayed at their own due instants by
/// [`Carousel::tick`].
pub struct Carousel<C: Clock, R: Rng> {
    state: CarouselState,
    scheduler: Scheduler,
    clock: C,
    rng: R,
    view: CarouselView,
}

impl<C: Clock, R: Rng> Carousel<C, R> {
    pub fn new(config: &CarouselConfig, clock: C, rng: R) -> Result<Self> {
        let config = config.clone().validate()?;
        let mut state = CarouselState::new(config.slide_count, config.progress_step())?;
        state.set_playing(config.start_playing);
        let view = CarouselView::project(&state);
        Ok(Self {
            state,
            scheduler: Scheduler::new(config.slide_interval, config.progress_tick),
            clock,
            rng,
            view,
        })
    }

    /// Starts the timers (when playing) and renders the first slide.
    pub fn initialize(&mut self) -> &CarouselView {
        let now = self.clock.now();
        info!(
            slides = self.state.total(),
            playing = self.state.is_playing(),
            "carousel initialized"
        );
        if self.state.autoplay_active() {
            self.scheduler.start(TimerKind::Autoplay, now);
        }
        self.render_at(now)
    }

    pub fn state(&self) -> &CarouselState {
        &self.state
    }

    pub fn view(&self) -> &CarouselView {
        &self.view
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn advance(&mut self, direction: Direction) {
        let now = self.clock.now();
        self.advance_at(direction, now);
    }

    pub fn go_to(&mut self, index: usize) -> Result<()> {
        let now = self.clock.now();
        self.state.go_to(index)?;
        debug!(index, "go to slide");
        self.slide_changed_at(now);
        Ok(())
    }

    pub fn toggle_playback(&mut self) -> bool {
        let now = self.clock.now();
        let playing = self.state.toggle_playing();
        if playing {
            self.restart_timers_at(now);
        } else {
            self.scheduler.cancel_all();
            self.refresh_view();
        }
        info!(playing, "playback toggled");
        playing
    }

    pub fn shuffle(&mut self) {
        let now = self.clock.now();
        self.state.shuffle(&mut self.rng);
        debug!(order = ?self.state.order(), "slides shuffled");
        self.slide_changed_at(now);
    }

    pub fn toggle_help(&mut self) -> bool {
        let visible = self.state.toggle_help();
        self.refresh_view();
        visible
    }

    /// Resets the progress bar and projects the current state.
    pub fn render(&mut self) -> &CarouselView {
        let now = self.clock.now();
        self.render_at(now)
    }

    pub fn pointer_enter(&mut self) {
        if self.state.suspend_for_hover() {
            debug!("autoplay suspended by hover");
            self.scheduler.cancel(TimerKind::Autoplay);
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.state.resume_from_hover() {
            debug!("autoplay resumed after hover");
            let now = self.clock.now();
            self.restart_timers_at(now);
        }
    }

    pub fn hover(&mut self, change: HoverChange) {
        match change {
            HoverChange::Entered => self.pointer_enter(),
            HoverChange::Left => self.pointer_leave(),
        }
    }

    pub fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Advance(direction) => self.advance(direction),
            Command::GoTo(index) => self.go_to(index)?,
            Command::TogglePlayback => {
                self.toggle_playback();
            }
            Command::Shuffle => self.shuffle(),
            Command::ToggleHelp => {
                self.toggle_help();
            }
        }
        Ok(())
    }

    /// Keyboard entry point. Unmapped keys do nothing.
    pub fn handle_key(&mut self, key: Key) {
        let Some(command) = dispatch_key(key, self.state.total()) else {
            return;
        };
        if let Err(e) = self.apply(command) {
            warn!("ignored key {:?}: {}", key, e);
        }
    }

    /// Replays every timer tick that came due since the last call.
    pub fn tick(&mut self) {
        let now = self.clock.now();
        while let Some((kind, at)) = self.scheduler.pop_due(now) {
            match kind {
                TimerKind::Autoplay => self.advance_at(Direction::Next, at),
                TimerKind::Progress => {
                    self.state.tick_progress();
                    self.refresh_view();
                }
            }
        }
    }

    fn advance_at(&mut self, direction: Direction, now: Duration) {
        self.state.advance(direction);
        debug!(index = self.state.current_index(), ?direction, "advanced");
        self.slide_changed_at(now);
    }

    fn slide_changed_at(&mut self, now: Duration) {
        if self.state.autoplay_active() {
            self.scheduler.start(TimerKind::Autoplay, now);
        }
        self.render_at(now);
    }

    fn restart_timers_at(&mut self, now: Duration) {
        self.scheduler.start(TimerKind::Autoplay, now);
        self.render_at(now);
    }

    fn render_at(&mut self, now: Duration) -> &CarouselView {
        self.state.reset_progress();
        self.scheduler.cancel(TimerKind::Progress);
        if self.state.is_playing() {
            self.scheduler.start(TimerKind::Progress, now);
        }
        self.refresh_view()
    }

    fn refresh_view(&mut self) -> &CarouselView {
        self.view = CarouselView::project(&self.state);
        &self.view
    }
}
