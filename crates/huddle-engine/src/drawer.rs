//! Side drawer state machine.
//!
//! The drawer is either [`DrawerState::Closed`] or [`DrawerState::Open`].
//! Opening commits `Open` immediately and then animates the drawer offset
//! and overlay opacity toward their open targets. Closing animates back and
//! commits `Closed` only once the animation finishes, so the drawer reports
//! `Open` for the whole closing animation.
//!
//! Time is supplied by the caller through [`Drawer::advance`].

use std::time::Duration;

/// Observable drawer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    /// Off-screen, overlay transparent, not interactive.
    #[default]
    Closed,
    /// On-screen, overlay dimmed, tapping the overlay closes.
    Open,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Opening,
    Closing,
}

#[derive(Debug, Clone, Copy)]
struct Animation {
    direction: Direction,
    from: f32,
    elapsed: Duration,
}

impl Animation {
    fn target(&self) -> f32 {
        match self.direction {
            Direction::Opening => 1.0,
            Direction::Closing => 0.0,
        }
    }
}

/// Drawer with its open/close animation.
#[derive(Debug, Clone)]
pub struct Drawer {
    state: DrawerState,
    /// 0.0 = fully off-screen, 1.0 = fully on-screen.
    offset: f32,
    animation: Option<Animation>,
    duration: Duration,
    max_overlay: f32,
}

impl Drawer {
    /// Create a closed drawer.
    pub fn new(duration: Duration, max_overlay: f32) -> Self {
        Self {
            state: DrawerState::Closed,
            offset: 0.0,
            animation: None,
            duration,
            max_overlay: max_overlay.clamp(0.0, 1.0),
        }
    }

    pub fn state(&self) -> DrawerState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Whether the drawer is animating toward closed.
    pub fn is_closing(&self) -> bool {
        matches!(
            self.animation,
            Some(Animation {
                direction: Direction::Closing,
                ..
            })
        )
    }

    /// Whether the overlay accepts taps.
    pub fn is_interactive(&self) -> bool {
        self.is_open()
    }

    /// Visible fraction of the drawer, 0.0 to 1.0.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Current overlay opacity, 0.0 to the configured maximum.
    pub fn overlay_opacity(&self) -> f32 {
        self.offset * self.max_overlay
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Open the drawer. Reverses a closing animation; no-op if already opening or open.
    pub fn open(&mut self) {
        if self.is_open() && !self.is_closing() {
            return;
        }
        self.state = DrawerState::Open;
        self.start(Direction::Opening);
    }

    /// Close the drawer. No-op when closed or already closing.
    pub fn close(&mut self) {
        if !self.is_open() || self.is_closing() {
            return;
        }
        self.start(Direction::Closing);
    }

    /// Open if closed or closing, otherwise close.
    pub fn toggle(&mut self) {
        if self.is_open() && !self.is_closing() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handle a tap on the dimmed overlay.
    pub fn tap_overlay(&mut self) {
        if self.is_interactive() {
            self.close();
        }
    }

    /// Step the animation forward by `elapsed`.
    pub fn advance(&mut self, elapsed: Duration) {
        let Some(mut animation) = self.animation else {
            return;
        };

        animation.elapsed += elapsed;
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (animation.elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
        };

        let target = animation.target();
        self.offset = animation.from + (target - animation.from) * progress;

        if animation.elapsed >= self.duration {
            self.finish(animation.direction);
        } else {
            self.animation = Some(animation);
        }
    }

    fn start(&mut self, direction: Direction) {
        self.animation = Some(Animation {
            direction,
            from: self.offset,
            elapsed: Duration::ZERO,
        });
        if self.duration.is_zero() {
            self.finish(direction);
        }
    }

    fn finish(&mut self, direction: Direction) {
        self.animation = None;
        match direction {
            Direction::Opening => self.offset = 1.0,
            Direction::Closing => {
                self.offset = 0.0;
                self.state = DrawerState::Closed;
            }
        }
    }
}
