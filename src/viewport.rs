//! Vertical scroll state and smooth `scrollIntoView`.
//!
//! `Viewport` tracks the window's scroll offset, clamped to
//! `[0, content_height - viewport_height]`. Smooth scrolls are animations
//! sampled by the page at frame deadlines; each animation carries a
//! generation so frames scheduled for a superseded animation do nothing.

use std::time::Duration;

use crate::dom::node::LayoutBox;

/// How `scroll_into_view` moves the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Animated over the configured duration.
    Smooth,
    /// Jump straight to the target offset.
    #[default]
    Instant,
}

/// Which edge of the viewport the target is aligned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollAlign {
    #[default]
    Start,
    Center,
    End,
    /// Scroll the least distance that brings the target fully into view.
    Nearest,
}

/// Options for [`Viewport::scroll_into_view`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollIntoViewOptions {
    pub behavior: ScrollBehavior,
    pub block: ScrollAlign,
}

impl ScrollIntoViewOptions {
    /// `{ behavior: 'smooth', block: 'start' }`
    pub fn smooth_start() -> Self {
        Self {
            behavior: ScrollBehavior::Smooth,
            block: ScrollAlign::Start,
        }
    }
}

/// Result of a `scroll_into_view` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// Already at the target offset; nothing moves.
    InPlace,
    /// The offset changed immediately.
    Jumped,
    /// An animation started; sample it with this generation.
    Animating { generation: u64 },
}

/// Result of sampling an animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameStep {
    /// The offset moved during this frame.
    pub moved: bool,
    /// The animation reached its target and was cleared.
    pub finished: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct ScrollAnimation {
    from: i32,
    to: i32,
    started: Duration,
    duration: Duration,
    generation: u64,
}

/// The window's vertical scroll position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewport {
    scroll_y: i32,
    content_height: i32,
    viewport_height: i32,
    animation: Option<ScrollAnimation>,
    generation: u64,
}

impl Viewport {
    /// Create a viewport scrolled to the top.
    pub fn new(content_height: i32, viewport_height: i32) -> Self {
        Self {
            scroll_y: 0,
            content_height: content_height.max(0),
            viewport_height: viewport_height.max(0),
            animation: None,
            generation: 0,
        }
    }

    /// Current vertical offset (`window.scrollY`).
    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    pub fn viewport_height(&self) -> i32 {
        self.viewport_height
    }

    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    /// `max(0, content_height - viewport_height)`.
    pub fn max_scroll(&self) -> i32 {
        (self.content_height - self.viewport_height).max(0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Jump to an absolute offset, clamped. Cancels any running animation.
    ///
    /// Returns whether the offset changed.
    pub fn scroll_to(&mut self, y: i32) -> bool {
        self.cancel_animation();
        self.set_offset(y)
    }

    /// Jump by a relative delta, clamped. Cancels any running animation.
    pub fn scroll_by(&mut self, dy: i32) -> bool {
        self.scroll_to(self.scroll_y.saturating_add(dy))
    }

    /// Update the viewport height and re-clamp the offset.
    pub fn set_viewport_height(&mut self, height: i32) -> bool {
        self.viewport_height = height.max(0);
        self.set_offset(self.scroll_y)
    }

    /// The clamped offset that aligns `target` as requested.
    pub fn target_offset(&self, target: LayoutBox, align: ScrollAlign) -> i32 {
        let raw = match align {
            ScrollAlign::Start => target.top,
            ScrollAlign::Center => target.top + target.height / 2 - self.viewport_height / 2,
            ScrollAlign::End => target.bottom() - self.viewport_height,
            ScrollAlign::Nearest => {
                let view_bottom = self.scroll_y + self.viewport_height;
                if target.top >= self.scroll_y && target.bottom() <= view_bottom {
                    self.scroll_y
                } else if target.top < self.scroll_y || target.height > self.viewport_height {
                    target.top
                } else {
                    target.bottom() - self.viewport_height
                }
            }
        };
        raw.clamp(0, self.max_scroll())
    }

    /// Scroll so that `target` is aligned per `options`.
    ///
    /// Smooth scrolls start an animation at `now` lasting `duration`; a new
    /// call supersedes the previous animation.
    pub fn scroll_into_view(
        &mut self,
        target: LayoutBox,
        options: ScrollIntoViewOptions,
        now: Duration,
        duration: Duration,
    ) -> ScrollOutcome {
        let to = self.target_offset(target, options.block);

        match options.behavior {
            ScrollBehavior::Smooth if to != self.scroll_y && !duration.is_zero() => {
                self.generation += 1;
                self.animation = Some(ScrollAnimation {
                    from: self.scroll_y,
                    to,
                    started: now,
                    duration,
                    generation: self.generation,
                });
                ScrollOutcome::Animating {
                    generation: self.generation,
                }
            }
            _ => {
                self.cancel_animation();
                if self.set_offset(to) {
                    ScrollOutcome::Jumped
                } else {
                    ScrollOutcome::InPlace
                }
            }
        }
    }

    /// Advance the animation with `generation` to time `now`.
    ///
    /// Returns `None` if that animation is no longer running.
    pub fn sample(&mut self, generation: u64, now: Duration) -> Option<FrameStep> {
        let anim = self.animation.as_ref().filter(|a| a.generation == generation)?;

        let elapsed = now.saturating_sub(anim.started);
        let t = (elapsed.as_secs_f64() / anim.duration.as_secs_f64()).min(1.0);
        let finished = t >= 1.0;
        let y = if finished {
            anim.to
        } else {
            let delta = f64::from(anim.to - anim.from);
            anim.from + (delta * ease_in_out(t)).round() as i32
        };

        if finished {
            self.animation = None;
        }
        let moved = self.set_offset(y);
        Some(FrameStep { moved, finished })
    }

    fn cancel_animation(&mut self) {
        if self.animation.take().is_some() {
            self.generation += 1;
        }
    }

    fn set_offset(&mut self, y: i32) -> bool {
        let clamped = y.clamp(0, self.max_scroll());
        let changed = clamped != self.scroll_y;
        self.scroll_y = clamped;
        changed
    }
}

/// Cubic ease-in-out on `t` in `[0, 1]`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
