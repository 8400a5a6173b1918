//! Page: the loaded document plus the state the browser keeps around it.
//!
//! [`Page`] ties together the document, the viewport, the deferred-task
//! scheduler, the event queue and the [`UiController`]. Everything runs on
//! one thread: an input is applied, the events it raises are dispatched to
//! the behaviors, and the call returns once the queue is empty. Time only
//! moves through [`Page::advance`] (headless) or [`Page::run`] (tokio).

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use crate::behavior::UiController;
use crate::dom::node::NodeId;
use crate::dom::tree::Dom;
use crate::event::{Event, EventDispatcher, PageInput};
use crate::selector::SelectorError;
use crate::style::Transition;
use crate::timer::{Scheduler, Task};
use crate::viewport::{ScrollIntoViewOptions, ScrollOutcome, Viewport};

// ---------------------------------------------------------------------------
// PageConfig
// ---------------------------------------------------------------------------

/// Tunables for a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    /// Window inner height in pixels.
    pub viewport_height: i32,
    /// Scroll offset above which the navbar gets the pronounced shadow.
    pub shadow_threshold: i32,
    /// Delay between resetting a shown card's opacity and fading it in.
    pub fade_delay: Duration,
    /// Transition installed on every recipe card.
    pub fade_transition: Transition,
    /// Length of a smooth scroll animation.
    pub smooth_scroll_duration: Duration,
    /// Interval between smooth scroll frames.
    pub frame_interval: Duration,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_height: 800,
            shadow_threshold: 50,
            fade_delay: Duration::from_millis(10),
            fade_transition: Transition::opacity_fade(),
            smooth_scroll_duration: Duration::from_millis(300),
            frame_interval: Duration::from_millis(16),
        }
    }
}

impl PageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_viewport_height(mut self, height: i32) -> Self {
        self.viewport_height = height;
        self
    }

    pub fn with_shadow_threshold(mut self, threshold: i32) -> Self {
        self.shadow_threshold = threshold;
        self
    }

    pub fn with_fade_delay(mut self, delay: Duration) -> Self {
        self.fade_delay = delay;
        self
    }

    pub fn with_fade_transition(mut self, transition: Transition) -> Self {
        self.fade_transition = transition;
        self
    }

    pub fn with_smooth_scroll_duration(mut self, duration: Duration) -> Self {
        self.smooth_scroll_duration = duration;
        self
    }

    /// Frame interval; zero is bumped to 1ms so animations always progress.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval.max(Duration::from_millis(1));
        self
    }
}

// ---------------------------------------------------------------------------
// PageContext
// ---------------------------------------------------------------------------

/// What a behavior may touch while handling an event.
pub struct PageContext<'a> {
    pub dom: &'a mut Dom,
    pub viewport: &'a mut Viewport,
    pub scheduler: &'a mut Scheduler,
    pub events: &'a mut EventDispatcher,
    pub config: &'a PageConfig,
}

impl PageContext<'_> {
    /// Scroll `node` into view. Smooth scrolls schedule their first frame;
    /// instant jumps raise a scroll event.
    pub fn scroll_into_view(&mut self, node: NodeId, options: ScrollIntoViewOptions) -> ScrollOutcome {
        let Some(layout) = self.dom.get(node).map(|data| data.layout) else {
            return ScrollOutcome::InPlace;
        };
        let outcome = self.viewport.scroll_into_view(
            layout,
            options,
            self.scheduler.now(),
            self.config.smooth_scroll_duration,
        );
        match outcome {
            ScrollOutcome::Animating { generation } => {
                self.scheduler
                    .schedule(self.config.frame_interval, Task::ScrollFrame { generation });
            }
            ScrollOutcome::Jumped => self.events.push(Event::scroll()),
            ScrollOutcome::InPlace => {}
        }
        outcome
    }

    /// Jump to `y`, raising a scroll event if the offset changed.
    pub fn scroll_to(&mut self, y: i32) -> bool {
        let moved = self.viewport.scroll_to(y);
        if moved {
            self.events.push(Event::scroll());
        }
        moved
    }
}

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A loaded page with its behaviors attached.
#[derive(Debug)]
pub struct Page {
    dom: Dom,
    viewport: Viewport,
    scheduler: Scheduler,
    events: EventDispatcher,
    controller: UiController,
    config: PageConfig,
    location: Option<String>,
}

impl Page {
    /// Load a document and attach the UI controller to it.
    pub fn load(dom: Dom, config: PageConfig) -> Self {
        let viewport = Viewport::new(dom.content_height(), config.viewport_height);
        let mut page = Self {
            dom,
            viewport,
            scheduler: Scheduler::new(),
            events: EventDispatcher::new(),
            controller: UiController::standard(),
            config,
            location: None,
        };
        page.with_context(|controller, ctx| controller.attach(ctx));
        page.flush_events();
        tracing::debug!(
            nodes = page.dom.len(),
            content_height = page.viewport.content_height(),
            "page loaded"
        );
        page
    }

    pub fn dom(&self) -> &Dom {
        &self.dom
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn controller(&self) -> &UiController {
        &self.controller
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Time since load.
    pub fn now(&self) -> Duration {
        self.scheduler.now()
    }

    /// Deferred tasks not yet fired.
    pub fn pending_tasks(&self) -> usize {
        self.scheduler.pending()
    }

    /// The href of the last link whose default navigation ran.
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// The fragment of [`location`](Self::location), with its `#`.
    pub fn location_hash(&self) -> Option<&str> {
        self.location().filter(|href| href.starts_with('#'))
    }

    // ── Input ────────────────────────────────────────────────────────

    /// Click `node` and return the event after dispatch.
    pub fn click(&mut self, node: NodeId) -> Event {
        let mut event = Event::click(node);
        let location = self.with_context(|controller, ctx| {
            controller.handle(&mut event, ctx);
            if event.default_prevented() {
                None
            } else {
                default_action(ctx, node)
            }
        });
        if location.is_some() {
            self.location = location;
        }
        self.flush_events();
        event
    }

    /// Click the first element matching `selector`.
    ///
    /// `Ok(None)` when nothing matches.
    pub fn click_selector(&mut self, selector: &str) -> Result<Option<Event>, SelectorError> {
        Ok(self
            .dom
            .query_selector(selector)?
            .map(|node| self.click(node)))
    }

    /// Scroll the window to `y` (clamped). Returns whether it moved.
    pub fn scroll_to(&mut self, y: i32) -> bool {
        let moved = self.with_context(|_, ctx| ctx.scroll_to(y));
        self.flush_events();
        moved
    }

    pub fn scroll_by(&mut self, dy: i32) -> bool {
        let y = self.viewport.scroll_y().saturating_add(dy);
        self.scroll_to(y)
    }

    /// Change the window height; a re-clamped offset raises a scroll event.
    pub fn resize(&mut self, height: i32) {
        self.config.viewport_height = height;
        if self.viewport.set_viewport_height(height) {
            self.events.push(Event::scroll());
        }
        self.flush_events();
    }

    /// Apply one user input.
    pub fn apply(&mut self, input: PageInput) {
        match input {
            PageInput::Click(node) => {
                self.click(node);
            }
            PageInput::ClickSelector(selector) => match self.click_selector(&selector) {
                Ok(Some(_)) => {}
                Ok(None) => tracing::debug!(%selector, "nothing to click"),
                Err(err) => tracing::warn!(%selector, %err, "invalid click selector"),
            },
            PageInput::ScrollTo(y) => {
                self.scroll_to(y);
            }
            PageInput::ScrollBy(dy) => {
                self.scroll_by(dy);
            }
            PageInput::Resize { height } => self.resize(height),
        }
    }

    // ── Time ─────────────────────────────────────────────────────────

    /// Let `duration` pass, firing every task that falls due.
    pub fn advance(&mut self, duration: Duration) {
        self.advance_to(self.scheduler.now() + duration);
    }

    /// Fire every task due at or before `t`, then set the clock to `t`.
    pub fn advance_to(&mut self, t: Duration) {
        while let Some(task) = self.scheduler.pop_due(t) {
            self.run_task(task);
        }
        self.scheduler.advance_clock(t);
    }

    /// Fire pending tasks until none remain (fades done, scrolls settled).
    pub fn run_until_idle(&mut self) {
        while let Some(due) = self.scheduler.next_due() {
            self.advance_to(due);
        }
    }

    /// Drive the page from a channel of inputs in real time.
    ///
    /// Deferred tasks fire at their deadlines measured from when the loop
    /// starts. Returns the page once the channel is closed and no tasks are
    /// pending.
    pub async fn run(mut self, mut inputs: mpsc::Receiver<PageInput>) -> Self {
        let origin = Instant::now()
            .checked_sub(self.scheduler.now())
            .unwrap_or_else(Instant::now);
        let mut open = true;

        while open || !self.scheduler.is_idle() {
            let next = self.scheduler.next_due();
            let deadline = origin + next.unwrap_or_default();

            tokio::select! {
                input = inputs.recv(), if open => {
                    self.advance_to(origin.elapsed());
                    match input {
                        Some(input) => self.apply(input),
                        None => {
                            tracing::debug!("input channel closed");
                            open = false;
                        }
                    }
                }
                _ = sleep_until(deadline), if next.is_some() => {
                    self.advance_to(origin.elapsed().max(next.unwrap_or_default()));
                }
            }
        }

        self
    }

    // ── Internals ────────────────────────────────────────────────────

    fn with_context<R>(
        &mut self,
        f: impl FnOnce(&mut UiController, &mut PageContext<'_>) -> R,
    ) -> R {
        let mut ctx = PageContext {
            dom: &mut self.dom,
            viewport: &mut self.viewport,
            scheduler: &mut self.scheduler,
            events: &mut self.events,
            config: &self.config,
        };
        f(&mut self.controller, &mut ctx)
    }

    /// Dispatch queued events until the queue is empty.
    fn flush_events(&mut self) {
        while let Some(mut event) = self.events.pop() {
            self.with_context(|controller, ctx| controller.handle(&mut event, ctx));
        }
    }

    fn run_task(&mut self, task: Task) {
        tracing::trace!(?task, now = ?self.scheduler.now(), "task fired");
        match task {
            Task::SetOpacity { node, opacity } => {
                if let Some(data) = self.dom.get_mut(node) {
                    data.style.set_opacity(opacity);
                }
            }
            Task::ScrollFrame { generation } => {
                let now = self.scheduler.now();
                if let Some(step) = self.viewport.sample(generation, now) {
                    if !step.finished {
                        self.scheduler
                            .schedule(self.config.frame_interval, Task::ScrollFrame { generation });
                    }
                    if step.moved {
                        self.events.push(Event::scroll());
                    }
                }
            }
        }
        self.flush_events();
    }
}

/// The browser's own handling of a click nobody prevented: following a link.
///
/// Fragment links jump instantly to the element with that id (or the top
/// for `#` and `#top`). Returns the followed href.
fn default_action(ctx: &mut PageContext<'_>, target: NodeId) -> Option<String> {
    let link = EventDispatcher::bubble_path(ctx.dom, target)
        .into_iter()
        .find(|&node| {
            ctx.dom
                .get(node)
                .is_some_and(|data| data.tag == "a" && data.attr("href").is_some())
        })?;
    let href = ctx.dom.get(link)?.attr("href")?.into_owned();

    if let Some(fragment) = href.strip_prefix('#') {
        if fragment.is_empty() || fragment.eq_ignore_ascii_case("top") {
            ctx.scroll_to(0);
        } else if let Some(destination) = ctx.dom.query_by_id(fragment) {
            ctx.scroll_into_view(destination, ScrollIntoViewOptions::default());
        }
    }
    tracing::debug!(%href, "followed link");
    Some(href)
}

// ===========================================================================
// Tests
// ===========================================================================
