// SPDX-License-Identifier: MPL-2.0
//! Task arbitration.
//!
//! The `Hud` session decides what is on screen. It holds at most one
//! *current* task, every task whose view is still attached (in z-order), a
//! FIFO queue of deferred `Sequence` tasks and the shared backdrop.
//!
//! A task is in at most one of {attached, queued}. The current task, when
//! set, is always attached.

use super::dispatch::{Dispatcher, Inbox};
use super::request::{LoadingRequest, StatusRequest};
use super::task::{fire, Callbacks, Priority, Status, Task, TaskId};
use crate::assets::{AssetProvider, EmbeddedAssets, IconName};
use crate::config::Config;
use crate::environment::{
    resolve_anchor, Environment, Feedback, Haptics, Metrics, NoHaptics, Surface,
};
use crate::error::Result;
use crate::view::{
    ApproximateMeasurer, Backdrop, Button, Content, Icon, Indicator, Limits, OverlayView,
    Position, TextMeasurer, ViewEvent,
};
use iced::{Element, Point, Size, Subscription};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Frame interval of the tick subscription.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Messages handled by [`Hud::update`].
#[derive(Debug, Clone)]
pub enum Message {
    /// Advance animations and timers.
    Tick(Instant),
    /// The close button of a task was pressed.
    Close(TaskId),
    /// The cancel button of a task was pressed.
    Cancel(TaskId),
    /// The host surface changed size.
    Resized(Size),
}

/// One HUD session. Create it once on the UI thread and keep it in the
/// application state.
pub struct Hud {
    config: Config,
    environment: Box<dyn Environment>,
    assets: Box<dyn AssetProvider>,
    haptics: Box<dyn Haptics>,
    measurer: Box<dyn TextMeasurer>,
    current: Option<TaskId>,
    attached: Vec<Task>,
    queue: VecDeque<Task>,
    backdrop: Option<Backdrop>,
    inbox: Option<Inbox>,
}

impl std::fmt::Debug for Hud {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Hud")
            .field("current", &self.current)
            .field("attached", &self.attached)
            .field("queue", &self.queue)
            .field("backdrop", &self.backdrop)
            .finish_non_exhaustive()
    }
}

impl Hud {
    /// Creates a session anchored through `environment`.
    ///
    /// `config` is validated first. Icons come from [`EmbeddedAssets`],
    /// haptics are off and text is measured with [`ApproximateMeasurer`]
    /// until replaced with the `with_*` builders.
    #[must_use]
    pub fn new(config: Config, environment: impl Environment + 'static) -> Self {
        Self {
            config: config.validated(),
            environment: Box::new(environment),
            assets: Box::new(EmbeddedAssets),
            haptics: Box::new(NoHaptics),
            measurer: Box::new(ApproximateMeasurer::default()),
            current: None,
            attached: Vec::new(),
            queue: VecDeque::new(),
            backdrop: None,
            inbox: None,
        }
    }

    /// Resolves status and button icons through `assets`.
    #[must_use]
    pub fn with_assets(mut self, assets: impl AssetProvider + 'static) -> Self {
        self.assets = Box::new(assets);
        self
    }

    /// Plays status feedback through `haptics`.
    #[must_use]
    pub fn with_haptics(mut self, haptics: impl Haptics + 'static) -> Self {
        self.haptics = Box::new(haptics);
        self
    }

    /// Measures and wraps card text with `measurer`.
    #[must_use]
    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    /// The active style configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replaces the style configuration. Applies to subsequent requests.
    pub fn set_config(&mut self, config: Config) {
        self.config = config.validated();
    }

    /// Shows a loading indicator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAnchor`](crate::Error::NoAnchor) when no surface
    /// is available to attach to.
    pub fn show_loading(&mut self, request: LoadingRequest) -> Result<TaskId> {
        let LoadingRequest {
            surface,
            progress,
            title,
            subtitle,
            direction,
            priority,
            position,
            cancelable,
            on_cancel,
            callbacks,
        } = request;

        let content = Content {
            indicator: Indicator::Progress(progress),
            title,
            subtitle,
            direction,
            position,
            closeable: false,
            cancelable,
        };

        if let Some(id) = self.replaceable(priority, position) {
            let centered = position == Position::Center;
            let transition = self.config.transition_duration();
            let limits = Limits::from(&self.config);
            let Some(task) = self.attached.iter_mut().find(|task| task.id == id) else {
                return Ok(id);
            };
            let target = surface.filter(|_| centered).unwrap_or(task.surface);
            let metrics = Metrics::query(self.environment.as_ref(), &target);

            tracing::debug!(task = ?id, progress, "updating loading task in place");
            task.priority = priority;
            task.surface = target;
            task.background_interactive = false;
            task.view.cancel_auto_hide();
            task.duration = Duration::ZERO;
            task.cancel_action = on_cancel;
            task.callbacks.merge(callbacks);
            fire(&mut task.callbacks.will_show);
            task.view.update(
                content,
                target,
                metrics,
                &limits,
                self.measurer.as_ref(),
                transition,
            );
            if let Some(backdrop) = self.backdrop.as_mut() {
                backdrop.attach(target, self.config.background_color.into(), false);
            }
            self.settle(id);
            return Ok(id);
        }

        let target = resolve_anchor(
            self.environment.as_ref(),
            surface,
            position == Position::Center,
        )?;
        let id = TaskId::new();
        let view = self.build_view(id, content, target);
        let task = Task {
            id,
            priority,
            duration: Duration::ZERO,
            status: Status::None,
            position,
            surface: target,
            background_interactive: false,
            view,
            callbacks,
            close_action: None,
            cancel_action: on_cancel,
        };
        tracing::debug!(task = ?id, ?priority, ?position, progress, "new loading task");
        self.arbitrate(task);
        Ok(id)
    }

    /// Shows a status toast.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoAnchor`](crate::Error::NoAnchor) when no surface
    /// is available to attach to.
    pub fn show(&mut self, request: StatusRequest) -> Result<TaskId> {
        let StatusRequest {
            surface,
            status,
            title,
            subtitle,
            direction,
            duration,
            priority,
            position,
            closeable,
            on_close,
            background_interactive,
            callbacks,
        } = request;

        let duration = duration.unwrap_or_else(|| self.config.default_duration());
        let content = Content {
            indicator: self.status_indicator(status),
            title,
            subtitle,
            direction,
            position,
            closeable,
            cancelable: false,
        };

        if let Some(id) = self.replaceable(priority, position) {
            let centered = position == Position::Center;
            let transition = self.config.transition_duration();
            let limits = Limits::from(&self.config);
            let Some(task) = self.attached.iter_mut().find(|task| task.id == id) else {
                return Ok(id);
            };
            let target = surface.filter(|_| centered).unwrap_or(task.surface);
            let metrics = Metrics::query(self.environment.as_ref(), &target);

            tracing::debug!(task = ?id, ?status, "updating status task in place");
            task.status = status;
            task.priority = priority;
            task.surface = target;
            task.background_interactive = background_interactive;
            task.close_action = on_close;
            task.view.cancel_auto_hide();
            task.duration = duration;
            task.callbacks.merge(callbacks);
            fire(&mut task.callbacks.will_show);
            if let Some(feedback) = Feedback::for_status(status) {
                self.haptics.notification_occurred(feedback);
            }
            task.view.update(
                content,
                target,
                metrics,
                &limits,
                self.measurer.as_ref(),
                transition,
            );
            if let Some(backdrop) = self.backdrop.as_mut() {
                backdrop.attach(
                    target,
                    self.config.background_color.into(),
                    background_interactive,
                );
            }
            self.settle(id);
            return Ok(id);
        }

        let target = resolve_anchor(
            self.environment.as_ref(),
            surface,
            position == Position::Center,
        )?;
        let id = TaskId::new();
        let view = self.build_view(id, content, target);
        let task = Task {
            id,
            priority,
            duration,
            status,
            position,
            surface: target,
            background_interactive,
            view,
            callbacks,
            close_action: on_close,
            cancel_action: None,
        };
        tracing::debug!(task = ?id, ?priority, ?position, ?status, "new status task");
        self.arbitrate(task);
        Ok(id)
    }

    /// Hides `task`, or the current task when `None`.
    ///
    /// Hiding a queued task drops it without animation. Hiding something
    /// that is not shown is a no-op.
    pub fn hide(&mut self, task: Option<TaskId>) {
        let Some(id) = task.or(self.current) else {
            tracing::debug!("hide requested with nothing displayed");
            return;
        };
        self.hide_task(id, true);
    }

    /// Advances every transition, progress animation and timer to `now`.
    pub fn tick(&mut self, now: Instant) {
        self.drain_dispatched();

        let events: Vec<(TaskId, ViewEvent)> = self
            .attached
            .iter_mut()
            .filter_map(|task| task.view.tick(now).map(|event| (task.id, event)))
            .collect();
        for (id, event) in events {
            self.handle_event(id, event, Some(now));
        }
        self.sync_backdrop();
    }

    /// Handles a message from [`Hud::view`] or [`Hud::subscription`].
    ///
    /// Close and cancel run the task's action before hiding it.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::Tick(now) => self.tick(now),
            Message::Close(id) => {
                if let Some(task) = self.attached.iter_mut().find(|task| task.id == id) {
                    fire(&mut task.close_action);
                }
                self.hide(Some(id));
            }
            Message::Cancel(id) => {
                if let Some(task) = self.attached.iter_mut().find(|task| task.id == id) {
                    fire(&mut task.cancel_action);
                }
                self.hide(Some(id));
            }
            Message::Resized(size) => self.resize(size),
        }
    }

    /// The HUD layer, to be stacked above the application content.
    pub fn view(&self) -> Element<'_, Message> {
        crate::ui::layer::view(self)
    }

    /// Frame ticks while anything moves, a timer is pending or a
    /// dispatcher may deliver work.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_animating() || self.inbox.is_some() {
            iced::time::every(FRAME_INTERVAL).map(Message::Tick)
        } else {
            Subscription::none()
        }
    }

    /// A handle for driving this session from other threads.
    ///
    /// Must be called on the UI thread.
    pub fn dispatcher(&mut self) -> Dispatcher {
        self.inbox.get_or_insert_with(Inbox::new).dispatcher()
    }

    /// Runs jobs sent through a [`Dispatcher`]. Called by `tick`.
    pub fn drain_dispatched(&mut self) {
        while let Some(job) = self.inbox.as_mut().and_then(Inbox::try_next) {
            job(self);
        }
    }

    /// The task holding the current slot.
    #[must_use]
    pub fn current(&self) -> Option<&Task> {
        self.current.and_then(|id| self.task(id))
    }

    /// A known task, attached or queued.
    #[must_use]
    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.attached
            .iter()
            .chain(self.queue.iter())
            .find(|task| task.id == id)
    }

    /// Queued tasks, head first.
    pub fn queued(&self) -> impl Iterator<Item = &Task> {
        self.queue.iter()
    }

    /// Attached tasks, bottom to top.
    pub fn attached(&self) -> impl Iterator<Item = &Task> {
        self.attached.iter()
    }

    /// The shared backdrop, present while any task is attached.
    #[must_use]
    pub fn backdrop(&self) -> Option<&Backdrop> {
        self.backdrop.as_ref()
    }

    /// No task shown, queued or current, and no backdrop.
    #[must_use]
    pub fn is_quiescent(&self) -> bool {
        self.current.is_none()
            && self.attached.is_empty()
            && self.queue.is_empty()
            && self.backdrop.is_none()
    }

    /// Whether ticks are needed for a transition, a spinner or a timer.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.attached
            .iter()
            .any(|task| task.view.is_animating() || task.view.has_pending_timer())
    }

    /// Lifecycle callbacks of a known task, for setting them after the fact.
    pub fn callbacks_mut(&mut self, id: TaskId) -> Option<&mut Callbacks> {
        self.attached
            .iter_mut()
            .chain(self.queue.iter_mut())
            .find(|task| task.id == id)
            .map(|task| &mut task.callbacks)
    }

    /// The text measurer used for card layout.
    #[must_use]
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Looks up an icon through the session's asset provider.
    #[must_use]
    pub fn icon(&self, name: IconName) -> Option<iced::widget::svg::Handle> {
        self.assets.icon(name)
    }

    /// The topmost button under `point`, if any.
    #[must_use]
    pub fn button_at(&self, point: Point) -> Option<(TaskId, Button)> {
        self.attached
            .iter()
            .rev()
            .find_map(|task| task.view.button_at(point).map(|button| (task.id, button)))
    }

    /// The current task, if a request at `position` may update it in place.
    fn replaceable(&self, priority: Priority, position: Position) -> Option<TaskId> {
        if priority != Priority::Replace {
            return None;
        }
        let task = self.current()?;
        (task.position == position && task.view.is_showing()).then_some(task.id)
    }

    fn status_indicator(&self, status: Status) -> Indicator {
        IconName::for_status(status)
            .and_then(|name| {
                self.assets
                    .icon(name)
                    .map(|handle| Indicator::Icon(Icon { name, handle }))
            })
            .unwrap_or_default()
    }

    fn build_view(&self, id: TaskId, content: Content, surface: Surface) -> OverlayView {
        let metrics = Metrics::query(self.environment.as_ref(), &surface);
        OverlayView::new(
            id,
            content,
            surface,
            metrics,
            &Limits::from(&self.config),
            self.measurer.as_ref(),
        )
    }

    /// Applies the priority rules to a freshly built task.
    fn arbitrate(&mut self, mut task: Task) {
        match task.priority {
            Priority::Low if self.current.is_some() || !self.queue.is_empty() => {
                tracing::debug!(task = ?task.id, "low priority task discarded");
                fire(&mut task.callbacks.will_hide);
                fire(&mut task.callbacks.did_hide);
            }
            Priority::Sequence if self.current.is_some() || !self.queue.is_empty() => {
                tracing::debug!(task = ?task.id, queued = self.queue.len() + 1, "task queued");
                self.queue.push_back(task);
                self.advance_queue();
            }
            Priority::High => {
                if let Some(current) = self.current {
                    tracing::debug!(task = ?task.id, preempted = ?current, "preempting");
                    self.hide_task(current, false);
                }
                self.present(task);
            }
            _ => self.present(task),
        }
    }

    /// Attaches `task` and starts its entrance.
    fn present(&mut self, mut task: Task) {
        let id = task.id;
        if let Some(feedback) = Feedback::for_status(task.status) {
            self.haptics.notification_occurred(feedback);
        }

        let color = self.config.background_color.into();
        match self.backdrop.as_mut() {
            Some(backdrop) => backdrop.attach(task.surface, color, task.background_interactive),
            None => {
                self.backdrop = Some(Backdrop::new(
                    task.surface,
                    color,
                    task.background_interactive,
                ));
            }
        }

        fire(&mut task.callbacks.will_show);
        task.view.begin_enter(self.config.transition_duration());
        self.attached.push(task);
        self.current = Some(id);
        tracing::debug!(task = ?id, attached = self.attached.len(), "task presented");
        self.settle(id);
    }

    fn hide_task(&mut self, id: TaskId, auto_next: bool) {
        if let Some(index) = self.queue.iter().position(|task| task.id == id) {
            if let Some(mut task) = self.queue.remove(index) {
                tracing::debug!(task = ?id, "queued task dropped");
                fire(&mut task.callbacks.will_hide);
                fire(&mut task.callbacks.did_hide);
            }
            return;
        }

        let transition = self.config.transition_duration();
        let Some(task) = self.attached.iter_mut().find(|task| task.id == id) else {
            tracing::debug!(task = ?id, "hide ignored for unknown task");
            return;
        };
        if task.view.begin_exit(transition, auto_next) {
            tracing::debug!(task = ?id, auto_next, "hiding task");
            fire(&mut task.callbacks.will_hide);
            self.settle(id);
        }
    }

    /// Completes a transition that needs no time to run.
    fn settle(&mut self, id: TaskId) {
        let event = self
            .attached
            .iter_mut()
            .find(|task| task.id == id)
            .and_then(|task| task.view.settle());
        if let Some(event) = event {
            self.handle_event(id, event, None);
        }
        self.sync_backdrop();
    }

    /// Reacts to a finished transition or timer. `now` is known when the
    /// event came from a tick.
    fn handle_event(&mut self, id: TaskId, event: ViewEvent, now: Option<Instant>) {
        match event {
            ViewEvent::Shown => {
                let Some(task) = self.attached.iter_mut().find(|task| task.id == id) else {
                    return;
                };
                fire(&mut task.callbacks.did_show);
                match now {
                    Some(now) => task.view.arm_auto_hide_at(task.duration, now),
                    None => task.view.arm_auto_hide(task.duration),
                }
            }
            ViewEvent::AutoHide => {
                tracing::debug!(task = ?id, "auto-hide fired");
                self.hide_task(id, true);
            }
            ViewEvent::Hidden { auto_next } => self.finish_hide(id, auto_next),
        }
    }

    fn finish_hide(&mut self, id: TaskId, auto_next: bool) {
        let Some(index) = self.attached.iter().position(|task| task.id == id) else {
            return;
        };
        let mut task = self.attached.remove(index);
        fire(&mut task.callbacks.did_hide);
        drop(task);
        tracing::debug!(task = ?id, remaining = self.attached.len(), "task hidden");

        if self.attached.is_empty() {
            self.backdrop = None;
        }
        if auto_next {
            if self.current == Some(id) {
                self.current = None;
            }
            self.advance_queue();
        }
    }

    /// Shows the queue head when nothing is current.
    fn advance_queue(&mut self) {
        if self.current.is_some() {
            return;
        }
        if let Some(next) = self.queue.pop_front() {
            tracing::debug!(task = ?next.id, remaining = self.queue.len(), "dequeued");
            self.present(next);
        }
    }

    fn sync_backdrop(&mut self) {
        let presence = self
            .attached
            .iter()
            .map(|task| task.view.presence())
            .fold(0.0_f32, f32::max);
        if let Some(backdrop) = self.backdrop.as_mut() {
            backdrop.set_opacity(presence);
        }
    }

    fn resize(&mut self, size: Size) {
        self.environment.resize(size);
        let windows = self.environment.windows();
        let limits = Limits::from(&self.config);

        for task in &mut self.attached {
            let Some(window) = windows
                .iter()
                .find(|window| window.surface.id == task.surface.id)
            else {
                continue;
            };
            let metrics = Metrics::query(self.environment.as_ref(), &window.surface);
            task.surface = window.surface;
            task.view
                .resize(window.surface, metrics, &limits, self.measurer.as_ref());
        }
        for task in &mut self.queue {
            if let Some(window) = windows
                .iter()
                .find(|window| window.surface.id == task.surface.id)
            {
                let metrics = Metrics::query(self.environment.as_ref(), &window.surface);
                task.surface = window.surface;
                task.view
                    .resize(window.surface, metrics, &limits, self.measurer.as_ref());
            }
        }
        if let Some(backdrop) = self.backdrop.as_mut() {
            if let Some(window) = windows
                .iter()
                .find(|window| window.surface.id == backdrop.surface().id)
            {
                backdrop.set_surface(window.surface);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{StaticEnvironment, SurfaceId};
    use crate::view::Phase;
    use std::sync::{Arc, Mutex};

    const SIZE: Size = Size::new(390.0, 844.0);

    fn hud() -> Hud {
        Hud::new(Config::default(), StaticEnvironment::new(SIZE))
    }

    fn instant_hud() -> Hud {
        let config = Config {
            animated: false,
            ..Config::default()
        };
        Hud::new(config, StaticEnvironment::new(SIZE))
    }

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn new_session_is_quiescent() {
        let hud = hud();
        assert!(hud.is_quiescent());
        assert!(hud.current().is_none());
        assert!(!hud.is_animating());
    }

    #[test]
    fn custom_measurer_is_used_for_layout_and_exposed() {
        let measurer = ApproximateMeasurer {
            glyph_width: 0.9,
            line_height: 2.0,
        };
        let mut hud = hud().with_measurer(measurer);
        let block = hud.measurer().measure("Cancel", 16.0, Size::new(500.0, 100.0));
        assert_eq!(block.line_height, 32.0);

        let id = hud
            .show_loading(LoadingRequest::new(0.5).title("Cancel"))
            .expect("anchor");
        let layout = hud.task(id).expect("task").view().layout();
        assert_eq!(layout.title_text.line_height, 32.0);
    }

    #[test]
    fn first_show_creates_backdrop_and_becomes_current() {
        let mut hud = hud();
        let id = hud
            .show_loading(LoadingRequest::indeterminate())
            .expect("anchor");

        assert_eq!(hud.current().map(Task::id), Some(id));
        assert_eq!(hud.current().map(|task| task.view().phase()), Some(Phase::Entering));
        let backdrop = hud.backdrop().expect("backdrop");
        assert!(backdrop.blocks_input());
    }

    #[test]
    fn replace_at_same_position_reuses_task() {
        let mut hud = instant_hud();
        let first = hud.show_loading(LoadingRequest::new(0.3)).expect("anchor");
        let second = hud.show_loading(LoadingRequest::new(0.6)).expect("anchor");

        assert_eq!(first, second);
        assert_eq!(hud.attached().count(), 1);
    }

    #[test]
    fn replace_at_other_position_stacks() {
        let mut hud = instant_hud();
        let first = hud.show_loading(LoadingRequest::new(0.3)).expect("anchor");
        let second = hud
            .show(StatusRequest::new(Status::Success).position(Position::Top))
            .expect("anchor");

        assert_ne!(first, second);
        assert_eq!(hud.attached().count(), 2);
        assert_eq!(hud.current().map(Task::id), Some(second));
    }

    #[test]
    fn low_priority_is_discarded_while_queue_is_pending() {
        let mut hud = instant_hud();
        hud.show(StatusRequest::default().duration(Duration::ZERO))
            .expect("anchor");
        hud.show(
            StatusRequest::default()
                .priority(Priority::Sequence)
                .duration(Duration::ZERO),
        )
        .expect("anchor");

        let calls = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&calls);
        let done = Arc::clone(&calls);
        hud.show(
            StatusRequest::default()
                .priority(Priority::Low)
                .on_will_hide(move || log.lock().expect("lock").push("will_hide"))
                .on_did_hide(move || done.lock().expect("lock").push("did_hide")),
        )
        .expect("anchor");

        assert_eq!(*calls.lock().expect("lock"), vec!["will_hide", "did_hide"]);
        assert_eq!(hud.attached().count(), 1);
    }

    #[test]
    fn hiding_unknown_task_is_a_no_op() {
        let mut hud = hud();
        hud.hide(None);
        hud.hide(Some(TaskId::new()));
        assert!(hud.is_quiescent());
    }

    #[test]
    fn hide_after_exit_transition_clears_everything() {
        let start = Instant::now();
        let mut hud = hud();
        let id = hud
            .show(StatusRequest::new(Status::Warning).duration(Duration::ZERO))
            .expect("anchor");

        hud.tick(start);
        hud.tick(start + ms(300));
        assert_eq!(hud.current().map(|task| task.view().phase()), Some(Phase::Visible));
        assert_eq!(hud.backdrop().map(Backdrop::opacity), Some(1.0));

        hud.hide(Some(id));
        hud.tick(start + ms(400));
        assert!(!hud.is_quiescent());
        hud.tick(start + ms(700));
        assert!(hud.is_quiescent());
    }

    #[test]
    fn close_message_runs_action_then_hides() {
        let mut hud = instant_hud();
        let closed = Arc::new(Mutex::new(false));
        let flag = Arc::clone(&closed);
        let id = hud
            .show(
                StatusRequest::new(Status::Error)
                    .closeable(true)
                    .duration(Duration::ZERO)
                    .on_close(move || *flag.lock().expect("lock") = true),
            )
            .expect("anchor");

        hud.update(Message::Close(id));
        assert!(*closed.lock().expect("lock"));
        assert!(hud.is_quiescent());
    }

    #[test]
    fn resize_relayouts_attached_views() {
        let mut hud = instant_hud();
        let id = hud
            .show(
                StatusRequest::default()
                    .position(Position::NavigationBarMask)
                    .title("Offline")
                    .duration(Duration::ZERO),
            )
            .expect("anchor");

        hud.update(Message::Resized(Size::new(800.0, 600.0)));
        let task = hud.task(id).expect("task");
        assert_eq!(task.surface().size, Size::new(800.0, 600.0));
        assert_eq!(task.view().layout().size.width, 800.0);
        assert_eq!(
            hud.backdrop().map(|backdrop| backdrop.surface().size),
            Some(Size::new(800.0, 600.0))
        );
    }

    #[test]
    fn explicit_surface_only_anchors_centered_tasks() {
        let mut hud = instant_hud();
        let other = Surface::new(SurfaceId(7), Size::new(300.0, 300.0));

        let centered = hud
            .show(StatusRequest::default().surface(other).duration(Duration::ZERO))
            .expect("anchor");
        let top = hud
            .show(
                StatusRequest::default()
                    .surface(other)
                    .position(Position::Top)
                    .duration(Duration::ZERO),
            )
            .expect("anchor");

        assert_eq!(hud.task(centered).map(Task::surface), Some(other));
        assert_eq!(
            hud.task(top).map(|task| task.surface().id),
            Some(StaticEnvironment::MAIN)
        );
    }

    #[test]
    fn animating_while_entering_or_timed() {
        let start = Instant::now();
        let mut hud = hud();
        assert!(!hud.is_animating());

        hud.show(StatusRequest::new(Status::Success).duration(Duration::from_secs(1)))
            .expect("anchor");
        assert!(hud.is_animating());

        hud.tick(start);
        hud.tick(start + ms(300));
        // Entrance done, auto-hide pending.
        assert!(hud.is_animating());
    }
}
