// SPDX-License-Identifier: MPL-2.0
//! Core task data structures.
//!
//! A [`Task`] is one display request and its lifecycle. It exclusively owns
//! its [`OverlayView`]; the view only refers back to it by [`TaskId`].

use crate::environment::Surface;
use crate::view::{OverlayView, Position};
use std::fmt;
use std::time::Duration;

/// Unique identifier for a task. Equality is identity, never content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId(u64);

impl TaskId {
    /// Creates a new unique task ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

/// How a new request interacts with the task currently displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Priority {
    /// Dropped if anything is displayed or waiting.
    Low,
    /// Stacked above the current task.
    Overlay,
    /// Replaces the current task in place when it occupies the same position.
    #[default]
    Replace,
    /// Hides the current task and takes its place immediately.
    High,
    /// Waits in the queue until everything before it has been hidden.
    Sequence,
}

/// Kind of a status toast. Selects the icon and haptic pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    None,
    Warning,
    Error,
    Success,
}

/// A zero-argument lifecycle callback.
pub type Callback = Box<dyn FnMut() + Send + 'static>;

pub(crate) fn fire(callback: &mut Option<Callback>) {
    if let Some(callback) = callback.as_mut() {
        callback();
    }
}

/// Lifecycle callbacks of a task.
#[derive(Default)]
pub struct Callbacks {
    pub will_show: Option<Callback>,
    pub did_show: Option<Callback>,
    pub will_hide: Option<Callback>,
    pub did_hide: Option<Callback>,
}

impl Callbacks {
    /// Moves every callback set in `other` into `self`.
    pub fn merge(&mut self, other: Callbacks) {
        let Callbacks {
            will_show,
            did_show,
            will_hide,
            did_hide,
        } = other;
        if will_show.is_some() {
            self.will_show = will_show;
        }
        if did_show.is_some() {
            self.did_show = did_show;
        }
        if will_hide.is_some() {
            self.will_hide = will_hide;
        }
        if did_hide.is_some() {
            self.did_hide = did_hide;
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("will_show", &self.will_show.is_some())
            .field("did_show", &self.did_show.is_some())
            .field("will_hide", &self.will_hide.is_some())
            .field("did_hide", &self.did_hide.is_some())
            .finish()
    }
}

/// One HUD display request and its lifecycle state.
pub struct Task {
    pub(crate) id: TaskId,
    pub(crate) priority: Priority,
    pub(crate) duration: Duration,
    pub(crate) status: Status,
    pub(crate) position: Position,
    pub(crate) surface: Surface,
    pub(crate) background_interactive: bool,
    pub(crate) view: OverlayView,
    pub(crate) callbacks: Callbacks,
    pub(crate) close_action: Option<Callback>,
    pub(crate) cancel_action: Option<Callback>,
}

impl Task {
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.priority
    }

    /// Auto-hide delay; zero means the task stays until hidden.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    #[must_use]
    pub fn surface(&self) -> Surface {
        self.surface
    }

    /// Whether clicks pass through the backdrop while this task is shown.
    #[must_use]
    pub fn background_interactive(&self) -> bool {
        self.background_interactive
    }

    #[must_use]
    pub fn view(&self) -> &OverlayView {
        &self.view
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Task {}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("id", &self.id)
            .field("priority", &self.priority)
            .field("status", &self.status)
            .field("position", &self.position)
            .field("duration", &self.duration)
            .field("phase", &self.view.phase())
            .finish_non_exhaustive()
    }
}
