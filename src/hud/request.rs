// SPDX-License-Identifier: MPL-2.0
//! Display requests.
//!
//! Both builders carry the lifecycle callbacks of the task they create, so
//! callbacks that fire while the request is being arbitrated (a discarded
//! low-priority task, for instance) are observed by the caller.

use super::task::{Callback, Callbacks, Priority, Status};
use crate::environment::Surface;
use crate::view::{Direction, Position, INDETERMINATE};
use std::time::Duration;

macro_rules! lifecycle_setters {
    () => {
        /// Called before the task's view starts appearing.
        #[must_use]
        pub fn on_will_show(mut self, callback: impl FnMut() + Send + 'static) -> Self {
            self.callbacks.will_show = Some(Box::new(callback));
            self
        }

        /// Called once the task's view is fully visible.
        #[must_use]
        pub fn on_did_show(mut self, callback: impl FnMut() + Send + 'static) -> Self {
            self.callbacks.did_show = Some(Box::new(callback));
            self
        }

        #[must_use]
        pub fn on_will_hide(mut self, callback: impl FnMut() + Send + 'static) -> Self {
            self.callbacks.will_hide = Some(Box::new(callback));
            self
        }

        /// Called once the task is gone, whether or not it was ever visible.
        #[must_use]
        pub fn on_did_hide(mut self, callback: impl FnMut() + Send + 'static) -> Self {
            self.callbacks.did_hide = Some(Box::new(callback));
            self
        }

        /// Anchor surface. Only honoured for centered requests.
        #[must_use]
        pub fn surface(mut self, surface: Surface) -> Self {
            self.surface = Some(surface);
            self
        }

        #[must_use]
        pub fn title(mut self, title: impl Into<String>) -> Self {
            self.title = Some(title.into());
            self
        }

        #[must_use]
        pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
            self.subtitle = Some(subtitle.into());
            self
        }

        #[must_use]
        pub fn direction(mut self, direction: Direction) -> Self {
            self.direction = direction;
            self
        }

        #[must_use]
        pub fn priority(mut self, priority: Priority) -> Self {
            self.priority = priority;
            self
        }

        #[must_use]
        pub fn position(mut self, position: Position) -> Self {
            self.position = position;
            self
        }
    };
}

/// A loading indicator request.
pub struct LoadingRequest {
    pub(crate) surface: Option<Surface>,
    pub(crate) progress: f32,
    pub(crate) title: Option<String>,
    pub(crate) subtitle: Option<String>,
    pub(crate) direction: Direction,
    pub(crate) priority: Priority,
    pub(crate) position: Position,
    pub(crate) cancelable: bool,
    pub(crate) on_cancel: Option<Callback>,
    pub(crate) callbacks: Callbacks,
}

impl LoadingRequest {
    /// A determinate indicator at `progress` in `[0, 1]`, or indeterminate
    /// for negative values.
    #[must_use]
    pub fn new(progress: f32) -> Self {
        Self {
            surface: None,
            progress,
            title: None,
            subtitle: None,
            direction: Direction::default(),
            priority: Priority::default(),
            position: Position::default(),
            cancelable: false,
            on_cancel: None,
            callbacks: Callbacks::default(),
        }
    }

    #[must_use]
    pub fn indeterminate() -> Self {
        Self::new(INDETERMINATE)
    }

    /// Shows a cancel button.
    #[must_use]
    pub fn cancelable(mut self, cancelable: bool) -> Self {
        self.cancelable = cancelable;
        self
    }

    /// Action run when the cancel button is pressed, before the task hides.
    #[must_use]
    pub fn on_cancel(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(action));
        self
    }

    lifecycle_setters!();
}

impl Default for LoadingRequest {
    fn default() -> Self {
        Self::indeterminate()
    }
}

/// A status toast request.
pub struct StatusRequest {
    pub(crate) surface: Option<Surface>,
    pub(crate) status: Status,
    pub(crate) title: Option<String>,
    pub(crate) subtitle: Option<String>,
    pub(crate) direction: Direction,
    pub(crate) duration: Option<Duration>,
    pub(crate) priority: Priority,
    pub(crate) position: Position,
    pub(crate) closeable: bool,
    pub(crate) on_close: Option<Callback>,
    pub(crate) background_interactive: bool,
    pub(crate) callbacks: Callbacks,
}

impl StatusRequest {
    #[must_use]
    pub fn new(status: Status) -> Self {
        Self {
            surface: None,
            status,
            title: None,
            subtitle: None,
            direction: Direction::default(),
            duration: None,
            priority: Priority::default(),
            position: Position::default(),
            closeable: false,
            on_close: None,
            background_interactive: true,
            callbacks: Callbacks::default(),
        }
    }

    /// Auto-hide delay. Zero keeps the toast until it is hidden; when unset
    /// the configured default applies.
    #[must_use]
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Shows a close button.
    #[must_use]
    pub fn closeable(mut self, closeable: bool) -> Self {
        self.closeable = closeable;
        self
    }

    #[must_use]
    pub fn on_close(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(action));
        self
    }

    /// Whether clicks reach the content behind the HUD. Defaults to `true`.
    #[must_use]
    pub fn background_interactive(mut self, interactive: bool) -> Self {
        self.background_interactive = interactive;
        self
    }

    lifecycle_setters!();
}

impl Default for StatusRequest {
    fn default() -> Self {
        Self::new(Status::None)
    }
}
