// SPDX-License-Identifier: MPL-2.0
//! Synchronous hops onto the UI thread.
//!
//! The session itself is single threaded. Other threads get a
//! [`Dispatcher`], which ships closures over a channel and blocks until the
//! session has run them during its next tick.

use super::manager::Hud;
use super::request::{LoadingRequest, StatusRequest};
use super::task::TaskId;
use crate::error::{DispatchError, Result};
use std::thread::{self, ThreadId};
use tokio::sync::{mpsc, oneshot};

pub(crate) type Job = Box<dyn FnOnce(&mut Hud) + Send + 'static>;

/// Receiving end, owned by the session.
pub(crate) struct Inbox {
    sender: mpsc::UnboundedSender<Job>,
    receiver: mpsc::UnboundedReceiver<Job>,
    ui_thread: ThreadId,
}

impl Inbox {
    pub(crate) fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            sender,
            receiver,
            ui_thread: thread::current().id(),
        }
    }

    pub(crate) fn dispatcher(&self) -> Dispatcher {
        Dispatcher {
            sender: self.sender.clone(),
            ui_thread: self.ui_thread,
        }
    }

    pub(crate) fn try_next(&mut self) -> Option<Job> {
        self.receiver.try_recv().ok()
    }
}

/// Cloneable handle that runs HUD operations on the UI thread.
#[derive(Clone)]
pub struct Dispatcher {
    sender: mpsc::UnboundedSender<Job>,
    ui_thread: ThreadId,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("ui_thread", &self.ui_thread)
            .field("closed", &self.sender.is_closed())
            .finish()
    }
}

impl Dispatcher {
    /// Runs `job` on the UI thread and waits for its result.
    ///
    /// # Errors
    ///
    /// [`DispatchError::OnUiThread`] when called from the UI thread itself,
    /// [`DispatchError::Disconnected`] when the session is gone.
    ///
    /// # Panics
    ///
    /// Panics when called from within an asynchronous execution context.
    pub fn run_sync<R, F>(&self, job: F) -> std::result::Result<R, DispatchError>
    where
        R: Send + 'static,
        F: FnOnce(&mut Hud) -> R + Send + 'static,
    {
        if thread::current().id() == self.ui_thread {
            return Err(DispatchError::OnUiThread);
        }

        let (reply, response) = oneshot::channel();
        self.sender
            .send(Box::new(move |hud: &mut Hud| {
                // The caller may have given up waiting; nothing to do then.
                let _ = reply.send(job(hud));
            }))
            .map_err(|_| DispatchError::Disconnected)?;

        response
            .blocking_recv()
            .map_err(|_| DispatchError::Disconnected)
    }

    /// [`Hud::show`] from another thread.
    ///
    /// # Errors
    ///
    /// Dispatch failures, or whatever the session returned.
    pub fn show(&self, request: StatusRequest) -> Result<TaskId> {
        self.run_sync(move |hud| hud.show(request))?
    }

    /// [`Hud::show_loading`] from another thread.
    ///
    /// # Errors
    ///
    /// Dispatch failures, or whatever the session returned.
    pub fn show_loading(&self, request: LoadingRequest) -> Result<TaskId> {
        self.run_sync(move |hud| hud.show_loading(request))?
    }

    /// [`Hud::hide`] from another thread.
    ///
    /// # Errors
    ///
    /// Dispatch failures only; hiding itself never fails.
    pub fn hide(&self, task: Option<TaskId>) -> Result<()> {
        self.run_sync(move |hud| hud.hide(task))?;
        Ok(())
    }
}
