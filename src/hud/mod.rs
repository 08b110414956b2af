// SPDX-License-Identifier: MPL-2.0
//! The HUD session: display requests, priority arbitration, the sequence
//! queue and the iced integration.
//!
//! # Usage
//!
//! ```ignore
//! use iced_hud::{Config, Hud, LoadingRequest, StaticEnvironment, StatusRequest, Status};
//!
//! let mut hud = Hud::new(Config::default(), StaticEnvironment::new(window_size));
//!
//! // A spinner that later turns into a determinate indicator.
//! let id = hud.show_loading(LoadingRequest::indeterminate().title("Uploading"))?;
//! hud.show_loading(LoadingRequest::new(0.6).title("Uploading"))?; // same task
//!
//! // A toast that hides itself after the default duration.
//! hud.show(StatusRequest::new(Status::Success).title("Uploaded"))?;
//!
//! // In the application:
//! //   view:         stack![content, hud.view().map(Message::Hud)]
//! //   subscription: hud.subscription().map(Message::Hud)
//! //   update:       Message::Hud(message) => hud.update(message)
//! ```

mod dispatch;
mod manager;
mod request;
mod task;

pub use dispatch::Dispatcher;
pub use manager::{Hud, Message};
pub use request::{LoadingRequest, StatusRequest};
pub use task::{Callback, Callbacks, Priority, Status, Task, TaskId};
