// SPDX-License-Identifier: MPL-2.0
//! `iced_hud` is a heads-up display for applications built with Iced.
//!
//! It shows transient loading indicators, progress rings and status toasts
//! above the application content. Requests are arbitrated by priority
//! against the task currently on screen, deferred ones wait in a FIFO queue,
//! and every card animates in and out.
//!
//! The crate is organised in layers:
//!
//! - [`hud`] - The session: requests, arbitration, queue, iced integration
//! - [`view`] - Card geometry, transitions and the progress indicator
//! - [`ui`] - Canvas rendering
//! - [`environment`] - Host collaborators (anchor surfaces, safe areas, haptics)
//! - [`assets`] - Status icons
//! - [`config`] - Style and sizing configuration

#![doc(html_root_url = "https://docs.rs/iced_hud/0.1.0")]

pub mod assets;
pub mod config;
pub mod environment;
pub mod error;
pub mod hud;
pub mod logging;
pub mod ui;
pub mod view;

pub use assets::{AssetProvider, EmbeddedAssets, IconName};
pub use config::{Config, ContentStyle, Rgba};
pub use environment::{
    Environment, Feedback, Haptics, Insets, NoHaptics, Orientation, StaticEnvironment, Surface,
    SurfaceId, Window,
};
pub use error::{DispatchError, Error, Result};
pub use hud::{
    Callbacks, Dispatcher, Hud, LoadingRequest, Message, Priority, Status, StatusRequest, Task,
    TaskId,
};
pub use view::{Direction, Phase, Position, INDETERMINATE};
