// SPDX-License-Identifier: MPL-2.0
//! Icon lookup by symbolic name.
//!
//! Icons are SVG files embedded at compile time. Hosts with their own asset
//! pipeline can implement [`AssetProvider`] instead.

use crate::hud::Status;
use iced::widget::svg::Handle;
use rust_embed::RustEmbed;
use std::sync::OnceLock;

#[derive(RustEmbed)]
#[folder = "assets/icons/"]
struct Icons;

/// Symbolic icon names understood by providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    Warning,
    Error,
    Success,
    Close,
}

impl IconName {
    /// The icon shown for a status, `None` for plain toasts.
    #[must_use]
    pub fn for_status(status: Status) -> Option<Self> {
        match status {
            Status::None => None,
            Status::Warning => Some(IconName::Warning),
            Status::Error => Some(IconName::Error),
            Status::Success => Some(IconName::Success),
        }
    }

    fn file_name(self) -> &'static str {
        match self {
            IconName::Warning => "warning.svg",
            IconName::Error => "error.svg",
            IconName::Success => "success.svg",
            IconName::Close => "close.svg",
        }
    }
}

/// Resolves icons for the HUD.
pub trait AssetProvider {
    fn icon(&self, name: IconName) -> Option<Handle>;
}

/// Provider backed by the embedded SVG set. Handles are cached per icon.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedAssets;

impl AssetProvider for EmbeddedAssets {
    fn icon(&self, name: IconName) -> Option<Handle> {
        static WARNING: OnceLock<Option<Handle>> = OnceLock::new();
        static ERROR: OnceLock<Option<Handle>> = OnceLock::new();
        static SUCCESS: OnceLock<Option<Handle>> = OnceLock::new();
        static CLOSE: OnceLock<Option<Handle>> = OnceLock::new();

        let cell = match name {
            IconName::Warning => &WARNING,
            IconName::Error => &ERROR,
            IconName::Success => &SUCCESS,
            IconName::Close => &CLOSE,
        };
        cell.get_or_init(|| load(name)).clone()
    }
}

fn load(name: IconName) -> Option<Handle> {
    let file = Icons::get(name.file_name());
    if file.is_none() {
        tracing::warn!(icon = ?name, "missing embedded HUD icon");
    }
    file.map(|file| Handle::from_memory(file.data.into_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_is_embedded() {
        for name in [
            IconName::Warning,
            IconName::Error,
            IconName::Success,
            IconName::Close,
        ] {
            assert!(Icons::get(name.file_name()).is_some(), "{name:?}");
            assert!(EmbeddedAssets.icon(name).is_some());
        }
    }

    #[test]
    fn plain_status_has_no_icon() {
        assert_eq!(IconName::for_status(Status::None), None);
        assert_eq!(
            IconName::for_status(Status::Warning),
            Some(IconName::Warning)
        );
    }
}
