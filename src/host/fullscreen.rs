// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability detection.
//!
//! Platforms expose fullscreen through several entry points (standard and
//! vendor-specific). Each one is a [`FullscreenProvider`]; a
//! [`FullscreenChain`] tries them in priority order and the first supported
//! provider handles the request.

use crate::error::{log_rejection, HostError};

/// One fullscreen entry point on the player container.
pub trait FullscreenProvider {
    /// Name used in log lines.
    fn name(&self) -> &str;

    /// Whether this entry point exists on the host.
    fn is_supported(&self) -> bool;

    /// Requests fullscreen on the player container.
    fn request(&mut self) -> Result<(), HostError>;

    /// Leaves fullscreen.
    fn exit(&mut self) -> Result<(), HostError>;

    /// Whether this entry point currently reports a fullscreen element.
    fn is_active(&self) -> bool;
}

/// Fullscreen providers in priority order.
#[derive(Default)]
pub struct FullscreenChain {
    providers: Vec<Box<dyn FullscreenProvider>>,
}

impl std::fmt::Debug for FullscreenChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.providers.iter().map(|p| p.name()))
            .finish()
    }
}

impl FullscreenChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a provider with lower priority than those already present.
    #[must_use]
    pub fn with(mut self, provider: impl FullscreenProvider + 'static) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Whether any provider reports a fullscreen element.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.providers.iter().any(|p| p.is_active())
    }

    /// Name of the provider that would handle the next request.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.providers
            .iter()
            .find(|p| p.is_supported())
            .map(|p| p.name())
    }

    /// Requests fullscreen through the first supported provider.
    ///
    /// Returns false when no provider is supported. A refused request is
    /// logged and still counts as handled.
    pub fn request(&mut self) -> bool {
        self.dispatch(|p| p.request())
    }

    /// Leaves fullscreen through the first supported provider.
    pub fn exit(&mut self) -> bool {
        self.dispatch(|p| p.exit())
    }

    fn dispatch(
        &mut self,
        call: impl FnOnce(&mut dyn FullscreenProvider) -> Result<(), HostError>,
    ) -> bool {
        let Some(provider) = self.providers.iter_mut().find(|p| p.is_supported()) else {
            log::debug!("no fullscreen provider available");
            return false;
        };
        log::debug!("fullscreen via {}", provider.name());
        if let Err(err) = call(provider.as_mut()) {
            log_rejection(&err);
        }
        true
    }
}
