// SPDX-License-Identifier: MPL-2.0
//! Screen orientation lock and viewport shape.

use crate::error::{HostError, HostRequest};

/// Best-effort screen orientation lock.
pub trait OrientationLock {
    fn lock_landscape(&mut self) -> Result<(), HostError>;
    fn unlock(&mut self) -> Result<(), HostError>;
}

/// Orientation lock for hosts without one (desktop windows).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOrientationLock;

impl OrientationLock for NoOrientationLock {
    fn lock_landscape(&mut self) -> Result<(), HostError> {
        Err(HostError::Unsupported(HostRequest::LockOrientation))
    }

    fn unlock(&mut self) -> Result<(), HostError> {
        Err(HostError::Unsupported(HostRequest::UnlockOrientation))
    }
}

/// Size of the host viewport in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
        }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the viewport is narrower than `threshold_px`.
    #[must_use]
    pub fn is_narrow(&self, threshold_px: u32) -> bool {
        self.width < threshold_px as f32
    }

    #[must_use]
    pub fn is_portrait(&self) -> bool {
        self.height > self.width
    }
}
