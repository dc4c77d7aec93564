// SPDX-License-Identifier: MPL-2.0
//! Player control logic, independent of any renderer.
//!
//! [`Player`] is the entry point: it owns a [`VisibilityController`] and a
//! [`TransportMapper`] and turns host [`Input`]s into presentation
//! [`Signal`]s.

pub mod keyboard;
pub mod playback_speed;
pub mod player;
pub mod seek;
pub mod signal;
pub mod skip;
pub mod time_format;
pub mod timer;
pub mod transport;
pub mod visibility;
pub mod volume;

pub use keyboard::Key;
pub use playback_speed::SpeedPresets;
pub use player::{Input, Player};
pub use seek::TrackGeometry;
pub use signal::Signal;
pub use skip::SkipDirection;
pub use transport::{TouchZone, TransportMapper};
pub use visibility::VisibilityController;
pub use volume::{Volume, VolumeIcon};
