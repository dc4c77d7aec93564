// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Shared visual constants of the player skin.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii

## Examples

```
use vidskin::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let bar_bg = Color {
    a: opacity::OVERLAY_STRONG,
    ..palette::BLACK
};

let padding = spacing::MD; // 16px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    /// Progress fill and the active speed preset.
    pub const ACCENT_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const BUTTON_HEIGHT: f32 = 36.0;

    // Seek track
    pub const TRACK_HEIGHT: f32 = 6.0;
    /// Height of the hit area around the track.
    pub const TRACK_HIT_HEIGHT: f32 = 18.0;

    pub const VOLUME_SLIDER_WIDTH: f32 = 80.0;
    pub const SPEED_MENU_WIDTH: f32 = 90.0;
    pub const HOVER_TIME_WIDTH: f32 = 72.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Skip indicators and the play overlay glyph
    pub const TITLE_LG: f32 = 30.0;

    /// Title bar
    pub const HEADING: f32 = 16.0;

    /// Standard body - time display, speed label
    pub const BODY: f32 = 14.0;

    /// Caption - hover tooltip
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0; // Pill shape
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::TRACK_HIT_HEIGHT > sizing::TRACK_HEIGHT);

    assert!(typography::TITLE_LG > typography::HEADING);
    assert!(typography::HEADING > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
