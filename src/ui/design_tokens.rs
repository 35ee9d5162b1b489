// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

This module defines the design tokens of the pin window, following the W3C Design Tokens standard.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes (context menu, edit panel)
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use iced_pin::ui::design_tokens::{palette, sizing};

let shadow_color = palette::PIN_SHADOW;
let menu_width = sizing::MENU_WIDTH;
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;
    use crate::config::SHADOW_COLOR_RGB;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand colors (blue scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);

    /// Glow drawn in the border around the pinned image.
    pub const PIN_SHADOW: Color =
        Color::from_rgb8(SHADOW_COLOR_RGB.0, SHADOW_COLOR_RGB.1, SHADOW_COLOR_RGB.2);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_MEDIUM: f32 = 0.5;

    /// Surface background - Semi-transparent panels and menus
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (4px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Width of the context menu.
    pub const MENU_WIDTH: f32 = 168.0;
    /// Height of one clickable or read-out row in the context menu.
    pub const MENU_ITEM_HEIGHT: f32 = 26.0;
    /// Height reserved for a separator row.
    pub const MENU_SEPARATOR_HEIGHT: f32 = 9.0;
    /// Padding around the menu rows.
    pub const MENU_PADDING: f32 = super::spacing::XXS;

    /// Height of the edit panel.
    pub const EDIT_PANEL_HEIGHT: f32 = 32.0;
    /// Width of one edit panel button.
    pub const EDIT_PANEL_BUTTON_WIDTH: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Standard body - Menu rows and panel buttons
    pub const BODY: f32 = 14.0;

    /// Caption - Read-only values in the menu
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use crate::config::BORDER_MARGIN;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Glow filling the transparent border around the pinned image.
    #[allow(clippy::cast_precision_loss)]
    pub const PIN: Shadow = Shadow {
        color: palette::PIN_SHADOW,
        offset: Vector::ZERO,
        blur_radius: BORDER_MARGIN as f32,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    // Spacing validation
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);

    // Opacity validation
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);
    assert!(opacity::SURFACE > 0.0 && opacity::SURFACE < 1.0);

    // Sizing validation
    assert!(sizing::MENU_ITEM_HEIGHT > sizing::MENU_SEPARATOR_HEIGHT);
    assert!(sizing::MENU_WIDTH > sizing::EDIT_PANEL_BUTTON_WIDTH);

    // Typography validation
    assert!(typography::BODY > typography::CAPTION);
};
