//! Context menu placement
//!
//! The menu is anchored to the page it was opened on, never to the pointer
//! position of the triggering event. Placement prefers the space above the
//! anchor, flips below when the top edge would be crossed, and shifts
//! horizontally to stay inside the viewport margins.

use std::fmt;

use crate::constants::menu::{ANCHOR_GAP, EDGE_MARGIN, OFFSCREEN};

/// Axis-aligned rectangle in viewport units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

/// Vertical half of the transform origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalOrigin {
    Top,
    Bottom,
}

/// Horizontal half of the transform origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalOrigin {
    Left,
    Right,
}

/// Corner the menu unfolds from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransformOrigin {
    pub vertical: VerticalOrigin,
    pub horizontal: HorizontalOrigin,
}

impl TransformOrigin {
    pub const TOP_LEFT: Self = Self {
        vertical: VerticalOrigin::Top,
        horizontal: HorizontalOrigin::Left,
    };
    pub const BOTTOM_LEFT: Self = Self {
        vertical: VerticalOrigin::Bottom,
        horizontal: HorizontalOrigin::Left,
    };
}

impl fmt::Display for TransformOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.vertical {
            VerticalOrigin::Top => "top",
            VerticalOrigin::Bottom => "bottom",
        };
        let h = match self.horizontal {
            HorizontalOrigin::Left => "left",
            HorizontalOrigin::Right => "right",
        };
        write!(f, "{} {}", v, h)
    }
}

/// Offsets used by [`place_menu`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacementConfig {
    /// Distance between anchor and menu
    pub gap: i32,
    /// Distance kept from the left and right viewport edges
    pub margin: i32,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            gap: ANCHOR_GAP,
            margin: EDGE_MARGIN,
        }
    }
}

/// Resolved menu position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuPlacement {
    pub x: i32,
    pub y: i32,
    pub origin: TransformOrigin,
}

impl MenuPlacement {
    /// Parked outside the viewport
    pub const OFFSCREEN: Self = Self {
        x: OFFSCREEN,
        y: OFFSCREEN,
        origin: TransformOrigin::TOP_LEFT,
    };

    pub fn is_offscreen(&self) -> bool {
        *self == Self::OFFSCREEN
    }

    pub fn flipped_below(&self) -> bool {
        self.origin.vertical == VerticalOrigin::Top
    }
}

/// Compute where a `menu_width` x `menu_height` menu goes for `anchor`
///
/// `anchor` is `None` when the page element could not be found; the menu is
/// then parked off-screen.
pub fn place_menu(
    anchor: Option<Bounds>,
    menu_width: i32,
    menu_height: i32,
    viewport_width: i32,
    config: PlacementConfig,
) -> MenuPlacement {
    let Some(anchor) = anchor else {
        tracing::error!("Context menu anchor not found, parking menu off-screen");
        return MenuPlacement::OFFSCREEN;
    };

    let mut x = anchor.x;
    let mut origin = TransformOrigin::BOTTOM_LEFT;
    let mut y = anchor.y - menu_height - config.gap;

    if y < 0 {
        y = anchor.bottom() + config.gap;
        origin.vertical = VerticalOrigin::Top;
    }

    if x + menu_width > viewport_width - config.margin {
        x = viewport_width - menu_width - config.margin;
        origin.horizontal = HorizontalOrigin::Right;
    }
    if x < config.margin {
        x = config.margin;
        origin.horizontal = HorizontalOrigin::Left;
    }

    MenuPlacement { x, y, origin }
}
