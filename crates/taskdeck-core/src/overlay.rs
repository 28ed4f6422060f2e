//! Placement and visibility classes for the slide-in drawer.
//!
//! The drawer stays mounted; open and closed differ only in these classes,
//! so the transition runs both ways. The UI stylesheet defines every class
//! emitted here.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    #[default]
    Right,
    Left,
    Top,
    Bottom,
}

impl Side {
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayOptions {
    pub side: Side,
    pub size: Size,
    pub close_on_backdrop: bool,
}

impl Default for OverlayOptions {
    fn default() -> Self {
        Self {
            side: Side::default(),
            size: Size::default(),
            close_on_backdrop: true,
        }
    }
}

pub fn is_close_key(key: &str) -> bool {
    key == "Escape"
}

pub fn container_class(open: bool) -> String {
    let events = if open {
        "pointer-events-auto"
    } else {
        "pointer-events-none"
    };
    format!("fixed inset-0 z-[100] {events}")
}

pub fn backdrop_class(open: bool) -> String {
    let state = if open {
        "bg-black/50 backdrop-blur-[1.5px] opacity-100"
    } else {
        "opacity-0"
    };
    format!("absolute inset-0 transition-opacity duration-300 {state}")
}

fn side_class(side: Side) -> &'static str {
    match side {
        Side::Right => "inset-y-0 right-0 w-full sm:max-w-sm md:max-w-md",
        Side::Left => "inset-y-0 left-0 w-full sm:max-w-sm md:max-w-md",
        Side::Top => "inset-x-0 top-0 h-[70vh] sm:h-[60vh]",
        Side::Bottom => "inset-x-0 bottom-0 h-[70vh] sm:h-[60vh]",
    }
}

fn size_class(side: Side, size: Size) -> &'static str {
    match (side.is_vertical(), size) {
        (true, Size::Sm) => "sm:h-[45vh]",
        (true, Size::Md) => "sm:h-[60vh]",
        (true, Size::Lg) => "sm:h-[75vh]",
        (true, Size::Xl) => "sm:h-[85vh]",
        (false, Size::Sm) => "sm:max-w-sm",
        (false, Size::Md) => "sm:max-w-md",
        (false, Size::Lg) => "sm:max-w-lg",
        (false, Size::Xl) => "sm:max-w-xl",
    }
}

fn translate_class(side: Side, open: bool) -> &'static str {
    match (side, open) {
        (Side::Right, true) => "translate-x-0",
        (Side::Left, true) => "-translate-x-0",
        (Side::Top, true) => "translate-y-0",
        (Side::Bottom, true) => "-translate-y-0",
        (Side::Right, false) => "translate-x-full",
        (Side::Left, false) => "-translate-x-full",
        (Side::Top, false) => "-translate-y-full",
        (Side::Bottom, false) => "translate-y-full",
    }
}

// Rounded on the edge facing the page.
fn corner_class(side: Side) -> &'static str {
    match side {
        Side::Right => "rounded-l-2xl",
        Side::Left => "rounded-r-2xl",
        Side::Top => "rounded-b-2xl",
        Side::Bottom => "rounded-t-2xl",
    }
}

pub fn panel_class(options: &OverlayOptions, open: bool, extra: &str) -> String {
    let side = options.side;
    let stretch = if side.is_vertical() { "w-full" } else { "h-full" };
    let mut class = format!(
        "focus:outline-none fixed {} {} transition-transform duration-300 ease-out {} {stretch} \
         bg-white ring-1 ring-black/5 rounded-none {}",
        side_class(side),
        size_class(side, options.size),
        translate_class(side, open),
        corner_class(side),
    );
    let extra = extra.trim();
    if !extra.is_empty() {
        class.push(' ');
        class.push_str(extra);
    }
    class
}
