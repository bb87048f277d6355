//! Header feature slice: title bar with clickable navigation.
//!
//! Layout is a pure function of the terminal width so the renderer and the
//! mouse hit-test always agree on where each item sits.

mod render;

pub use render::render_header;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "TERRY.DEV/PORTFOLIO";
pub const BRAND: &str = "TERRY ENTERPRISE ↈ";

/// Header rows, including the bottom border.
pub const HEADER_HEIGHT: u16 = 2;

pub struct NavItem {
    pub label: &'static str,
    pub command: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "[PERSONNEL FILE]",
        command: "personnel",
    },
    NavItem {
        label: "[PROJECT ARCHIVES]",
        command: "projects",
    },
    NavItem {
        label: "[WORK HISTORY]",
        command: "records",
    },
    NavItem {
        label: "[AWARDS]",
        command: "awards",
    },
    NavItem {
        label: "[COLLEGE]",
        command: "college",
    },
    NavItem {
        label: "[STARTUPS]",
        command: "startups",
    },
    NavItem {
        label: "[SKILLS]",
        command: "skills",
    },
    NavItem {
        label: "[COMMS]",
        command: "comms",
    },
];

/// Shown instead of the full navigation on narrow terminals.
pub const MENU_ITEM: NavItem = NavItem {
    label: "[MENU]",
    command: "help",
};

/// A navigation item placed on the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSlot {
    pub x: u16,
    pub width: u16,
    pub label: &'static str,
    pub command: &'static str,
}

/// Resolved header layout for one terminal width.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    pub show_brand: bool,
    pub brand_x: u16,
    pub slots: Vec<NavSlot>,
}

fn nav_width(items: &[NavItem]) -> usize {
    let labels: usize = items.iter().map(|item| item.label.width()).sum();
    labels + items.len().saturating_sub(1)
}

fn place(items: &[NavItem], right_edge: usize) -> Vec<NavSlot> {
    let mut x = right_edge.saturating_sub(nav_width(items));
    items
        .iter()
        .map(|item| {
            let width = item.label.width();
            let slot = NavSlot {
                x: x as u16,
                width: width as u16,
                label: item.label,
                command: item.command,
            };
            x += width + 1;
            slot
        })
        .collect()
}

/// Computes where the title, brand and navigation go.
pub fn layout(width: u16) -> HeaderLayout {
    let width = usize::from(width);
    let title = TITLE.width() + 1;
    let full_nav = nav_width(NAV_ITEMS);

    let slots = if title + 2 + full_nav <= width {
        place(NAV_ITEMS, width)
    } else {
        place(std::slice::from_ref(&MENU_ITEM), width)
    };

    let used_right = slots.first().map_or(width, |slot| usize::from(slot.x));
    let brand = BRAND.width();
    let brand_x = width.saturating_sub(brand) / 2;
    let show_brand = brand_x >= title + 2 && brand_x + brand + 2 <= used_right;

    HeaderLayout {
        show_brand,
        brand_x: brand_x as u16,
        slots,
    }
}

/// Returns the command for a click at `column` on the header row.
pub fn hit_test(width: u16, column: u16) -> Option<&'static str> {
    layout(width)
        .slots
        .into_iter()
        .find(|slot| column >= slot.x && column < slot.x + slot.width)
        .map(|slot| slot.command)
}
