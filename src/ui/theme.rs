//! Theme constants for the Omok GUI

use egui::Color32;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(0xe0, 0xc0, 0x8c);
pub const GRID_LINE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(0, 0, 0);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const STONE_OUTLINE: Color32 = Color32::from_rgb(0x33, 0x33, 0x33);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn stone_shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 128)
}

pub fn hover_black() -> Color32 {
    Color32::from_rgba_unmultiplied(20, 20, 20, 80)
}

pub fn hover_white() -> Color32 {
    Color32::from_rgba_unmultiplied(240, 240, 240, 110)
}

// Panel colors - dark theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const WIN_CARD_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_PLAYING: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes, relative to the cell size where noted
pub const BOARD_PADDING: f32 = 10.0;
pub const STONE_RADIUS_RATIO: f32 = 1.0 / 3.0;
pub const STONE_OUTLINE_WIDTH: f32 = 2.0;
pub const SHADOW_OFFSET: f32 = 2.0;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const SIDE_PANEL_WIDTH: f32 = 260.0;
