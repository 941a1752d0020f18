//! Theme constants for the Gomoku GUI

use egui::Color32;

use crate::game::Control;
use crate::Player;

// Board colors
pub const BOARD_BG: Color32 = Color32::from_rgb(247, 238, 214); // Light yellow
pub const GRID_LINE: Color32 = Color32::from_rgb(0, 0, 0);
pub const STAR_POINT: Color32 = Color32::from_rgb(0, 0, 0);

// Stone colors
pub const BLACK_STONE: Color32 = Color32::from_rgb(88, 87, 86);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 251, 240);
pub const BLACK_HOVER: Color32 = Color32::from_rgb(67, 67, 67);
pub const WHITE_HOVER: Color32 = Color32::from_rgb(255, 131, 250);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(204, 0, 0);
pub const PAIRED_MOVE_MARKER: Color32 = Color32::from_rgb(255, 153, 153);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors
pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
pub const CARD_BG: Color32 = Color32::from_rgb(242, 242, 245);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(30, 30, 35);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(90, 95, 105);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(140, 145, 155);
pub const WINNER_TEXT: Color32 = Color32::from_rgb(0, 0, 255);
pub const BUTTON_TEXT: Color32 = Color32::from_rgb(255, 255, 255);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const STONE_RADIUS_RATIO: f32 = 0.5;
pub const STAR_POINT_SIZE: f32 = 8.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const CENTER_LINE_WIDTH: f32 = 2.0;
pub const BUTTON_SIZE: [f32; 2] = [140.0, 50.0];

pub fn stone_color(player: Player) -> Color32 {
    match player {
        Player::One => BLACK_STONE,
        Player::Two => WHITE_STONE,
    }
}

pub fn hover_color(player: Player) -> Color32 {
    match player {
        Player::One => BLACK_HOVER,
        Player::Two => WHITE_HOVER,
    }
}

/// Fill for a control button: saturated when enabled, pale when not
pub fn control_color(control: Control, enabled: bool) -> Color32 {
    let (on, off) = match control {
        Control::Start => ((26, 173, 25), (158, 217, 157)),
        Control::Resign => ((230, 67, 64), (236, 139, 137)),
        Control::Commit => ((30, 144, 255), (135, 206, 250)),
        Control::Withdraw => ((255, 165, 0), (255, 228, 181)),
    };
    let (r, g, b) = if enabled { on } else { off };
    Color32::from_rgb(r, g, b)
}

/// Star point cells: four quarter points and the center
pub fn star_points(size: usize) -> [(usize, usize); 5] {
    let half = size / 2;
    let quarter = half / 2;
    let far = 2 * half - quarter;
    [
        (quarter, quarter),
        (far, quarter),
        (quarter, far),
        (far, far),
        (half, half),
    ]
}
