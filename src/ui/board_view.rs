//! Board rendering for the Gomoku GUI

use egui::{Color32, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Pos};
use crate::game::{GameSession, Phase};
use crate::Player;

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
    /// Cells per side of the board last drawn
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            board_rect: Rect::NOTHING,
            size: crate::board::DEFAULT_BOARD_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell, if any
    pub fn show(&mut self, ui: &mut egui::Ui, session: &GameSession) -> Option<Pos> {
        let board = session.board();
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(120.0);
        self.size = board.size();
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (self.size as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::splat(board_size), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_stones(&painter, board);
        self.draw_recent_marks(&painter, board);

        if let Some(line) = session.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        if session.phase() != Phase::InProgress || session.is_over() {
            return None;
        }

        let board_pos = response
            .hover_pos()
            .and_then(|pointer| self.screen_to_board(pointer))
            .filter(|p| board.is_empty(p.x, p.y))?;

        self.draw_hover_preview(&painter, board_pos, session.turn());
        response.clicked().then_some(board_pos)
    }

    /// Draw grid lines; the two center lines are thicker
    fn draw_grid(&self, painter: &Painter) {
        let span = (self.size as f32 - 1.0) * self.cell_size;

        for i in 0..self.size {
            let width = if i == self.size / 2 {
                CENTER_LINE_WIDTH
            } else {
                GRID_LINE_WIDTH
            };
            let stroke = Stroke::new(width, GRID_LINE);
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points as small squares
    fn draw_star_points(&self, painter: &Painter) {
        for (x, y) in star_points(self.size) {
            let center = self.board_to_screen(Pos::new(x, y));
            let rect = Rect::from_center_size(center, Vec2::splat(STAR_POINT_SIZE));
            painter.rect_filled(rect, CornerRadius::ZERO, STAR_POINT);
        }
    }

    /// Draw all placed stones labelled with their move number
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        let radius = self.cell_size * STONE_RADIUS_RATIO;
        let font = FontId::proportional(self.cell_size * 0.4);

        for (number, mv) in board.numbered_stones() {
            let center = self.board_to_screen(mv.pos);
            painter.circle_filled(center, radius, stone_color(mv.player));
            painter.text(
                center,
                egui::Align2::CENTER_CENTER,
                number.to_string(),
                font.clone(),
                stone_color(mv.player.opponent()),
            );
        }
    }

    /// Frame the latest stone, and its partner from the same turn
    fn draw_recent_marks(&self, painter: &Painter, board: &Board) {
        let marks = board.recent_marks();
        if let Some(pos) = marks.paired {
            self.draw_cell_frame(painter, pos, PAIRED_MOVE_MARKER);
        }
        if let Some(pos) = marks.last {
            self.draw_cell_frame(painter, pos, LAST_MOVE_MARKER);
        }
    }

    fn draw_cell_frame(&self, painter: &Painter, pos: Pos, color: Color32) {
        let rect = Rect::from_center_size(self.board_to_screen(pos), Vec2::splat(self.cell_size));
        let stroke = Stroke::new(1.0, color);
        let corners = [
            rect.left_top(),
            rect.right_top(),
            rect.right_bottom(),
            rect.left_bottom(),
        ];
        for i in 0..corners.len() {
            painter.line_segment([corners[i], corners[(i + 1) % corners.len()]], stroke);
        }
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            painter.line_segment(
                [self.board_to_screen(pair[0]), self.board_to_screen(pair[1])],
                stroke,
            );
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;
        for &pos in line {
            painter.circle_stroke(self.board_to_screen(pos), radius, stroke);
        }
    }

    /// Draw hover preview in the mover's color
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * STONE_RADIUS_RATIO, hover_color(turn));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let x = ((relative.x - BOARD_MARGIN) / self.cell_size + 0.5).floor();
        let y = ((relative.y - BOARD_MARGIN) / self.cell_size + 0.5).floor();

        if x >= 0.0 && y >= 0.0 && (x as usize) < self.size && (y as usize) < self.size {
            Some(Pos::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.x as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.y as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
