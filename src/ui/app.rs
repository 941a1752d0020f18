//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, Vec2};
use tracing::debug;

use super::board_view::BoardView;
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{Control, GameSession, Phase};

/// Main Gomoku application
pub struct GomokuApp {
    session: GameSession,
    board_view: BoardView,
    /// Last rejected action, cleared by the next successful one
    message: Option<String>,
}

impl Default for GomokuApp {
    fn default() -> Self {
        Self::with_config(&AppConfig::default())
    }
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            session: GameSession::new(config.board.size),
            board_view: BoardView::default(),
            message: None,
        }
    }

    /// Run a control and keep the outcome for the status card
    fn activate(&mut self, control: Control) {
        match self.session.activate(control) {
            Ok(()) => self.message = None,
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Render the side panel with game info and controls
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .exact_width(200.0)
            .resizable(false)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(12.0))
            .show(ctx, |ui| {
                self.render_title(ui);
                ui.add_space(12.0);

                self.render_controls(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);

                if let Some(winner) = self.session.winner() {
                    ui.add_space(10.0);
                    ui.label(
                        RichText::new(format!("Winner is {winner}"))
                            .size(22.0)
                            .strong()
                            .color(WINNER_TEXT),
                    );
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_MUTED));
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
    }

    fn render_title(&self, ui: &mut egui::Ui) {
        ui.label(RichText::new("GOMOKU DUO").size(20.0).strong().color(TEXT_PRIMARY));
        ui.label(RichText::new("Two stones a turn, five to win").size(11.0).color(TEXT_MUTED));
    }

    /// Start / Give up / Commit / Withdraw buttons
    fn render_controls(&mut self, ui: &mut egui::Ui) {
        let mut pressed = None;
        for state in self.session.controls() {
            let label = RichText::new(state.control.label())
                .size(18.0)
                .color(BUTTON_TEXT);
            let button = egui::Button::new(label)
                .fill(control_color(state.control, state.enabled))
                .min_size(Vec2::from(BUTTON_SIZE));
            if ui.add_enabled(state.enabled, button).clicked() {
                pressed = Some(state.control);
            }
            ui.add_space(6.0);
        }
        if let Some(control) = pressed {
            self.activate(control);
        }
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            match self.session.phase() {
                Phase::NotStarted => {
                    ui.label(RichText::new("Press Start").size(14.0).color(TEXT_SECONDARY));
                }
                Phase::Finished => {
                    ui.label(RichText::new("Game over").size(14.0).color(TEXT_SECONDARY));
                }
                Phase::InProgress => {
                    let turn = self.session.turn();
                    ui.horizontal(|ui| {
                        let (rect, _) = ui.allocate_exact_size(Vec2::splat(24.0), egui::Sense::hover());
                        ui.painter().circle_filled(rect.center(), 10.0, stone_color(turn));
                        ui.painter().circle_stroke(
                            rect.center(),
                            10.0,
                            egui::Stroke::new(1.0, TEXT_MUTED),
                        );
                        ui.label(
                            RichText::new(format!("{turn} to move"))
                                .size(16.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                    });

                    let detail = if self.session.is_first_move() {
                        "Opening move: one stone".to_string()
                    } else {
                        format!("Stone {} of 2", self.session.pending_moves() + 1)
                    };
                    ui.label(RichText::new(detail).size(12.0).color(TEXT_SECONDARY));
                }
            }

            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Stones: {}", self.session.board().stone_count()))
                    .size(11.0)
                    .color(TEXT_MUTED),
            );
        });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                if let Some(pos) = self.board_view.show(ui, &self.session) {
                    match self.session.attempt_move(pos.x, pos.y) {
                        Ok(outcome) => {
                            debug!(?outcome, "move accepted");
                            self.message = None;
                        }
                        Err(e) => self.message = Some(e.to_string()),
                    }
                }
            });
    }

    /// Keyboard shortcuts for the controls
    fn handle_input(&mut self, ctx: &Context) {
        let pressed = ctx.input(|i| {
            [
                (egui::Key::S, Control::Start),
                (egui::Key::R, Control::Resign),
                (egui::Key::C, Control::Commit),
                (egui::Key::W, Control::Withdraw),
                (egui::Key::Backspace, Control::Withdraw),
            ]
            .into_iter()
            .find(|(key, _)| i.key_pressed(*key))
            .map(|(_, control)| control)
        });

        if let Some(control) = pressed {
            if self.session.is_enabled(control) {
                self.activate(control);
            }
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activate_records_rejection() {
        let mut app = GomokuApp::default();
        app.activate(Control::Commit);
        assert_eq!(
            app.message.as_deref(),
            Some("cannot commit while the game is not started")
        );

        app.activate(Control::Start);
        assert_eq!(app.message, None);
        assert_eq!(app.session.phase(), Phase::InProgress);
    }

    #[test]
    fn test_board_size_from_config() {
        let mut config = AppConfig::default();
        config.board.size = 15;
        let app = GomokuApp::with_config(&config);
        assert_eq!(app.session.board().size(), 15);
    }
}
