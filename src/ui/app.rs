//! Main application for the Omok GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::trace;

use super::board_view::BoardView;
use super::theme::*;
use crate::config::AppConfig;
use crate::game::{GameState, GameStatus};
use crate::Stone;

/// Main Omok application
pub struct OmokApp {
    state: GameState,
    board_view: BoardView,
    config: AppConfig,
}

impl OmokApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::new(config.cell_size),
            config,
        }
    }

    /// Window size that fits the board and the side panel
    pub fn window_size(config: &AppConfig) -> Vec2 {
        let board = config.cell_size * crate::BOARD_SIZE as f32;
        Vec2::new(board + SIDE_PANEL_WIDTH + 4.0 * BOARD_PADDING, board + 6.0 * BOARD_PADDING + 24.0)
    }

    fn place(&mut self, x: i32, y: i32) {
        if let Err(err) = self.state.place(x, y) {
            trace!(%err, "click ignored");
        }
    }

    fn undo(&mut self) {
        if let Err(err) = self.state.undo() {
            trace!(%err, "undo ignored");
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.config.show_last_move, "Last move marker");
                    ui.checkbox(&mut self.config.highlight_winning_line, "Winning line");
                    ui.checkbox(&mut self.config.show_hover_preview, "Hover preview");
                });
            });
        });
    }

    /// Render the side panel with turn, actions and result
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .exact_width(SIDE_PANEL_WIDTH)
            .resizable(false)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(BOARD_PADDING))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if let GameStatus::Won(winner) = self.state.status() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Clickable label in a rounded frame
    fn action_button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("OMOK").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("오목 · five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.turn();
            let (fill, outline) = match turn {
                Stone::White => (WHITE_STONE, STONE_OUTLINE),
                _ => (BLACK_STONE, TEXT_SECONDARY),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter()
                    .circle(rect.center(), 16.0, fill, egui::Stroke::new(2.0, outline));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.label(RichText::new("CURRENT TURN").size(10.0).color(TEXT_MUTED));
                    ui.label(RichText::new(turn.name()).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_over() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else {
                        ("Click a cell to place", STATUS_PLAYING)
                    };
                    ui.label(RichText::new(status.0).size(11.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "↩ Undo") {
                    self.undo();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "⟲ Reset") {
                    self.state.reset();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Win announcement
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Stone) {
        Frame::new()
            .fill(WIN_CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new(format!("{} wins!", winner.name()))
                            .size(20.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.label(
                        RichText::new(format!("in {} moves", self.state.move_count()))
                            .size(11.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.add_space(12.0);

                    if Self::action_button(ui, "New Game") {
                        self.state.reset();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                if let Some((x, y)) = self.board_view.show(ui, &self.state, &self.config) {
                    self.place(x, y);
                }
            });
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, new_game) = ctx.input(|i| (i.key_pressed(egui::Key::U), i.key_pressed(egui::Key::N)));

        if undo {
            self.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for OmokApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
