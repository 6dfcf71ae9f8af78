//! Main application for the Zobang GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::session::{GameOutcome, Session};
use super::theme::*;
use crate::Stone;

fn color_name(stone: Stone) -> &'static str {
    match stone {
        Stone::Black => "BLACK",
        Stone::White => "WHITE",
        Stone::Empty => "-",
    }
}

/// Main Zobang application
pub struct ZobangApp {
    session: Session,
    board_view: BoardView,
    show_debug: bool,
}

impl ZobangApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, human_color: Stone, engine_first: bool) -> Self {
        Self {
            session: Session::new(human_color, engine_first),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self, human_color: Stone) {
        let engine_first = self.session.engine_first;
        self.session.reset(human_color, engine_first);
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play White)").clicked() {
                        self.new_game(Stone::White);
                        ui.close_menu();
                    }
                    if ui.button("New Game (play Black)").clicked() {
                        self.new_game(Stone::Black);
                        ui.close_menu();
                    }
                    ui.checkbox(&mut self.session.engine_first, "Engine moves first");
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.session.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("You: {}", color_name(self.session.human_color)));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.session.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = &self.session.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
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

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("ZOBANG").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.session.current_turn;
            let (fill, rim) = match turn {
                Stone::Black => (BLACK_STONE, BLACK_STONE_HIGHLIGHT),
                _ => (WHITE_STONE, WHITE_STONE_SHADOW),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, rim);
                ui.painter().circle_filled(rect.center(), 19.0, fill);

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name(turn)).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.session.is_ai_thinking() {
                        let secs = self
                            .session
                            .ai_thinking_elapsed()
                            .map_or(0.0, |elapsed| elapsed.as_secs_f32());
                        (format!("Engine thinking... {secs:.1}s"), STATUS_BUSY)
                    } else if self.session.game_over.is_some() {
                        ("Game Over".to_string(), WIN_HIGHLIGHT)
                    } else if self.session.is_human_turn() {
                        ("Your turn".to_string(), STATUS_OK)
                    } else {
                        ("Engine to move".to_string(), TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Undo (U)").clicked() {
                    self.session.undo();
                }
                ui.add_space(4.0);
                if ui.button("New Game (N)").clicked() {
                    self.new_game(self.session.human_color);
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.session.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Statistics of the engine's latest reply
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ENGINE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.session.last_ai_result else {
                ui.label(RichText::new("Waiting for engine...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("Score: {}", result.score)).size(10.0).color(TEXT_SECONDARY));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_SECONDARY));
                        ui.label(RichText::new(format!("{} nodes", result.nodes)).size(10.0).color(TEXT_MUTED));
                    });
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("-> {}", result.chosen_move))
                    .size(12.0)
                    .strong()
                    .color(WIN_HIGHLIGHT),
            );
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: GameOutcome) {
        let headline = match outcome {
            GameOutcome::Winner(winner) if winner == self.session.human_color => "YOU WIN!".to_string(),
            GameOutcome::Winner(winner) => format!("{} WINS", color_name(winner)),
            GameOutcome::Draw => "DRAW".to_string(),
            GameOutcome::Aborted => "ABORTED".to_string(),
        };
        let detail = match outcome {
            GameOutcome::Winner(_) => "five in a row",
            GameOutcome::Draw => "the board is full",
            GameOutcome::Aborted => "the engine could not move",
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new(detail).size(11.0).color(TEXT_SECONDARY));
                    ui.add_space(12.0);
                    if ui.button("New Game").clicked() {
                        self.new_game(self.session.human_color);
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.label(RichText::new("!").size(14.0).strong().color(STATUS_ERROR));
                    ui.add_space(4.0);
                    ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let accepting_input = self.session.is_human_turn() && !self.session.is_ai_thinking();
            let clicked = self.board_view.show(
                ui,
                self.session.engine.board(),
                self.session.human_color,
                self.session.last_engine_move,
                accepting_input,
            );

            if let Some(pos) = clicked {
                if let Err(msg) = self.session.try_place_stone(pos) {
                    self.session.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if undo {
            self.session.undo();
        }
        if new_game {
            self.new_game(self.session.human_color);
        }
    }
}

impl eframe::App for ZobangApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.session.check_ai_result();
        if self.session.is_ai_turn() && !self.session.is_ai_thinking() {
            self.session.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if self.session.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
