use common::games::snake::settings::{CELL_PIXEL_SIZE, GRID_SIZE};
use common::games::snake::{Point, RoundEndReason, RoundSnapshot, RoundSummary};
use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::state::result_label;
use super::theme::Palette;

pub const BOARD_PIXEL_SIZE: f32 = (GRID_SIZE * CELL_PIXEL_SIZE) as f32;

pub fn cell_rect(origin: Pos2, point: Point) -> Rect {
    let cell = CELL_PIXEL_SIZE as f32;
    Rect::from_min_size(
        egui::pos2(origin.x + point.x as f32 * cell, origin.y + point.y as f32 * cell),
        egui::vec2(cell, cell),
    )
}

pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn end_reason_text(reason: RoundEndReason) -> String {
    match reason {
        RoundEndReason::TimeUp => "Time is up".to_string(),
        RoundEndReason::PlayerCollision(collision) => format!("You {}", collision),
    }
}

pub fn render_hud(ui: &mut egui::Ui, snapshot: &RoundSnapshot, palette: &Palette) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("You: {}", snapshot.player_score))
                .color(palette.player_body)
                .size(18.0)
                .strong(),
        );
        ui.separator();
        ui.label(
            egui::RichText::new(format!("AI: {}", snapshot.ai_score))
                .color(palette.ai_body)
                .size(18.0)
                .strong(),
        );
        ui.separator();
        ui.label(egui::RichText::new(format_time(snapshot.time_remaining)).size(18.0));
        ui.separator();
        ui.label(format!("Tick {} ms", snapshot.tick_interval.as_millis()));
    });
}

/// Paints the grid, food and both snakes. Returns the board rect so
/// overlays can be drawn on top.
pub fn render_board(ui: &mut egui::Ui, snapshot: &RoundSnapshot, palette: &Palette) -> Rect {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(BOARD_PIXEL_SIZE, BOARD_PIXEL_SIZE),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, palette.background);

    let grid_stroke = Stroke::new(1.0, palette.grid_line);
    for i in 1..GRID_SIZE {
        let offset = (i * CELL_PIXEL_SIZE) as f32;
        painter.line_segment(
            [egui::pos2(rect.min.x + offset, rect.min.y), egui::pos2(rect.min.x + offset, rect.max.y)],
            grid_stroke,
        );
        painter.line_segment(
            [egui::pos2(rect.min.x, rect.min.y + offset), egui::pos2(rect.max.x, rect.min.y + offset)],
            grid_stroke,
        );
    }

    if let Some(food) = snapshot.food {
        let cell = cell_rect(rect.min, food);
        painter.circle_filled(cell.center(), CELL_PIXEL_SIZE as f32 * 0.4, palette.food);
    }

    paint_snake(&painter, rect.min, &snapshot.ai, palette.ai_head, palette.ai_body);
    paint_snake(&painter, rect.min, &snapshot.player, palette.player_head, palette.player_body);

    rect
}

fn paint_snake(painter: &egui::Painter, origin: Pos2, body: &[Point], head: Color32, rest: Color32) {
    for (i, point) in body.iter().enumerate().rev() {
        let color = if i == 0 { head } else { rest };
        painter.rect_filled(cell_rect(origin, *point).shrink(1.0), 3.0, color);
    }
}

pub fn render_pause_banner(ui: &egui::Ui, board: Rect, palette: &Palette) {
    let painter = ui.painter_at(board);
    painter.rect_filled(board, 0.0, palette.overlay);
    painter.text(
        board.center(),
        Align2::CENTER_BOTTOM,
        "PAUSED",
        FontId::proportional(36.0),
        palette.text,
    );
    painter.text(
        board.center() + egui::vec2(0.0, 8.0),
        Align2::CENTER_TOP,
        "Press Space or P to resume",
        FontId::proportional(16.0),
        palette.text,
    );
}

pub fn render_round_over(ui: &egui::Ui, board: Rect, summary: &RoundSummary, palette: &Palette) {
    let painter = ui.painter_at(board);
    painter.rect_filled(board, 0.0, palette.overlay);

    let center = board.center();
    painter.text(
        center - egui::vec2(0.0, 40.0),
        Align2::CENTER_CENTER,
        result_label(summary.result),
        FontId::proportional(40.0),
        palette.text,
    );
    painter.text(
        center,
        Align2::CENTER_CENTER,
        format!("{} - {}", summary.player_score, summary.ai_score),
        FontId::proportional(24.0),
        palette.text,
    );
    painter.text(
        center + egui::vec2(0.0, 30.0),
        Align2::CENTER_CENTER,
        end_reason_text(summary.reason),
        FontId::proportional(16.0),
        palette.text,
    );
    painter.text(
        center + egui::vec2(0.0, 60.0),
        Align2::CENTER_CENTER,
        "Press R to play again",
        FontId::proportional(16.0),
        palette.text,
    );
}
