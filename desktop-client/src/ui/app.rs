use common::config::{ConfigManager, FileContentConfigProvider, YamlConfigSerializer};
use common::games::snake::RoundResult;
use common::log;
use eframe::egui;
use ringbuffer::RingBuffer;

use crate::command_sender::CommandSender;
use crate::config::{Config, ThemeName};
use crate::state::{SharedState, ViewState};
use super::board::{render_board, render_hud, render_pause_banner, render_round_over};
use super::celebration::Celebration;
use super::input::{UiAction, read_actions};
use super::theme::Palette;

type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

pub struct DuelSnakeApp {
    shared_state: SharedState,
    command_sender: CommandSender,
    config_manager: ClientConfigManager,
    theme: ThemeName,
    applied_visuals: Option<ThemeName>,
    show_event_log: bool,
    celebration_seed: u64,
    celebration: Option<Celebration>,
    last_celebrated_round: Option<u64>,
}

impl DuelSnakeApp {
    pub fn new(
        shared_state: SharedState,
        command_sender: CommandSender,
        config_manager: ClientConfigManager,
        theme: ThemeName,
        show_event_log: bool,
        celebration_seed: u64,
    ) -> Self {
        Self {
            shared_state,
            command_sender,
            config_manager,
            theme,
            applied_visuals: None,
            show_event_log,
            celebration_seed,
            celebration: None,
            last_celebrated_round: None,
        }
    }

    fn handle_actions(&mut self, ctx: &egui::Context) {
        for action in read_actions(ctx) {
            match action {
                UiAction::Round(command) => self.command_sender.send(command),
                UiAction::CycleTheme => self.cycle_theme(),
            }
        }
    }

    fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        log!("Theme switched to {}", self.theme.label());

        let theme = self.theme;
        if let Err(e) = self.config_manager.update_config(|config| config.theme = theme) {
            log!("Failed to save theme: {}", e);
        }
    }

    fn apply_visuals(&mut self, ctx: &egui::Context, palette: &Palette) {
        if self.applied_visuals == Some(self.theme) {
            return;
        }
        ctx.set_visuals(if palette.dark {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });
        self.applied_visuals = Some(self.theme);
    }

    fn update_celebration(&mut self, view: &ViewState) {
        if let Some(celebration) = &self.celebration
            && (celebration.round_number() != view.round_number
                || celebration.is_finished(celebration.elapsed()))
        {
            self.celebration = None;
        }

        let won = view
            .summary
            .as_ref()
            .is_some_and(|summary| summary.result == RoundResult::Win);
        if won && self.last_celebrated_round != Some(view.round_number) {
            self.last_celebrated_round = Some(view.round_number);
            self.celebration = Some(Celebration::new(self.celebration_seed, view.round_number));
        }
    }

    fn render_event_log(&self, ui: &mut egui::Ui, view: &ViewState) {
        ui.separator();
        ui.heading("Events");
        if view.event_log.is_empty() {
            ui.label(egui::RichText::new("Nothing yet...").italics().color(egui::Color32::GRAY));
        } else {
            for line in &view.event_log {
                ui.label(line);
            }
        }
    }

    fn render_round(&self, ui: &mut egui::Ui, view: &ViewState, palette: &Palette) {
        let Some(snapshot) = &view.snapshot else {
            ui.centered_and_justified(|ui| {
                ui.label("Waiting for round to start...");
            });
            return;
        };

        ui.vertical_centered(|ui| {
            render_hud(ui, snapshot, palette);
            ui.add_space(6.0);

            let board = render_board(ui, snapshot, palette);
            if let Some(summary) = &view.summary {
                render_round_over(ui, board, summary, palette);
            } else if snapshot.is_paused() {
                render_pause_banner(ui, board, palette);
            }
            if let Some(celebration) = &self.celebration {
                celebration.paint(ui.painter(), board, celebration.elapsed(), &palette.confetti());
            }

            ui.add_space(6.0);
            ui.label(format!(
                "Arrows/WASD move | Space/P pause | R reset | T theme ({})",
                self.theme.label()
            ));

            if self.show_event_log {
                self.render_event_log(ui, view);
            }
        });
    }
}

impl eframe::App for DuelSnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.shared_state.has_context() {
            self.shared_state.set_context(ctx.clone());
        }

        self.handle_actions(ctx);

        let palette = Palette::for_theme(self.theme);
        self.apply_visuals(ctx, &palette);

        let Some(view) = self.shared_state.get_view() else {
            return;
        };
        self.update_celebration(&view);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_round(ui, &view, &palette);
        });

        if self.celebration.is_some() {
            ctx.request_repaint();
        }
    }
}
