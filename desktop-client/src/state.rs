use std::sync::{Arc, Mutex};
use common::games::snake::{RoundEvent, RoundResult, RoundSnapshot, RoundSummary};
use eframe::egui;
use ringbuffer::{AllocRingBuffer, RingBuffer};

#[derive(Clone)]
pub struct ViewState {
    pub snapshot: Option<RoundSnapshot>,
    pub summary: Option<RoundSummary>,
    pub event_log: AllocRingBuffer<String>,
    /// Bumped on every reset so the UI can drop per-round effects.
    pub round_number: u64,
}

/// State shared between the round session task and the egui thread.
#[derive(Clone)]
pub struct SharedState {
    view: Arc<Mutex<ViewState>>,
    context: Arc<Mutex<Option<egui::Context>>>,
}

impl SharedState {
    pub fn new(event_log_lines: usize) -> Self {
        Self {
            view: Arc::new(Mutex::new(ViewState {
                snapshot: None,
                summary: None,
                event_log: AllocRingBuffer::new(event_log_lines.max(1)),
                round_number: 1,
            })),
            context: Arc::new(Mutex::new(None)),
        }
    }

    pub fn has_context(&self) -> bool {
        self.context.lock().map(|c| c.is_some()).unwrap_or(false)
    }

    pub fn set_context(&self, ctx: egui::Context) {
        if let Ok(mut context) = self.context.lock() {
            *context = Some(ctx);
        }
    }

    fn request_repaint(&self) {
        if let Ok(context) = self.context.lock()
            && let Some(ctx) = context.as_ref()
        {
            ctx.request_repaint();
        }
    }

    pub fn update_snapshot(&self, snapshot: RoundSnapshot) {
        if let Ok(mut view) = self.view.lock() {
            if snapshot.events.contains(&RoundEvent::Reset) {
                view.summary = None;
                view.round_number += 1;
                view.event_log.clear();
            }
            for event in &snapshot.events {
                view.event_log.enqueue(describe_event(event));
            }
            view.snapshot = Some(snapshot);
        }
        self.request_repaint();
    }

    pub fn set_summary(&self, summary: RoundSummary) {
        if let Ok(mut view) = self.view.lock() {
            view.summary = Some(summary);
        }
        self.request_repaint();
    }

    pub fn get_view(&self) -> Option<ViewState> {
        self.view.lock().ok().map(|v| v.clone())
    }
}

pub fn describe_event(event: &RoundEvent) -> String {
    match event {
        RoundEvent::PlayerAte { score, .. } => format!("You ate food ({} pts)", score),
        RoundEvent::AiAte { score, .. } => format!("AI ate food ({} pts)", score),
        RoundEvent::AiCrashed { reason, player_score } => {
            format!("AI {} and respawned, you get a bonus ({} pts)", reason, player_score)
        }
        RoundEvent::PlayerCrashed { reason } => format!("You {}", reason),
        RoundEvent::Paused => "Paused".to_string(),
        RoundEvent::Resumed => "Resumed".to_string(),
        RoundEvent::Reset => "New round".to_string(),
        RoundEvent::Over { result, .. } => format!("Round over: {}", result_label(*result)),
    }
}

pub fn result_label(result: RoundResult) -> &'static str {
    match result {
        RoundResult::Win => "You Win!",
        RoundResult::Lose => "You Lose",
        RoundResult::Draw => "Draw",
    }
}
