use std::time::{Duration, Instant};
use eframe::egui::{self, Color32, Rect};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const CELEBRATION_DURATION: Duration = Duration::from_secs(4);
const PARTICLE_COUNT: usize = 140;
/// Board heights per second squared.
const GRAVITY: f32 = 0.45;

#[derive(Clone, Debug, PartialEq)]
struct Particle {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    size: f32,
    color: usize,
}

/// Confetti burst shown over the board after a won round. Positions are in
/// board-relative units, (0, 0) top left and (1, 1) bottom right.
pub struct Celebration {
    particles: Vec<Particle>,
    round_number: u64,
    started: Instant,
}

impl Celebration {
    pub fn new(seed: u64, round_number: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed ^ round_number);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: rng.random_range(0.0..1.0),
                y: rng.random_range(-0.4..0.0),
                vx: rng.random_range(-0.15..0.15),
                vy: rng.random_range(0.0..0.25),
                size: rng.random_range(2.0..5.0),
                color: rng.random_range(0..5),
            })
            .collect();

        Self {
            particles,
            round_number,
            started: Instant::now(),
        }
    }

    pub fn round_number(&self) -> u64 {
        self.round_number
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= CELEBRATION_DURATION
    }

    fn position_at(particle: &Particle, t: f32) -> (f32, f32) {
        (
            particle.x + particle.vx * t,
            particle.y + particle.vy * t + 0.5 * GRAVITY * t * t,
        )
    }

    pub fn paint(&self, painter: &egui::Painter, board: Rect, elapsed: Duration, colors: &[Color32; 5]) {
        if self.is_finished(elapsed) {
            return;
        }
        let t = elapsed.as_secs_f32();
        let fade = 1.0 - t / CELEBRATION_DURATION.as_secs_f32();
        let painter = painter.with_clip_rect(board);

        for particle in &self.particles {
            let (x, y) = Self::position_at(particle, t);
            let center = egui::pos2(
                board.min.x + x * board.width(),
                board.min.y + y * board.height(),
            );
            let color = colors[particle.color % colors.len()].gamma_multiply(fade);
            painter.circle_filled(center, particle.size, color);
        }
    }
}
