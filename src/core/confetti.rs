use crate::constants::*;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub size: f32,
    pub color: &'static str,
    pub rotation_deg: f32,
    pub decay: f32,
}

impl Particle {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let jitter = |rng: &mut R| (rng.gen::<f32>() - 0.5) * CONFETTI_MAX_SPEED;
        let vx = jitter(rng);
        let vy = jitter(rng) - CONFETTI_LIFT;
        Self {
            position: Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height),
            velocity: Vec2::new(vx, vy),
            size: rng.gen::<f32>() * CONFETTI_SIZE_SPAN + CONFETTI_MIN_SIZE,
            color: CONFETTI_COLORS[rng.gen_range(0..CONFETTI_COLORS.len())],
            rotation_deg: rng.gen::<f32>() * 360.0,
            decay: CONFETTI_DECAY,
        }
    }

    /// One frame of motion: move, fall, drag, spin.
    pub fn advance(&mut self) {
        self.position += self.velocity;
        self.velocity.y += CONFETTI_GRAVITY;
        self.velocity *= self.decay;
        self.rotation_deg += CONFETTI_SPIN_DEG;
    }

    #[inline]
    pub fn rotation_rad(&self) -> f64 {
        (self.rotation_deg as f64).to_radians()
    }
}

/// A single confetti batch with a fixed frame budget. Each batch is
/// independent; starting a new one never touches an older one.
#[derive(Clone, Debug)]
pub struct Burst {
    pub particles: Vec<Particle>,
    frame: u32,
    max_frames: u32,
}

impl Burst {
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let particles = (0..CONFETTI_COUNT)
            .map(|_| Particle::random(rng, width, height))
            .collect();
        Self {
            particles,
            frame: 0,
            max_frames: CONFETTI_FRAMES,
        }
    }

    /// Advance every particle and return the opacity to draw this frame with,
    /// or `None` once the budget is spent.
    pub fn step(&mut self) -> Option<f32> {
        if self.is_finished() {
            return None;
        }
        self.frame += 1;
        for p in &mut self.particles {
            p.advance();
        }
        Some(self.alpha())
    }

    /// Linear fade: 1.0 before the first frame, 0.0 on the last.
    #[inline]
    pub fn alpha(&self) -> f32 {
        1.0 - self.frame as f32 / self.max_frames as f32
    }

    #[inline]
    pub fn frame(&self) -> u32 {
        self.frame
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.frame >= self.max_frames
    }
}
