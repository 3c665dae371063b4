// Host-side tests for the visual effect models: typewriter, confetti,
// matrix rain and the tip carousel.

use cyber_firewall::constants::*;
use cyber_firewall::core::typewriter::drained;
use cyber_firewall::core::{Burst, Particle, Rain, TipRotation, Typewriter, CYBER_TIPS};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

// ---------------- Typewriter ----------------

#[test]
fn typewriter_into_empty_region_has_no_separator() {
    assert_eq!(drained("", "> Status: LOCKED"), "> Status: LOCKED");
}

#[test]
fn typewriter_separates_from_existing_content() {
    assert_eq!(drained("> one", "> two"), "> one\n> two");
}

#[test]
fn typewriter_preserves_order_of_multibyte_chars() {
    let text = "> 🎂 cake ✓ 😎";
    let typed: String = Typewriter::new("", text).collect();
    assert_eq!(typed, text);
    assert_eq!(drained("x", text), format!("x\n{}", text));
}

#[test]
fn typewriter_reports_remaining_chars() {
    let mut tw = Typewriter::new("prev", "ab");
    assert_eq!(tw.remaining(), 3);
    assert_eq!(tw.next(), Some('\n'));
    assert_eq!(tw.next(), Some('a'));
    assert!(!tw.is_done());
    assert_eq!(tw.next(), Some('b'));
    assert!(tw.is_done());
    assert_eq!(tw.next(), None);
}

#[test]
fn typewriter_leading_newline_in_text_is_kept() {
    // Reveal lines start with their own blank line on top of the separator.
    assert_eq!(drained("a", "\n> b"), "a\n\n> b");
}

// ---------------- Confetti ----------------

#[test]
fn burst_spawns_eighty_particles_inside_the_viewport() {
    let mut rng = StdRng::seed_from_u64(7);
    let burst = Burst::spawn(&mut rng, 800.0, 600.0);
    assert_eq!(burst.particles.len(), 80);
    for p in &burst.particles {
        assert!((0.0..=800.0).contains(&p.position.x));
        assert!((0.0..=600.0).contains(&p.position.y));
        assert!(CONFETTI_COLORS.contains(&p.color));
        assert!(p.size >= CONFETTI_MIN_SIZE && p.size <= CONFETTI_MIN_SIZE + CONFETTI_SIZE_SPAN);
        assert!(p.velocity.x.abs() <= CONFETTI_MAX_SPEED / 2.0);
        assert_eq!(p.decay, CONFETTI_DECAY);
    }
}

#[test]
fn burst_runs_exactly_its_frame_budget_with_fading_alpha() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut burst = Burst::spawn(&mut rng, 1024.0, 768.0);
    let mut alphas = Vec::new();
    while let Some(alpha) = burst.step() {
        alphas.push(alpha);
    }
    assert_eq!(alphas.len(), 120);
    assert!(alphas.windows(2).all(|w| w[1] <= w[0]));
    assert!(alphas[0] < 1.0);
    assert_eq!(*alphas.last().unwrap(), 0.0);
    assert!(burst.is_finished());
    assert_eq!(burst.step(), None);
    assert_eq!(burst.frame(), 120);
}

#[test]
fn particle_advance_applies_gravity_drag_and_spin() {
    let mut p = Particle {
        position: Vec2::new(10.0, 20.0),
        velocity: Vec2::new(2.0, -4.0),
        size: 4.0,
        color: CONFETTI_COLORS[0],
        rotation_deg: 90.0,
        decay: CONFETTI_DECAY,
    };
    p.advance();
    assert_eq!(p.position, Vec2::new(12.0, 16.0));
    assert!((p.velocity.x - 2.0 * 0.97).abs() < 1e-6);
    assert!((p.velocity.y - (-4.0 + 0.15) * 0.97).abs() < 1e-6);
    assert_eq!(p.rotation_deg, 95.0);
}

#[test]
fn bursts_are_independent_batches() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut first = Burst::spawn(&mut rng, 500.0, 500.0);
    for _ in 0..10 {
        first.step();
    }
    let second = Burst::spawn(&mut rng, 500.0, 500.0);
    assert_eq!(first.frame(), 10);
    assert_eq!(second.frame(), 0);
    assert_eq!(second.alpha(), 1.0);
    assert_eq!(second.particles.len(), 80);
}

// ---------------- Matrix rain ----------------

#[test]
fn rain_has_one_column_per_cell_width() {
    let mut rain = Rain::new(800.0, 600.0);
    assert_eq!(rain.columns(), 50);
    rain.resize(33.0, 600.0);
    assert_eq!(rain.columns(), 2);
    rain.resize(0.0, 0.0);
    assert_eq!(rain.columns(), 0);
}

#[test]
fn rain_tick_paints_each_column_then_moves_down() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut rain = Rain::new(64.0, 10_000.0);
    let glyphs = rain.tick(&mut rng);
    assert_eq!(glyphs.len(), 4);
    for (i, g) in glyphs.iter().enumerate() {
        assert_eq!(g.x, (i as u32 * RAIN_FONT_PX) as f64);
        assert_eq!(g.y, RAIN_FONT_PX as f64);
        assert!(RAIN_GLYPHS.contains(g.ch));
    }
    assert!(rain.drops().iter().all(|&d| d == 2));
}

#[test]
fn rain_columns_never_reset_above_the_bottom_edge() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut rain = Rain::new(160.0, 10_000.0);
    for _ in 0..100 {
        rain.tick(&mut rng);
    }
    assert!(rain.drops().iter().all(|&d| d == 101));
}

#[test]
fn rain_columns_eventually_restart_below_the_bottom_edge() {
    let mut rng = StdRng::seed_from_u64(13);
    let mut rain = Rain::new(16.0, 0.0);
    for _ in 0..1000 {
        rain.tick(&mut rng);
    }
    assert!(rain.drops()[0] < 1001);
}

#[test]
fn rain_resize_restarts_columns_at_the_top() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut rain = Rain::new(48.0, 10_000.0);
    for _ in 0..5 {
        rain.tick(&mut rng);
    }
    rain.resize(96.0, 10_000.0);
    assert_eq!(rain.drops(), &[1; 6]);
}

// ---------------- Tips ----------------

#[test]
fn tips_rotate_in_order_and_wrap() {
    let mut tips = TipRotation::default();
    let shown: Vec<&str> = (0..tips.len() + 1).filter_map(|_| tips.advance()).collect();
    assert_eq!(&shown[..CYBER_TIPS.len()], &CYBER_TIPS[..]);
    assert_eq!(shown[CYBER_TIPS.len()], CYBER_TIPS[0]);
}

#[test]
fn tips_index_returns_to_start_after_a_full_cycle() {
    let mut tips = TipRotation::default();
    let start = tips.index();
    for _ in 0..tips.len() {
        tips.advance();
    }
    assert_eq!(tips.index(), start);
}

#[test]
fn empty_tip_list_shows_nothing() {
    let mut tips = TipRotation::new(&[]);
    assert!(tips.is_empty());
    assert_eq!(tips.advance(), None);
    assert_eq!(tips.index(), 0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn effect_timings_are_sane() {
    assert_eq!(CONFETTI_COUNT, 80);
    assert_eq!(CONFETTI_FRAMES, 120);
    assert!(CONFETTI_DECAY > 0.0 && CONFETTI_DECAY < 1.0);
    assert!((4000..=4500).contains(&TIP_INTERVAL_MS));
    assert_eq!(RAIN_TICK_MS, 50);
    assert!(RAIN_RESET_CHANCE > 0.0 && RAIN_RESET_CHANCE < 0.1);
}
