// FX: a sparkle burst that plays when the prize is revealed.
// Visual: warm glowing dots fly out from the card center, slow down, drift
// down a little and fade out within about a second.

use crate::types::FrameBuffer;
use rand::Rng;

/// Additive blend one RGB triplet at (x,y) with saturation to 255.
#[inline]
fn add_rgb_saturating(fb: &mut FrameBuffer, x: i32, y: i32, r: u8, g: u8, b: u8) {
    if x < 0 || y < 0 { return; }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height { return; }

    let idx = y * fb.width + x;
    let old = fb.pixels[idx];
    let add = |shift: u32, v: u8| (((old >> shift) & 0xFF) + v as u32).min(255) << shift;
    fb.pixels[idx] = add(16, r) | add(8, g) | add(0, b);
}

/// Soft glow disc with Gaussian falloff, brightness scaled by `strength`.
fn draw_glow(fb: &mut FrameBuffer, cx: i32, cy: i32, radius: i32, color: (u8, u8, u8), strength: f32) {
    if radius <= 0 { return; }
    let r2 = (radius * radius) as f32;
    let sigma = radius as f32 * 0.5;
    let denom = 2.0 * sigma * sigma;

    for y in (cy - radius)..=(cy + radius) {
        for x in (cx - radius)..=(cx + radius) {
            let dx = (x - cx) as f32;
            let dy = (y - cy) as f32;
            let d2 = dx * dx + dy * dy;
            if d2 > r2 { continue; }

            let w = (-d2 / denom).exp() * strength;
            let scale = |c: u8| (c as f32 * w).round().clamp(0.0, 255.0) as u8;
            add_rgb_saturating(fb, x, y, scale(color.0), scale(color.1), scale(color.2));
        }
    }
}

/// One sparkle.
pub struct Particle {
    pub x: f32, pub y: f32,        // position in pixels
    pub vx: f32, pub vy: f32,      // velocity in px/sec
    pub life: f32,                 // remaining lifetime in seconds
    pub max_life: f32,
    pub energy: f32,               // brightness multiplier (0..1)
}

pub struct Fx {
    particles: Vec<Particle>,
    max_particles: usize,
}

const SPARKLE_COLORS: [(u8, u8, u8); 3] = [(255, 200, 80), (255, 120, 170), (255, 255, 255)];

impl Fx {
    pub fn new(max_particles: usize) -> Self {
        Self { particles: Vec::with_capacity(max_particles), max_particles }
    }

    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Drop everything, e.g. when the card is replaced.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Spawn up to `count` sparkles flying outward from (x,y).
    pub fn burst<R: Rng + ?Sized>(&mut self, rng: &mut R, x: f32, y: f32, count: usize) {
        for _ in 0..count {
            if self.particles.len() >= self.max_particles { break; }
            let speed = rng.random_range(80.0f32..320.0);
            let angle = rng.random_range(0.0..std::f32::consts::TAU);
            let max_life = rng.random_range(0.5f32..1.1);
            self.particles.push(Particle {
                x, y,
                vx: speed * angle.cos(),
                vy: speed * angle.sin() - rng.random_range(0.0f32..60.0),
                life: max_life,
                max_life,
                energy: rng.random_range(0.6f32..1.0),
            });
        }
    }

    /// Step the simulation by `dt` seconds and draw live sparkles on top of `fb`.
    pub fn update_and_render(&mut self, fb: &mut FrameBuffer, dt: f32) {
        let mut i = 0;
        while i < self.particles.len() {
            let p = &mut self.particles[i];

            p.x += p.vx * dt;
            p.y += p.vy * dt;
            p.vx *= 0.97;
            p.vy = p.vy * 0.97 + 40.0 * dt;
            p.life -= dt;

            if p.life > 0.0 {
                let life01 = (p.life / p.max_life).clamp(0.0, 1.0);
                let radius = (7.0 * life01 + 2.0) as i32;
                let strength = (0.9 * p.energy * life01).clamp(0.0, 1.0);
                let color = SPARKLE_COLORS[i % SPARKLE_COLORS.len()];
                draw_glow(fb, p.x as i32, p.y as i32, radius, color, strength);
                i += 1;
            } else {
                self.particles.swap_remove(i);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn burst_respects_capacity() {
        let mut fx = Fx::new(10);
        fx.burst(&mut StdRng::seed_from_u64(1), 5.0, 5.0, 50);
        assert_eq!(fx.len(), 10);
    }

    #[test]
    fn sparkles_brighten_then_die_out() {
        let mut fx = Fx::new(64);
        fx.burst(&mut StdRng::seed_from_u64(2), 50.0, 50.0, 32);
        let mut fb = FrameBuffer::filled(100, 100, 0);
        fx.update_and_render(&mut fb, 0.016);
        assert!(fb.pixels.iter().any(|&p| p != 0));

        for _ in 0..100 {
            fx.update_and_render(&mut fb, 0.05);
        }
        assert!(fx.is_idle());
    }

    #[test]
    fn additive_blend_saturates() {
        let mut fb = FrameBuffer::filled(1, 1, 0x00_F0_F0_F0);
        add_rgb_saturating(&mut fb, 0, 0, 100, 0, 5);
        assert_eq!(fb.pixels[0], 0x00_FF_F0_F5);
    }
}
