// The particle field behind the page: a fixed-size set of drifting particles
// plus the pairwise connection pass that draws the lattice lines.

use crate::particle::Particle;
use crate::render::Surface;
extern crate nalgebra_glm as glm;

pub struct Field {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
}

impl Field {
    // One particle per this many square pixels of canvas
    pub const DENSITY_AREA: f64 = 15000.0;
    // Line opacity fades to zero at this squared distance
    const FADE_DISTANCE_SQ: f64 = 20000.0;
    const LINE_ALPHA_SCALE: f64 = 0.15;
    const THRESHOLD_DIVISOR: f64 = 7.0;

    pub fn new(width: f64, height: f64) -> Field {
        Field {
            width,
            height,
            particles: Vec::new(),
        }
    }

    // Replaces the whole particle set with freshly randomized particles sized
    // to the current dimensions. Never renders.
    pub fn init(&mut self) {
        let count = (self.width * self.height / Field::DENSITY_AREA).floor() as usize;
        let mut rng = rand::thread_rng();
        self.particles = (0..count)
            .map(|_| Particle::random(&mut rng, self.width, self.height))
            .collect();
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.init();
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    // One frame: clear, step-and-draw every particle in insertion order, then
    // run the connection pass over the updated positions.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) {
        surface.clear();
        for particle in &mut self.particles {
            particle.step(self.width, self.height);
            surface.fill_circle(particle.pos[0], particle.pos[1], particle.radius);
        }
        self.connect(surface);
    }

    // Draws a line between every pair of particles closer than the area-scaled
    // threshold: width/7 * height/7, compared against squared distance, so it
    // deliberately grows with canvas area rather than linearly. Opacity
    // falls off linearly with squared distance and is clamped so pairs past
    // the fade distance but under the threshold don't produce a negative
    // alpha.
    fn connect<S: Surface>(&self, surface: &mut S) {
        let threshold = (self.width / Field::THRESHOLD_DIVISOR)
            * (self.height / Field::THRESHOLD_DIVISOR);
        for a in 0..self.particles.len() {
            for b in a..self.particles.len() {
                if a == b {
                    continue;
                }
                let pa = &self.particles[a];
                let pb = &self.particles[b];
                let dist_sq = glm::distance2(
                    &glm::vec2(pa.pos[0], pa.pos[1]),
                    &glm::vec2(pb.pos[0], pb.pos[1]),
                );
                if dist_sq < threshold {
                    let alpha = ((1.0 - dist_sq / Field::FADE_DISTANCE_SQ)
                        * Field::LINE_ALPHA_SCALE)
                        .max(0.0)
                        .min(1.0);
                    surface.stroke_line(pa.pos[0], pa.pos[1], pb.pos[0], pb.pos[1], alpha);
                }
            }
        }
    }

    #[cfg(test)]
    fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TraceSurface {
        clears: usize,
        circles: Vec<(f64, f64, f64)>,
        lines: Vec<(f64, f64, f64, f64, f64)>,
    }

    impl Surface for TraceSurface {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
            self.circles.push((x, y, radius));
        }

        fn stroke_line(&mut self, from_x: f64, from_y: f64, to_x: f64, to_y: f64, alpha: f64) {
            self.lines.push((from_x, from_y, to_x, to_y, alpha));
        }
    }

    fn still(x: f64, y: f64) -> Particle {
        Particle::new(x, y, 0.0, 0.0, 2.0)
    }

    #[test]
    fn init_count_follows_area_density() {
        let mut field = Field::new(1400.0, 800.0);
        field.init();
        // 1400 * 800 / 15000 = 74.66..., truncated
        assert_eq!(field.len(), 74);
    }

    #[test]
    fn resize_replaces_the_whole_set() {
        let mut field = Field::new(1400.0, 800.0);
        field.init();
        assert_eq!(field.len(), 74);
        field.resize(700.0, 700.0);
        // 700 * 700 / 15000 = 32.66...
        assert_eq!(field.len(), 32);
    }

    #[test]
    fn tick_clears_then_draws_every_particle() {
        let mut field = Field::new(700.0, 700.0);
        field.set_particles(vec![still(10.0, 10.0), still(600.0, 600.0)]);
        let mut surface = TraceSurface::default();
        field.tick(&mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.circles.len(), 2);
        // particles draw in insertion order
        assert_eq!(surface.circles[0].0, 10.0);
        assert_eq!(surface.circles[1].0, 600.0);
    }

    #[test]
    fn connection_threshold_is_area_scaled() {
        // 700x700 canvas: threshold = 100 * 100 = 10000 squared pixels
        let mut field = Field::new(700.0, 700.0);
        let near = (9999.0f64).sqrt();
        let far = (10001.0f64).sqrt();

        field.set_particles(vec![still(0.0, 0.0), still(far, 0.0)]);
        let mut surface = TraceSurface::default();
        field.tick(&mut surface);
        assert!(surface.lines.is_empty());

        field.set_particles(vec![still(0.0, 0.0), still(near, 0.0)]);
        let mut surface = TraceSurface::default();
        field.tick(&mut surface);
        assert_eq!(surface.lines.len(), 1);
        let expected = (1.0 - 9999.0 / 20000.0) * 0.15;
        assert!((surface.lines[0].4 - expected).abs() < 1e-9);
    }

    #[test]
    fn no_self_connections() {
        let mut field = Field::new(700.0, 700.0);
        field.set_particles(vec![still(350.0, 350.0)]);
        let mut surface = TraceSurface::default();
        field.tick(&mut surface);
        assert!(surface.lines.is_empty());
    }

    #[test]
    fn distant_pairs_under_threshold_clamp_to_zero_alpha() {
        // 7000x7000 canvas: threshold = 1000 * 1000, far past the fade distance
        let mut field = Field::new(7000.0, 7000.0);
        field.set_particles(vec![still(0.0, 0.0), still(400.0, 0.0)]);
        let mut surface = TraceSurface::default();
        field.tick(&mut surface);
        assert_eq!(surface.lines.len(), 1);
        assert_eq!(surface.lines[0].4, 0.0);
    }

    #[test]
    fn connection_pass_runs_after_updates() {
        // Two particles closing to within the threshold on this exact step:
        // the line must be drawn from the post-step positions.
        let mut field = Field::new(700.0, 700.0);
        field.set_particles(vec![
            Particle::new(0.0, 0.0, 0.1, 0.0, 2.0),
            Particle::new(100.05, 0.0, 0.0, 0.0, 2.0),
        ]);
        let mut surface = TraceSurface::default();
        field.tick(&mut surface);
        assert_eq!(surface.lines.len(), 1);
        assert!((surface.lines[0].0 - 0.1).abs() < 1e-12);
    }
}
