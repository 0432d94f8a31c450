// Simple particle struct to keep track of individual position, velocity, and radius

use rand::Rng;

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
}

impl Particle {
    pub const MAX_SPEED: f64 = 0.2;
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
        }
    }

    pub fn random<R: Rng>(rng: &mut R, width: f64, height: f64) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let vel_x = rng.gen::<f64>() * (Particle::MAX_SPEED * 2.0) - Particle::MAX_SPEED;
        let vel_y = rng.gen::<f64>() * (Particle::MAX_SPEED * 2.0) - Particle::MAX_SPEED;
        let radius = rng.gen::<f64>() * (Particle::MAX_RADIUS - Particle::MIN_RADIUS)
            + Particle::MIN_RADIUS;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    // Reflective boundary: flip the velocity sign once a coordinate has left the
    // canvas, then advance. A particle may sit at most one step past an edge
    // before the flip brings it back.
    pub fn step(&mut self, width: f64, height: f64) {
        if self.pos[0] > width || self.pos[0] < 0.0 {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] > height || self.pos[1] < 0.0 {
            self.vel[1] = -self.vel[1];
        }
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
    }
}
