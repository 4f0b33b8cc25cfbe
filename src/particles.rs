// src/particles.rs
//
// Fondo decorativo de partículas. Recibe su configuración al arrancar y no
// interactúa con el resto del estado.

use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub color: [u8; 3],
    pub opacity: f32,
    pub max_size: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
    pub speed: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 80,
            color: [0x63, 0x66, 0xf1],
            opacity: 0.5,
            max_size: 3.0,
            link_distance: 150.0,
            link_opacity: 0.4,
            speed: 2.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f32; 2],
    pub vel: [f32; 2],
    pub size: f32,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub config: ParticleConfig,
    particles: Vec<Particle>,
    bounds: [f32; 2],
}

impl ParticleField {
    pub fn new(config: ParticleConfig) -> Self {
        Self {
            config,
            particles: Vec::new(),
            bounds: [0.0, 0.0],
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Ajusta el área; si cambia de tamaño se vuelven a sembrar las partículas
    pub fn resize<R: Rng>(&mut self, width: f32, height: f32, rng: &mut R) {
        if self.bounds == [width, height] && !self.particles.is_empty() {
            return;
        }
        self.bounds = [width, height];
        let cfg = self.config;
        self.particles = (0..cfg.count)
            .map(|_| {
                let angle = rng.gen_range(0.0..std::f32::consts::TAU);
                let speed = rng.gen_range(0.2f32..=1.0) * cfg.speed;
                Particle {
                    pos: [
                        rng.gen_range(0.0..=width.max(1.0)),
                        rng.gen_range(0.0..=height.max(1.0)),
                    ],
                    vel: [angle.cos() * speed, angle.sin() * speed],
                    size: rng.gen_range(0.5..=cfg.max_size),
                }
            })
            .collect();
    }

    /// Avanza la simulación; las partículas que salen reaparecen por el lado contrario
    pub fn step(&mut self, dt: f32) {
        let [w, h] = self.bounds;
        if w <= 0.0 || h <= 0.0 {
            return;
        }
        // la velocidad va en píxeles por frame a 60 fps
        let frames = dt * 60.0;
        for p in &mut self.particles {
            p.pos[0] = (p.pos[0] + p.vel[0] * frames).rem_euclid(w);
            p.pos[1] = (p.pos[1] + p.vel[1] * frames).rem_euclid(h);
        }
    }

    /// Pares de partículas a unir con una línea y la opacidad de esa línea
    pub fn links(&self) -> Vec<(usize, usize, f32)> {
        let max = self.config.link_distance;
        let mut out = Vec::new();
        for (i, a) in self.particles.iter().enumerate() {
            for (j, b) in self.particles.iter().enumerate().skip(i + 1) {
                let dx = a.pos[0] - b.pos[0];
                let dy = a.pos[1] - b.pos[1];
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < max {
                    out.push((i, j, self.config.link_opacity * (1.0 - dist / max)));
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn seeding_fills_the_area_with_the_configured_count() {
        let mut field = ParticleField::new(ParticleConfig::default());
        let mut rng = StdRng::seed_from_u64(1);
        field.resize(800.0, 600.0, &mut rng);
        assert_eq!(field.particles().len(), 80);
        assert!(field
            .particles()
            .iter()
            .all(|p| p.pos[0] <= 800.0 && p.pos[1] <= 600.0 && p.size <= 3.0));
    }

    #[test]
    fn particles_wrap_around_the_edges() {
        let mut field = ParticleField::new(ParticleConfig {
            count: 1,
            ..ParticleConfig::default()
        });
        let mut rng = StdRng::seed_from_u64(2);
        field.resize(100.0, 100.0, &mut rng);
        for _ in 0..500 {
            field.step(1.0 / 60.0);
        }
        let p = field.particles()[0];
        assert!((0.0..100.0).contains(&p.pos[0]));
        assert!((0.0..100.0).contains(&p.pos[1]));
    }

    #[test]
    fn only_close_particles_are_linked() {
        let mut field = ParticleField::new(ParticleConfig {
            count: 0,
            ..ParticleConfig::default()
        });
        field.bounds = [1000.0, 1000.0];
        field.particles = vec![
            Particle { pos: [0.0, 0.0], vel: [0.0, 0.0], size: 1.0 },
            Particle { pos: [100.0, 0.0], vel: [0.0, 0.0], size: 1.0 },
            Particle { pos: [900.0, 900.0], vel: [0.0, 0.0], size: 1.0 },
        ];
        let links = field.links();
        assert_eq!(links.len(), 1);
        assert_eq!((links[0].0, links[0].1), (0, 1));
    }
}
