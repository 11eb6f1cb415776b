//! Verlet point-mass body
//!
//! Position-velocity state advanced by a variable-timestep Verlet scheme
//! with per-body time scaling and air friction. Velocity is derived from
//! the position memory each step, never integrated independently.

use serde::{Serialize, Deserialize};
use tilerig_math::Vec2;

/// Configuration for a [`Body`]
///
/// Every field is independently settable, including to zero; unset fields
/// take the documented defaults (`mass = 1`, `air_friction = 0.1`,
/// `t_scale = 1`, everything else zero).
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct BodyConfig {
    pub mass: f32,
    pub air_friction: f32,
    pub t_scale: f32,
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Default for BodyConfig {
    fn default() -> Self {
        Self {
            mass: 1.0,
            air_friction: 0.1,
            t_scale: 1.0,
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
        }
    }
}

impl BodyConfig {
    /// Set the starting position
    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Set the starting velocity (seeds the position memory)
    pub fn with_velocity(mut self, vx: f32, vy: f32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// Set the mass (must be > 0, it divides the accumulated force)
    pub fn with_mass(mut self, mass: f32) -> Self {
        self.mass = mass;
        self
    }

    /// Set the per-step velocity retention factor, in `[0, 1]`
    pub fn with_air_friction(mut self, air_friction: f32) -> Self {
        self.air_friction = air_friction;
        self
    }

    /// Set the per-body timestep scale
    pub fn with_t_scale(mut self, t_scale: f32) -> Self {
        self.t_scale = t_scale;
        self
    }
}

/// A point mass advanced by Verlet integration
///
/// `(x, y)` is the current position, `(x0, y0)` the previous-step
/// position (the Verlet memory term). `(vx, vy)` is derived each step;
/// after [`Body::update`], `vx == x - x0` and `vy == y - y0` hold by
/// construction.
///
/// `t_scale` scales the effective timestep for this body only (e.g.
/// bullet-time for one entity). `t_scale0` is the previous step's scale,
/// captured each update so the friction term uses the scale that produced
/// `(x0, y0)` while the acceleration term uses the current one.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Body {
    pub force: Vec2,
    pub mass: f32,
    pub air_friction: f32,
    pub t_scale: f32,
    pub t_scale0: f32,
    pub x: f32,
    pub y: f32,
    pub x0: f32,
    pub y0: f32,
    pub vx: f32,
    pub vy: f32,
}

impl Body {
    /// Create a body from a configuration
    ///
    /// The starting velocity seeds the position memory so the first
    /// update sees it as the implied previous velocity.
    pub fn new(config: BodyConfig) -> Self {
        Self {
            force: Vec2::ZERO,
            mass: config.mass,
            air_friction: config.air_friction,
            t_scale: config.t_scale,
            t_scale0: config.t_scale,
            x: config.x,
            y: config.y,
            x0: config.x - config.vx,
            y0: config.y - config.vy,
            vx: config.vx,
            vy: config.vy,
        }
    }

    /// Current position as a vector
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Accumulate a force for the next update
    pub fn add_force(&mut self, force: Vec2) {
        self.force += force;
    }

    /// One Verlet step
    ///
    /// `dt` is this frame's delta, `dt0` the previous frame's, both in
    /// milliseconds. The friction ratio `dt/dt0` keeps drift stable under
    /// variable frame times; callers must never pass a zero `dt0` and
    /// must zero `force` themselves after the call — the integrator does
    /// not clear it.
    pub fn update(&mut self, dt: f32, dt0: f32) {
        debug_assert!(self.mass > 0.0);
        debug_assert!(dt0 * self.t_scale0 != 0.0);

        let ax = self.force.x / self.mass;
        let ay = self.force.y / self.mass;

        let dt = dt * self.t_scale;
        let dt0 = dt0 * self.t_scale0;

        let v0_x = self.x - self.x0;
        let v0_y = self.y - self.y0;

        let new_vx = v0_x * self.air_friction * dt / dt0 + ax * dt * (dt + dt0) / 2.0;
        let new_vy = v0_y * self.air_friction * dt / dt0 + ay * dt * (dt + dt0) / 2.0;

        self.t_scale0 = self.t_scale;

        self.x0 = self.x;
        self.y0 = self.y;
        self.x += new_vx;
        self.y += new_vy;
        self.vx = new_vx;
        self.vy = new_vy;
    }
}

impl Default for Body {
    fn default() -> Self {
        Self::new(BodyConfig::default())
    }
}
