//! Entity capability contract
//!
//! Every simulated thing implements [`Entity`]: set up once, advance by
//! `(dt, dt0)` each tick, draw against an abstract surface. Cross-cutting
//! concerns wrap an entity by composition rather than inheritance;
//! [`Lifed`] is the one wrapper the core ships, adding elapsed-lifetime
//! tracking.

use crate::draw::DrawSurface;

/// The simulation capability contract
pub trait Entity {
    /// One-time setup; called once before the first update
    fn init(&mut self) {}

    /// Advance by this frame's delta and the previous frame's, both in
    /// milliseconds
    fn update(&mut self, dt: f32, dt0: f32);

    /// Draw the current state onto a surface
    fn draw(&self, surface: &mut dyn DrawSurface);
}

/// Composition wrapper tracking total elapsed lifetime
///
/// Useful for transient entities that expire after a fixed duration;
/// the owner checks [`Lifed::t_life`] and retires the entity itself.
#[derive(Clone, Debug)]
pub struct Lifed<E> {
    inner: E,
    t_life: f32,
}

impl<E> Lifed<E> {
    pub fn new(inner: E) -> Self {
        Self { inner, t_life: 0.0 }
    }

    /// Elapsed lifetime in milliseconds
    pub fn t_life(&self) -> f32 {
        self.t_life
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut E {
        &mut self.inner
    }
}

impl<E: Entity> Entity for Lifed<E> {
    fn init(&mut self) {
        self.inner.init();
    }

    fn update(&mut self, dt: f32, dt0: f32) {
        self.t_life += dt;
        self.inner.update(dt, dt0);
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        self.inner.draw(surface);
    }
}
