//! Alignment smoother
//!
//! Derives a separate display position from a body's true continuous
//! position. While the body moves the display tracks it exactly; at rest
//! it snaps to the nearest grid multiple. Transitions between the two
//! states are smoothed over a short time-boxed interpolation window so
//! sprites never pop.
//!
//! The smoother is one-way derived state: it reads the body every tick
//! and never writes it. It is also a valid sensor position source, which
//! lets animation-state decisions probe the displayed position instead
//! of the physical one.

use crate::body::Body;
use tilerig_math::{appr, Vec2};

/// Grid-snapped, time-smoothed display position for a [`Body`]
#[derive(Clone, Copy, Debug)]
pub struct BodyAlign {
    /// Displayed x position
    pub x: f32,
    /// Displayed y position
    pub y: f32,
    size: f32,
    window: f32,
    moving_x: bool,
    moving_y: bool,
    ialign_x: f32,
    ialign_y: f32,
    ialign_y_time: f32,
    from_x: f32,
    from_y: f32,
}

impl BodyAlign {
    /// Create a smoother for a body at rest
    ///
    /// `size` is the grid cell size (snap step), `window` the default
    /// interpolation window length in milliseconds (`ticks.five`).
    pub fn new(body: &Body, size: f32, window: f32) -> Self {
        let x = snap(body.x, size);
        let y = snap(body.y, size);
        Self {
            x,
            y,
            size,
            window,
            moving_x: false,
            moving_y: false,
            ialign_x: 0.0,
            ialign_y: 0.0,
            ialign_y_time: window,
            from_x: x,
            from_y: y,
        }
    }

    /// Displayed position as a vector
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Remaining x interpolation window, zero when not smoothing
    pub fn ialign_x(&self) -> f32 {
        self.ialign_x
    }

    /// Remaining y interpolation window, zero when not smoothing
    pub fn ialign_y(&self) -> f32 {
        self.ialign_y
    }

    /// The x position the display is chasing right now
    pub fn desired_x(&self, body: &Body) -> f32 {
        desired(body.x, self.moving_x, self.size)
    }

    /// The y position the display is chasing right now
    pub fn desired_y(&self, body: &Body) -> f32 {
        desired(body.y, self.moving_y, self.size)
    }

    /// Re-arm the y window with an explicit length
    ///
    /// Used after teleport-like moves (ledge climb) where the default
    /// window is too abrupt.
    pub fn force_smooth_y(&mut self, time: f32) {
        self.ialign_y = time;
        self.ialign_y_time = time;
        self.from_y = self.y;
    }

    /// Recompute the display position from the body's current state
    pub fn update(&mut self, body: &Body, dt: f32) {
        // x axis: fixed default window
        let moving = (body.x - body.x0).abs() > self.size * 0.01;
        if moving != self.moving_x {
            self.moving_x = moving;
            self.ialign_x = self.window;
            self.from_x = self.x;
        }
        let desired_x = desired(body.x, self.moving_x, self.size);
        if self.ialign_x > 0.0 {
            self.ialign_x = appr(self.ialign_x, 0.0, dt);
            let t = 1.0 - self.ialign_x / self.window;
            self.x = self.from_x + (desired_x - self.from_x) * t;
        } else {
            self.x = desired_x;
        }

        // y axis: window length may have been overridden
        let moving = (body.y - body.y0).abs() > self.size * 0.01;
        if moving != self.moving_y {
            self.moving_y = moving;
            self.ialign_y = self.window;
            self.ialign_y_time = self.window;
            self.from_y = self.y;
        }
        let desired_y = desired(body.y, self.moving_y, self.size);
        if self.ialign_y > 0.0 {
            self.ialign_y = appr(self.ialign_y, 0.0, dt);
            let t = 1.0 - self.ialign_y / self.ialign_y_time;
            self.y = self.from_y + (desired_y - self.from_y) * t;
        } else {
            self.y = desired_y;
        }
    }
}

fn snap(pos: f32, size: f32) -> f32 {
    (pos / size).round() * size
}

fn desired(pos: f32, moving: bool, size: f32) -> f32 {
    if moving {
        pos
    } else {
        snap(pos, size)
    }
}
