//! The playfield: one level, one player, transient bullets
//!
//! Owns the tile grid and everything simulated against it, and is itself
//! an entity so a host can compose playfields like any other simulated
//! thing. Input arrives as a resolved frame before each update.

use tilerig_core::{DrawSurface, Entity, Lifed, Pool, SpriteRegion};
use tilerig_input::InputFrame;
use tilerig_math::Vec2;
use tilerig_physics::{
    Body, BodyConfig, Player, PlayerConfig, PlayerInput, Pose, Ticks, TileGrid,
};

// Sprite sheet layout: one 16x16 frame per pose, bullet after
const REGION_IDLE: SpriteRegion = SpriteRegion::new(0, 0, 16, 16);
const REGION_WALK: SpriteRegion = SpriteRegion::new(16, 0, 16, 16);
const REGION_AIRBORNE: SpriteRegion = SpriteRegion::new(32, 0, 16, 16);
const REGION_STEP_OFF: SpriteRegion = SpriteRegion::new(48, 0, 16, 16);
const REGION_LEDGE_HANG: SpriteRegion = SpriteRegion::new(64, 0, 16, 16);
const REGION_BULLET: SpriteRegion = SpriteRegion::new(80, 0, 8, 8);

const BULLET_SPEED: f32 = 3.0;
const BULLET_MUZZLE: f32 = 6.0;

fn pose_region(pose: Pose) -> SpriteRegion {
    match pose {
        Pose::Idle => REGION_IDLE,
        Pose::Walk => REGION_WALK,
        Pose::Airborne => REGION_AIRBORNE,
        Pose::StepOff => REGION_STEP_OFF,
        Pose::LedgeHang => REGION_LEDGE_HANG,
    }
}

/// A fired projectile: an undamped drifting body, no gravity
#[derive(Clone, Debug)]
pub struct Bullet {
    body: Body,
}

impl Bullet {
    /// Spawn at a position with a horizontal velocity per step
    pub fn new(x: f32, y: f32, vx: f32) -> Self {
        let body = Body::new(
            BodyConfig::default()
                .with_position(x, y)
                .with_velocity(vx, 0.0)
                .with_air_friction(1.0),
        );
        Self { body }
    }

    pub fn position(&self) -> Vec2 {
        self.body.position()
    }
}

impl Entity for Bullet {
    fn update(&mut self, dt: f32, dt0: f32) {
        self.body.update(dt, dt0);
        self.body.force = Vec2::ZERO;
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        surface.draw(REGION_BULLET, self.body.x, self.body.y, 0.0, 1.0, 1.0);
    }
}

/// One level and everything simulated in it
pub struct Playfield {
    grid: TileGrid,
    player: Player,
    bullets: Pool<Lifed<Bullet>>,
    ticks: Ticks,
    input: InputFrame,
}

impl Playfield {
    pub fn new(grid: TileGrid, spawn: Vec2, config: PlayerConfig, ticks: Ticks) -> Self {
        let cell_size = grid.cell_size();
        Self {
            grid,
            player: Player::new(spawn.x, spawn.y, cell_size, config, ticks),
            bullets: Pool::new(),
            ticks,
            input: InputFrame::default(),
        }
    }

    /// Stage the input frame consumed by the next update
    pub fn set_input(&mut self, input: InputFrame) {
        self.input = input;
    }

    /// Fire a bullet from the player, in the facing direction
    pub fn fire(&mut self) {
        let facing = self.player.facing;
        let pos = self.player.body.position();
        let bullet = Bullet::new(pos.x + facing * BULLET_MUZZLE, pos.y, facing * BULLET_SPEED);
        self.bullets.spawn(Lifed::new(bullet));
        log::debug!("fired bullet at ({:.1}, {:.1})", pos.x, pos.y);
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn grid(&self) -> &TileGrid {
        &self.grid
    }

    pub fn bullet_count(&self) -> usize {
        self.bullets.len()
    }
}

impl Entity for Playfield {
    fn update(&mut self, dt: f32, dt0: f32) {
        let intent = PlayerInput {
            move_x: self.input.move_x(),
            jump: self.input.jump,
        };
        self.player.update(&self.grid, intent, dt, dt0);

        // Bullets die on tile contact or when their lifetime runs out
        let mut dead = Vec::new();
        for (key, bullet) in self.bullets.iter_mut() {
            bullet.update(dt, dt0);
            let pos = bullet.inner().position();
            if self.grid.get_world(pos.x, pos.y) || bullet.t_life() >= self.ticks.seconds {
                dead.push(key);
            }
        }
        for key in dead {
            self.bullets.kill(key);
        }
        self.bullets.sweep();
    }

    fn draw(&self, surface: &mut dyn DrawSurface) {
        // The player renders at the smoothed display position, flipped
        // by facing
        let pos = self.player.align.position();
        surface.draw(
            pose_region(self.player.pose()),
            pos.x,
            pos.y,
            0.0,
            self.player.facing,
            1.0,
        );

        for (_, bullet) in self.bullets.iter() {
            bullet.draw(surface);
        }
    }
}
