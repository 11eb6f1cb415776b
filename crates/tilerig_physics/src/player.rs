//! Player character controller
//!
//! The reference integration of the movement core: input intent becomes
//! force on a Verlet body, sensors against the tile grid correct the
//! integrated position, and the alignment smoother derives the display
//! position. Tick order is fixed: force accumulation, integration,
//! sensor push-out, alignment, pose selection.

use bitflags::bitflags;
use serde::{Serialize, Deserialize};
use tilerig_math::{appr, Vec2};

use crate::align::BodyAlign;
use crate::body::{Body, BodyConfig};
use crate::grid::TileGrid;
use crate::sensor::{Facing, Sensor};
use crate::ticks::Ticks;

/// Resolved per-tick intent for the player
///
/// `move_x` is a signed horizontal intent, `jump` a non-negative
/// intensity (zero = not pressed).
#[derive(Clone, Copy, Debug, Default)]
pub struct PlayerInput {
    pub move_x: f32,
    pub jump: f32,
}

/// Tuning for the player controller
///
/// Forces are in world units per millisecond squared (the Verlet step
/// multiplies by dt twice); offsets in world units from the body center.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Horizontal force per unit of intent
    pub move_force: f32,
    /// Peak scale of the bell-shaped jump force profile
    pub jump_force: f32,
    /// Downward force while rising
    pub gravity_rise: f32,
    /// Downward force while falling (stronger, for a snappier apex)
    pub gravity_fall: f32,
    /// Upward teleport applied when a ledge climb completes
    pub climb_offset: f32,
    /// Horizontal spread of the foot sensors
    pub foot_spread: f32,
    /// Vertical offset of the foot sensors (body center to sole)
    pub foot_drop: f32,
    /// Vertical offset of the head sensor
    pub head_rise: f32,
    /// Horizontal offset of the wall sensors
    pub side_reach: f32,
    /// Offsets of the ledge sensor pair, just above the body
    pub ledge_reach: f32,
    pub ledge_rise: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            move_force: 0.004,
            jump_force: 0.08,
            gravity_rise: 0.003,
            gravity_fall: 0.006,
            climb_offset: 24.0,
            foot_spread: 3.0,
            foot_drop: 8.0,
            head_rise: 8.0,
            side_reach: 4.0,
            ledge_reach: 5.0,
            ledge_rise: 9.0,
        }
    }
}

bitflags! {
    /// Sensor-derived contact pattern, input to pose selection
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ContactFlags: u32 {
        /// Left foot flush on ground
        const FOOT_LEFT = 1 << 0;
        /// Right foot flush on ground
        const FOOT_RIGHT = 1 << 1;
        /// Ledge sensor touching in front
        const LEDGE_FRONT = 1 << 2;
        /// Ledge sensor touching behind
        const LEDGE_BACK = 1 << 3;
    }
}

/// Animation-facing movement state, derived from contacts each tick
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pose {
    Idle,
    Walk,
    Airborne,
    /// One foot over the edge, the other still on ground
    StepOff,
    LedgeHang,
}

/// The player: a Verlet body, its sensors, and its display smoother
#[derive(Clone, Debug)]
pub struct Player {
    pub body: Body,
    pub align: BodyAlign,
    /// Facing sign: negative is left
    pub facing: f32,
    config: PlayerConfig,
    ticks: Ticks,
    feet: Facing,
    head: Sensor,
    sides: Facing,
    ledge: Facing,
    jump_t: f32,
    climb_t: f32,
    pose: Pose,
}

impl Player {
    pub fn new(x: f32, y: f32, cell_size: f32, config: PlayerConfig, ticks: Ticks) -> Self {
        let body = Body::new(BodyConfig::default().with_position(x, y));
        let align = BodyAlign::new(&body, cell_size, ticks.five);
        Self {
            body,
            align,
            facing: 1.0,
            feet: Facing::new(
                Sensor::new(-config.foot_spread, config.foot_drop),
                Sensor::new(config.foot_spread, config.foot_drop),
            ),
            head: Sensor::new(0.0, -config.head_rise),
            sides: Facing::new(
                Sensor::new(-config.side_reach, 0.0),
                Sensor::new(config.side_reach, 0.0),
            ),
            ledge: Facing::new(
                Sensor::new(-config.ledge_reach, -config.ledge_rise),
                Sensor::new(config.ledge_reach, -config.ledge_rise),
            ),
            config,
            ticks,
            jump_t: 0.0,
            climb_t: 0.0,
            pose: Pose::Idle,
        }
    }

    /// Current animation pose
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Whether a ledge climb is in progress
    pub fn climbing(&self) -> bool {
        self.climb_t > 0.0
    }

    /// Deeper of the two foot readings; zero means grounded
    pub fn foot_down(&self, grid: &TileGrid) -> f32 {
        let (x, y) = (self.body.x, self.body.y);
        self.feet
            .left
            .down(grid, x, y)
            .min(self.feet.right.down(grid, x, y))
    }

    /// Contact pattern at the current physical position
    pub fn contact_flags(&self, grid: &TileGrid) -> ContactFlags {
        let (x, y) = (self.body.x, self.body.y);
        let mut flags = ContactFlags::empty();
        if self.feet.left.down(grid, x, y) == 0.0 {
            flags |= ContactFlags::FOOT_LEFT;
        }
        if self.feet.right.down(grid, x, y) == 0.0 {
            flags |= ContactFlags::FOOT_RIGHT;
        }
        if self.ledge.a_front(grid, x, y, self.facing) <= 0.0 {
            flags |= ContactFlags::LEDGE_FRONT;
        }
        if self.ledge.a_back(grid, x, y, self.facing) <= 0.0 {
            flags |= ContactFlags::LEDGE_BACK;
        }
        flags
    }

    /// One simulation tick
    ///
    /// `dt` is this frame's clamped delta in milliseconds, `dt0` the
    /// previous frame's.
    pub fn update(&mut self, grid: &TileGrid, input: PlayerInput, dt: f32, dt0: f32) {
        if input.move_x != 0.0 {
            self.facing = input.move_x.signum();
        }

        if self.climb_t > 0.0 {
            self.climb_tick(dt);
            return;
        }

        let grounded = self.foot_down(grid) == 0.0;

        // Horizontal intent
        self.body
            .add_force(Vec2::new(input.move_x * self.config.move_force, 0.0));

        // Jump charge: armed only on the ground, bell profile t*(1-t)
        // over the window. Releasing the button stops the force early,
        // which is where variable jump height comes from.
        if grounded && input.jump > 0.0 && self.jump_t == 0.0 {
            self.jump_t = self.ticks.sixth;
        }
        if self.jump_t > 0.0 {
            if input.jump > 0.0 {
                let t = 1.0 - self.jump_t / self.ticks.sixth;
                let profile = t * (1.0 - t);
                self.body.add_force(Vec2::new(
                    0.0,
                    -self.config.jump_force * profile * input.jump,
                ));
            }
            self.jump_t = appr(self.jump_t, 0.0, dt);
        }

        // Asymmetric gravity (+y is down)
        let gravity = if self.body.vy > 0.0 {
            self.config.gravity_fall
        } else {
            self.config.gravity_rise
        };
        self.body.add_force(Vec2::new(0.0, gravity));

        // Ledge grab: airborne with shallow contact in front of the
        // head-level pair and full clearance behind it
        if !grounded && self.start_climb(grid) {
            self.align.update(&self.body, dt);
            self.pose = Pose::LedgeHang;
            return;
        }

        // Integrate, then clear the accumulated force (the integrator
        // leaves it to the caller)
        self.body.update(dt, dt0);
        self.body.force = Vec2::ZERO;

        self.push_out(grid);
        self.align.update(&self.body, dt);
        self.pose = self.select_pose(grid, input);
    }

    fn climb_tick(&mut self, dt: f32) {
        self.body.force = Vec2::ZERO;
        self.climb_t = appr(self.climb_t, 0.0, dt);
        if self.climb_t == 0.0 {
            self.body.y -= self.config.climb_offset;
            self.body.x0 = self.body.x;
            self.body.y0 = self.body.y;
            self.align.force_smooth_y(self.ticks.half);
        }
        self.align.update(&self.body, dt);
        self.pose = Pose::LedgeHang;
    }

    fn start_climb(&mut self, grid: &TileGrid) -> bool {
        let (x, y) = (self.body.x, self.body.y);
        let front = self.ledge.a_front(grid, x, y, self.facing);
        let back = self.ledge.a_back(grid, x, y, self.facing);
        let size = grid.cell_size() * 4.0;

        let shallow = front <= 0.0 && front > -grid.cell_size();
        if shallow && back >= size {
            self.climb_t = self.ticks.lengths;
            // Freeze: collapse the position memory so the hang carries
            // no residual velocity
            self.body.x0 = self.body.x;
            self.body.y0 = self.body.y;
            self.body.force = Vec2::ZERO;
            true
        } else {
            false
        }
    }

    /// Exact snap-back out of overlapping tiles, every frame it occurs
    fn push_out(&mut self, grid: &TileGrid) {
        let down = self.foot_down(grid);
        if down < 0.0 {
            self.body.y += down;
        }

        let (x, y) = (self.body.x, self.body.y);
        let up = self.head.up(grid, x, y);
        if up < 0.0 {
            self.body.y -= up;
        }

        let (x, y) = (self.body.x, self.body.y);
        let left = self.sides.left.left(grid, x, y);
        if left < 0.0 {
            self.body.x -= left;
        }
        let right = self.sides.right.right(grid, x, y);
        if right < 0.0 {
            self.body.x += right;
        }
    }

    fn select_pose(&self, grid: &TileGrid, input: PlayerInput) -> Pose {
        let flags = self.contact_flags(grid);
        let feet = flags & (ContactFlags::FOOT_LEFT | ContactFlags::FOOT_RIGHT);

        if feet == ContactFlags::FOOT_LEFT | ContactFlags::FOOT_RIGHT {
            if input.move_x != 0.0 {
                Pose::Walk
            } else {
                Pose::Idle
            }
        } else if feet.is_empty() {
            Pose::Airborne
        } else {
            Pose::StepOff
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELL: f32 = 16.0;
    const DT: f32 = 1000.0 / 60.0;

    /// 16x16 cells with a solid floor on row 6 (world y in [96, 112))
    fn floored_grid() -> TileGrid {
        let mut grid = TileGrid::new(16, 16, CELL);
        for ix in 0..16 {
            grid.set(ix, 6, true);
        }
        grid
    }

    fn player_at(x: f32, y: f32) -> Player {
        Player::new(x, y, CELL, PlayerConfig::default(), Ticks::default())
    }

    fn step(player: &mut Player, grid: &TileGrid, input: PlayerInput, n: usize) {
        for _ in 0..n {
            player.update(grid, input, DT, DT);
        }
    }

    #[test]
    fn test_falls_and_lands_flush() {
        let grid = floored_grid();
        // Feet at y+8; floor top edge at y=96, so rest is y in [88, 89)
        let mut player = player_at(64.0, 48.0);

        let mut saw_airborne = false;
        for _ in 0..240 {
            player.update(&grid, PlayerInput::default(), DT, DT);
            let down = player.foot_down(&grid);
            assert!(down >= 0.0, "penetration must never survive a tick");
            if down > 0.0 {
                saw_airborne = true;
            }
        }

        assert!(saw_airborne);
        assert_eq!(player.foot_down(&grid), 0.0, "should come to rest grounded");
        assert_eq!(player.pose(), Pose::Idle);
    }

    #[test]
    fn test_walk_accelerates_and_faces() {
        let grid = floored_grid();
        let mut player = player_at(64.0, 88.0);
        let input = PlayerInput { move_x: 1.0, jump: 0.0 };

        step(&mut player, &grid, input, 30);

        assert!(player.body.x > 64.0);
        assert_eq!(player.facing, 1.0);
        assert_eq!(player.pose(), Pose::Walk);

        let back = PlayerInput { move_x: -1.0, jump: 0.0 };
        step(&mut player, &grid, back, 1);
        assert_eq!(player.facing, -1.0);
    }

    #[test]
    fn test_jump_rises_from_ground() {
        let grid = floored_grid();
        let mut player = player_at(64.0, 88.0);
        let input = PlayerInput { move_x: 0.0, jump: 1.0 };

        step(&mut player, &grid, input, 10);

        assert!(player.body.y < 87.0, "jump should lift the body");
        assert_eq!(player.pose(), Pose::Airborne);
    }

    #[test]
    fn test_released_jump_is_shorter() {
        let grid = floored_grid();

        let mut held = player_at(64.0, 88.0);
        let mut tapped = player_at(64.0, 88.0);
        let jump = PlayerInput { move_x: 0.0, jump: 1.0 };

        // Held: force over the whole charge window
        step(&mut held, &grid, jump, 10);
        // Tapped: released after two ticks
        step(&mut tapped, &grid, jump, 2);
        step(&mut tapped, &grid, PlayerInput::default(), 8);

        assert!(
            held.body.y < tapped.body.y,
            "holding jump must rise higher (held {} vs tapped {})",
            held.body.y,
            tapped.body.y
        );
    }

    #[test]
    fn test_jump_not_armed_in_air() {
        let grid = floored_grid();
        let mut player = player_at(64.0, 30.0);
        let input = PlayerInput { move_x: 0.0, jump: 1.0 };

        player.update(&grid, input, DT, DT);
        // Airborne on the first tick: the charge must not arm
        assert_eq!(player.jump_t, 0.0);
    }

    #[test]
    fn test_wall_push_out_exact() {
        let mut grid = floored_grid();
        // Wall column at x in [96, 112)
        for iy in 0..6 {
            grid.set(6, iy, true);
        }
        let mut player = player_at(64.0, 88.0);
        let input = PlayerInput { move_x: 1.0, jump: 0.0 };

        step(&mut player, &grid, input, 300);

        // Side sensor reaches 4 units right of center; never inside the wall
        let reading = player.sides.right.right(&grid, player.body.x, player.body.y);
        assert!(reading >= 0.0);
        assert!(player.body.x + 4.0 < 97.0, "stopped at the wall face");
    }

    #[test]
    fn test_step_off_pose_at_edge() {
        let mut grid = TileGrid::new(16, 16, CELL);
        // Floor only on cells 0..=4 (world x < 80)
        for ix in 0..=4 {
            grid.set(ix, 6, true);
        }
        // Right foot (x+3) past the edge, left foot (x-3) on it
        let mut player = player_at(79.0, 88.0);
        player.update(&grid, PlayerInput::default(), DT, DT);

        assert_eq!(player.pose(), Pose::StepOff);
    }

    #[test]
    fn test_ledge_grab_and_climb() {
        let mut grid = TileGrid::new(16, 16, CELL);
        // A ledge block at cells x=5..16, y=5 (top edge at y=80)
        for ix in 5..16 {
            grid.set(ix, 5, true);
        }

        // Airborne next to the ledge, facing right: the front ledge
        // sensor (x+5, y-9) probes into the block, the back one is clear
        let mut player = player_at(78.0, 95.0);
        player.facing = 1.0;

        player.update(&grid, PlayerInput::default(), DT, DT);
        assert!(player.climbing(), "ledge conditions should start a climb");
        assert_eq!(player.pose(), Pose::LedgeHang);
        let hang_y = player.body.y;

        // Body frozen during the climb
        step(&mut player, &grid, PlayerInput::default(), 5);
        assert_eq!(player.body.y, hang_y);
        assert!(player.climbing());

        // Let the climb window elapse; the final climb tick teleports up
        let mut guard = 0;
        while player.climbing() && guard < 30 {
            player.update(&grid, PlayerInput::default(), DT, DT);
            guard += 1;
        }
        assert!(!player.climbing());
        assert_eq!(player.body.y, hang_y - 24.0);
        assert!(player.align.ialign_y() > 0.0, "long smoothing window armed");
    }

    #[test]
    fn test_contact_flags_on_ground() {
        let grid = floored_grid();
        let player = player_at(64.0, 88.0);
        let flags = player.contact_flags(&grid);
        assert!(flags.contains(ContactFlags::FOOT_LEFT));
        assert!(flags.contains(ContactFlags::FOOT_RIGHT));
        assert!(!flags.contains(ContactFlags::LEDGE_FRONT));
    }
}
