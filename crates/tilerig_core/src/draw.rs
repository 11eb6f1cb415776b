//! Rendering collaborator seam
//!
//! The movement core never owns pixel data; it emits draw calls in world
//! pixel units against an abstract surface. The host supplies the real
//! implementation (GPU quad batcher, canvas, whatever).

/// A source rectangle in the host's sprite sheet, in texels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SpriteRegion {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl SpriteRegion {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
}

/// Surface the simulation draws onto
pub trait DrawSurface {
    /// Draw a sprite region at a world position with rotation and scale
    ///
    /// Negative `scale_x` is the conventional horizontal flip for
    /// left-facing sprites.
    fn draw(
        &mut self,
        region: SpriteRegion,
        x: f32,
        y: f32,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
    );
}

/// Surface that logs draw calls at trace level, for headless runs
#[derive(Default)]
pub struct TraceSurface;

impl DrawSurface for TraceSurface {
    fn draw(
        &mut self,
        region: SpriteRegion,
        x: f32,
        y: f32,
        rotation: f32,
        scale_x: f32,
        scale_y: f32,
    ) {
        log::trace!(
            "draw {:?} at ({:.1}, {:.1}) rot {:.2} scale ({:.1}, {:.1})",
            region,
            x,
            y,
            rotation,
            scale_x,
            scale_y
        );
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::RecordingSurface;
    use super::*;

    #[test]
    fn test_recording_surface_captures_calls() {
        let mut surface = RecordingSurface::default();
        let region = SpriteRegion::new(16, 0, 16, 16);
        surface.draw(region, 32.0, 64.0, 0.0, 1.0, 1.0);

        assert_eq!(surface.calls.len(), 1);
        assert_eq!(surface.calls[0], (region, 32.0, 64.0));
    }
}
