use macroquad::prelude::Vec2;

/// Steering arithmetic the Reynolds pipeline needs on top of glam.
pub trait Vec2Ext {
    /// Clamp the length to `max`, keeping direction. Shorter vectors pass
    /// through untouched.
    fn limit(self, max: f32) -> Vec2;

    /// Keep the direction, force the length to `len`. The zero vector has no
    /// direction and normalizes to NaN; that NaN is allowed to ride through
    /// the rest of the pipeline rather than being masked here.
    fn set_magnitude(self, len: f32) -> Vec2;
}

impl Vec2Ext for Vec2 {
    #[inline]
    fn limit(self, max: f32) -> Vec2 {
        self.clamp_length_max(max)
    }

    #[inline]
    fn set_magnitude(self, len: f32) -> Vec2 {
        self.normalize() * len
    }
}
