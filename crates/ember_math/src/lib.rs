//! Ember math - vector types and scalar ranges shared by the renderer.

// Re-export glam for convenience
pub use glam::*;

mod interval;
pub use interval::Interval;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec3_operations() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vec3::new(5.0, 7.0, 9.0));
        assert_eq!(b / 2.0, Vec3::new(2.0, 2.5, 3.0));
    }
}
