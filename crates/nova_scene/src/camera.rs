//! Perspective camera and picking rays

use crate::config::CameraConfig;
use nova_core::{Mat4, Vec2, Vec3};

/// Perspective camera looking down −Z from `(0, 0, z)`
///
/// The presentation never rotates the camera; only its depth changes.
#[derive(Clone, Debug, PartialEq)]
pub struct PerspectiveCamera {
    /// Field of view in radians (vertical)
    pub fov: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clipping plane distance
    pub near: f32,
    /// Far clipping plane distance
    pub far: f32,
    position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov,
            aspect,
            near,
            far,
            position: Vec3::ZERO,
        }
    }

    /// Camera from config (fov in degrees), placed at the start depth
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let mut camera = Self::new(config.fov.to_radians(), aspect, config.near, config.far);
        camera.set_z(config.z_start);
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn z(&self) -> f32 {
        self.position.z
    }

    pub fn set_z(&mut self, z: f32) {
        self.position.z = z;
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::translation(-self.position.x, -self.position.y, -self.position.z)
    }

    /// Ray through a point in normalized device coordinates (`[-1, 1]²`, y up)
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_height = (self.fov * 0.5).tan();
        let direction = Vec3::new(ndc.x * half_height * self.aspect, ndc.y * half_height, -1.0);
        Ray::new(self.position, direction.normalize())
    }
}

/// Convert window coordinates to normalized device coordinates
pub fn screen_to_ndc(x: f32, y: f32, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new(x / w * 2.0 - 1.0, -(y / h * 2.0 - 1.0))
}

/// A ray for picking
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// Ray origin
    pub origin: Vec3,
    /// Ray direction (normalized)
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Get point along ray at distance t
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Intersect the line through this ray with the plane `z = plane_z`
    ///
    /// The hit may lie behind the origin. Returns `None` when the ray runs
    /// parallel to the plane.
    pub fn intersect_z_plane(&self, plane_z: f32) -> Option<Vec3> {
        if self.direction.z.abs() < 1e-6 {
            return None;
        }
        let t = (plane_z - self.origin.z) / self.direction.z;
        Some(self.point_at(t))
    }
}
