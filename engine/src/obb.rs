// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

use glam::{Mat4, Vec3};

/// Oriented bounding box in world space, stored as its eight corner points.
///
/// The overlap test only ever consumes the corners as a finite point set, so
/// no center/axes form is kept. Corners are refreshed from the owning body's
/// transform every physics tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obb {
    pub corners: [Vec3; 8],
}

impl Default for Obb {
    fn default() -> Self {
        Self {
            corners: [Vec3::ZERO; 8],
        }
    }
}

impl Obb {
    pub fn from_corners(corners: [Vec3; 8]) -> Self {
        Self { corners }
    }

    /// World-space box from a model-space corner set and a transform.
    pub fn from_local_corners(local_corners: &[Vec3; 8], transform: Mat4) -> Self {
        let mut corners = [Vec3::ZERO; 8];
        for (corner, local) in corners.iter_mut().zip(local_corners.iter()) {
            *corner = transform.transform_point3(*local);
        }
        Self { corners }
    }

    /// Farthest corner along `direction` (no normalization needed, only the
    /// argmax matters). Ties keep the first corner encountered, so repeated
    /// calls with equal projections stay deterministic.
    pub fn farthest_point(&self, direction: Vec3) -> Vec3 {
        let mut farthest = self.corners[0];
        let mut max_projection = farthest.dot(direction);

        for corner in &self.corners[1..] {
            let projection = corner.dot(direction);
            if projection > max_projection {
                max_projection = projection;
                farthest = *corner;
            }
        }

        farthest
    }
}

/// Model-space corners of a cube with the given half extent: front face
/// (+z) first, then the back face. The order is part of the behavior, not a
/// convenience — [`Obb::farthest_point`] breaks projection ties by keeping
/// the first corner, so reordering shifts which boundary contacts resolve
/// where.
pub fn cube_corners(half_extent: f32) -> [Vec3; 8] {
    let h = half_extent;
    [
        Vec3::new(-h, -h, h),
        Vec3::new(-h, h, h),
        Vec3::new(h, h, h),
        Vec3::new(h, -h, h),
        Vec3::new(h, h, -h),
        Vec3::new(h, -h, -h),
        Vec3::new(-h, h, -h),
        Vec3::new(-h, -h, -h),
    ]
}
