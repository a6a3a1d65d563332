// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

use glam::Vec3;

use crate::obb::Obb;
use crate::simplex::{Simplex, SimplexStep, evolve};

pub const DEFAULT_MAX_ITERATIONS: usize = 32;
const EPSILON: f32 = 1e-6;

/// Any fixed nonzero seed works: the first two support points establish the
/// real search axis.
const SEED_DIRECTION: Vec3 = Vec3::ONE;

/// Axes tried in order when collinear support points collapse the search
/// direction. An enclosed origin keeps a strictly positive support gap
/// along every direction, so any axis lets the query make progress again;
/// exact surface contact instead runs into the `<= 0` exit.
const FALLBACK_DIRECTIONS: [Vec3; 3] = [Vec3::X, Vec3::Y, Vec3::Z];

/// Boolean overlap test between two world-space corner sets.
///
/// Exact surface contact counts as no overlap, and inconclusive queries
/// (degenerate search direction, iteration budget exhausted) also report no
/// overlap rather than guessing.
pub fn intersects(a: &Obb, b: &Obb) -> bool {
    intersects_with_params(a, b, DEFAULT_MAX_ITERATIONS)
}

pub fn intersects_with_params(a: &Obb, b: &Obb, max_iterations: usize) -> bool {
    let mut simplex = Simplex::new();
    let mut direction = SEED_DIRECTION;

    simplex.push(support_minkowski(a, b, direction));
    direction = -simplex.last();

    if direction.length_squared() <= EPSILON {
        // The first support point is the origin itself: surface contact,
        // which the touching convention classifies as no overlap.
        return false;
    }

    simplex.push(support_minkowski(a, b, direction));
    if simplex.last().dot(direction) < 0.0 {
        // The difference ends before the origin along this axis.
        return false;
    }

    match evolve(simplex, direction) {
        SimplexStep::Continue {
            simplex: next,
            direction: next_direction,
        } => {
            simplex = next;
            direction = next_direction;
        }
        SimplexStep::Enclosed => return true,
    }

    let mut fallbacks = FALLBACK_DIRECTIONS.iter();
    for _ in 0..max_iterations {
        if direction.length_squared() <= EPSILON {
            // Collinear or coplanar support points collapsed the search
            // direction. Deeply nested shapes land here (the first two
            // supports straddle the origin), so retry along a fallback axis
            // instead of giving up; only when every fallback collapses too
            // is the query inconclusive and fails safe.
            match fallbacks.next() {
                Some(axis) => {
                    log::trace!("gjk: degenerate search direction, retrying along {axis}");
                    direction = *axis;
                }
                None => {
                    log::debug!(
                        "gjk: search direction degenerate after every fallback axis, reporting no overlap"
                    );
                    return false;
                }
            }
        }

        simplex.push(support_minkowski(a, b, direction));
        if simplex.last().dot(direction) <= 0.0 {
            // Newest point never reached past the origin, so the Minkowski
            // difference cannot contain it. Equality means exact touching,
            // which is still no overlap.
            return false;
        }

        match evolve(simplex, direction) {
            SimplexStep::Continue {
                simplex: next,
                direction: next_direction,
            } => {
                simplex = next;
                direction = next_direction;
            }
            SimplexStep::Enclosed => return true,
        }
    }

    log::debug!("gjk: no verdict after {max_iterations} iterations, reporting no overlap");
    false
}

fn support_minkowski(a: &Obb, b: &Obb, direction: Vec3) -> Vec3 {
    a.farthest_point(direction) - b.farthest_point(-direction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::obb::cube_corners;
    use glam::{Mat4, Quat};
    use rand::random_range;

    fn cube_at(center: Vec3, half_extent: f32) -> Obb {
        Obb::from_local_corners(&cube_corners(half_extent), Mat4::from_translation(center))
    }

    fn rotated_cube_at(center: Vec3, half_extent: f32, rotation: Quat) -> Obb {
        let transform = Mat4::from_translation(center) * Mat4::from_quat(rotation);
        Obb::from_local_corners(&cube_corners(half_extent), transform)
    }

    #[test]
    fn gjk_no_overlap_separated_cubes() {
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::new(3.0, 0.0, 0.0), 0.25);

        assert!(!intersects(&a, &b));
    }

    #[test]
    fn gjk_overlap_close_cubes() {
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::new(0.1, 0.0, 0.0), 0.25);

        assert!(intersects(&a, &b));
    }

    #[test]
    fn gjk_touching_faces_count_as_no_overlap() {
        // Faces exactly coincident at x = 0.25, zero gap. All coordinates are
        // dyadic so the dot products are exact and hit the <= 0 branch.
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::new(0.5, 0.0, 0.0), 0.25);

        assert!(!intersects(&a, &b));
    }

    #[test]
    fn gjk_overlap_concentric_cubes() {
        // Both first supports land on the seed diagonal, straddling the
        // origin, so the line step collapses the search direction to zero.
        // The fallback axes must recover and still report the overlap.
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::ZERO, 0.05);

        assert!(intersects(&a, &b));
    }

    #[test]
    fn gjk_overlap_nested_cube_on_the_seed_diagonal() {
        // Offsetting the inner cube along (1,1,1) keeps the first two
        // supports exactly collinear with the origin, same collapse as the
        // concentric case but asymmetric.
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::splat(0.03), 0.05);

        assert!(intersects(&a, &b));
    }

    #[test]
    fn gjk_overlap_nested_rotated_cube_off_diagonal() {
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = rotated_cube_at(
            Vec3::new(0.03, 0.025, 0.03),
            0.05,
            Quat::from_euler(glam::EulerRot::XYZ, 0.4, 2.8, -1.2),
        );

        assert!(intersects(&a, &b));
    }

    #[test]
    fn gjk_overlap_nested_cubes() {
        // Small cube just off-center inside a large one.
        let a = cube_at(Vec3::ZERO, 0.2125);
        let b = cube_at(Vec3::new(0.05, 0.02, 0.01), 0.05);

        assert!(intersects(&a, &b));
    }

    #[test]
    fn gjk_overlap_rotated_cubes() {
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = rotated_cube_at(
            Vec3::new(0.4, 0.0, 0.0),
            0.25,
            Quat::from_rotation_z(45.0_f32.to_radians()),
        );

        assert!(intersects(&a, &b));
    }

    #[test]
    fn gjk_no_overlap_rotated_cubes() {
        // Rotated reach along x is 0.25·√2 ≈ 0.354, so 0.7 leaves a gap.
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = rotated_cube_at(
            Vec3::new(0.7, 0.0, 0.0),
            0.25,
            Quat::from_rotation_z(45.0_f32.to_radians()),
        );

        assert!(!intersects(&a, &b));
    }

    #[test]
    fn gjk_argument_order_does_not_change_verdict() {
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::new(0.3, 0.1, 0.0), 0.25);
        let c = cube_at(Vec3::new(2.0, 0.0, 0.0), 0.25);

        assert_eq!(intersects(&a, &b), intersects(&b, &a));
        assert_eq!(intersects(&a, &c), intersects(&c, &a));
    }

    #[test]
    fn gjk_repeated_queries_are_identical() {
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::new(0.3, 0.05, -0.1), 0.25);

        let first = intersects(&a, &b);
        for _ in 0..10 {
            assert_eq!(intersects(&a, &b), first);
        }
    }

    #[test]
    fn gjk_iteration_budget_exhaustion_reports_no_overlap() {
        // Clearly overlapping pair, but a zero budget never reaches a verdict.
        let a = cube_at(Vec3::ZERO, 0.25);
        let b = cube_at(Vec3::new(0.1, 0.0, 0.0), 0.25);

        assert!(intersects(&a, &b));
        assert!(!intersects_with_params(&a, &b, 0));
    }

    #[test]
    fn gjk_randomized_separated_pairs() {
        // Two half-extent-0.25 cubes can never span more than 0.25·√3 each
        // from their centers, so any center distance above 0.87 separates
        // them at every orientation.
        for _ in 0..200 {
            let offset = Vec3::new(
                random_range(1.0..3.0_f32),
                random_range(-0.5..0.5_f32),
                random_range(-0.5..0.5_f32),
            );
            let rotation = Quat::from_euler(
                glam::EulerRot::XYZ,
                random_range(0.0..std::f32::consts::TAU),
                random_range(0.0..std::f32::consts::TAU),
                random_range(0.0..std::f32::consts::TAU),
            );

            let a = cube_at(Vec3::ZERO, 0.25);
            let b = rotated_cube_at(offset, 0.25, rotation);
            assert!(!intersects(&a, &b), "separated pair at {offset:?} reported overlap");
        }
    }

    #[test]
    fn gjk_randomized_nested_pairs() {
        // A small cube strictly inside the anchor overlaps at any rotation.
        for _ in 0..200 {
            let offset = Vec3::new(
                random_range(0.01..0.05_f32),
                random_range(0.01..0.05_f32),
                random_range(0.01..0.05_f32),
            );
            let rotation = Quat::from_euler(
                glam::EulerRot::XYZ,
                random_range(0.0..std::f32::consts::TAU),
                random_range(0.0..std::f32::consts::TAU),
                random_range(0.0..std::f32::consts::TAU),
            );

            let a = cube_at(Vec3::ZERO, 0.25);
            let b = rotated_cube_at(offset, 0.05, rotation);
            assert!(intersects(&a, &b), "nested pair at {offset:?} reported no overlap");
        }
    }
}
