// Distributed under the GNU Affero General Public License v3.0 or later.
// See https://www.gnu.org/licenses/agpl-3.0.html for details.

use glam::Vec3;

/// Working simplex for one overlap query: up to four Minkowski-difference
/// points ordered oldest to newest. Owned by a single query and discarded
/// with it; nothing here survives across ticks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Simplex {
    points: [Vec3; 4],
    len: usize,
}

impl Simplex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Two points, `a` newest.
    pub fn line(b: Vec3, a: Vec3) -> Self {
        let mut simplex = Self::new();
        simplex.push(b);
        simplex.push(a);
        simplex
    }

    /// Three points, `a` newest.
    pub fn triangle(c: Vec3, b: Vec3, a: Vec3) -> Self {
        let mut simplex = Self::new();
        simplex.push(c);
        simplex.push(b);
        simplex.push(a);
        simplex
    }

    /// Four points, `a` newest.
    pub fn tetrahedron(d: Vec3, c: Vec3, b: Vec3, a: Vec3) -> Self {
        let mut simplex = Self::new();
        simplex.push(d);
        simplex.push(c);
        simplex.push(b);
        simplex.push(a);
        simplex
    }

    pub fn push(&mut self, point: Vec3) {
        debug_assert!(self.len < 4, "simplex already holds four points");
        self.points[self.len] = point;
        self.len += 1;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Newest point.
    pub fn last(&self) -> Vec3 {
        self.points[self.len - 1]
    }

    pub fn point(&self, index: usize) -> Vec3 {
        self.points[index]
    }
}

/// Outcome of one evolution step, returned by value so the driver threads
/// the simplex and search direction through explicitly instead of mutating
/// shared storage in place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SimplexStep {
    /// Keep searching with this simplex and direction.
    Continue { simplex: Simplex, direction: Vec3 },
    /// The tetrahedron encloses the origin: the shapes overlap.
    Enclosed,
}

/// One step of the origin-containment case analysis, dispatched on simplex
/// length. Only the newest point and up to three earlier points take part.
/// Lengths below two echo the inputs back; the driver never produces them.
pub fn evolve(simplex: Simplex, direction: Vec3) -> SimplexStep {
    match simplex.len() {
        2 => line_step(simplex),
        3 => triangle_step(simplex),
        4 => tetrahedron_step(simplex),
        _ => SimplexStep::Continue { simplex, direction },
    }
}

fn line_step(simplex: Simplex) -> SimplexStep {
    let a = simplex.point(1);
    let b = simplex.point(0);

    let ab = b - a;
    let ao = -a;

    // Component of ao perpendicular to the edge, aimed at the origin. Both
    // points stay; the next support point makes this a triangle.
    SimplexStep::Continue {
        simplex: Simplex::line(b, a),
        direction: ab.cross(ao).cross(ab),
    }
}

fn triangle_step(simplex: Simplex) -> SimplexStep {
    let a = simplex.point(2);
    let b = simplex.point(1);
    let c = simplex.point(0);

    let ab = b - a;
    let ac = c - a;
    let ao = -a;
    let abc = ab.cross(ac);

    if ab.cross(abc).dot(ao) > 0.0 {
        // Origin lies off the ab edge side; c stops helping.
        return SimplexStep::Continue {
            simplex: Simplex::line(b, a),
            direction: ab.cross(ao).cross(ab),
        };
    }

    if abc.cross(ac).dot(ao) > 0.0 {
        // Off the ac edge side; drop b.
        return SimplexStep::Continue {
            simplex: Simplex::line(c, a),
            direction: ac.cross(ao).cross(ac),
        };
    }

    // Inside the triangle's prism region: grow toward a tetrahedron from
    // whichever side of the plane holds the origin. The winding flips with
    // the direction so the tetrahedron case always sees the same orientation.
    if abc.dot(ao) > 0.0 {
        SimplexStep::Continue {
            simplex: Simplex::triangle(c, b, a),
            direction: abc,
        }
    } else {
        SimplexStep::Continue {
            simplex: Simplex::triangle(b, c, a),
            direction: -abc,
        }
    }
}

fn tetrahedron_step(simplex: Simplex) -> SimplexStep {
    let a = simplex.point(3);
    let b = simplex.point(2);
    let c = simplex.point(1);
    let d = simplex.point(0);

    let ab = b - a;
    let ac = c - a;
    let ad = d - a;
    let ao = -a;

    // The three faces sharing the newest vertex, in fixed order. The face
    // the triangle step certified is the fourth and needs no re-test.
    let abc = ab.cross(ac);
    if abc.dot(ao) > 0.0 {
        return face_step(a, b, c, ao, ab, ac, abc);
    }

    let acd = ac.cross(ad);
    if acd.dot(ao) > 0.0 {
        return face_step(a, c, d, ao, ac, ad, acd);
    }

    let adb = ad.cross(ab);
    if adb.dot(ao) > 0.0 {
        return face_step(a, d, b, ao, ad, ab, adb);
    }

    // Behind all three faces: the origin is inside the tetrahedron.
    SimplexStep::Enclosed
}

/// Narrows one tetrahedron face the origin lies in front of, relabeled so
/// `b`/`c` are the face's other two vertices: either keep an edge through
/// the newest vertex, or commit the whole face with its normal.
fn face_step(a: Vec3, b: Vec3, c: Vec3, ao: Vec3, ab: Vec3, ac: Vec3, abc: Vec3) -> SimplexStep {
    if ab.cross(abc).dot(ao) > 0.0 {
        return SimplexStep::Continue {
            simplex: Simplex::line(b, a),
            direction: ab.cross(ao).cross(ab),
        };
    }

    if abc.cross(ac).dot(ao) > 0.0 {
        return SimplexStep::Continue {
            simplex: Simplex::line(c, a),
            direction: ac.cross(ao).cross(ac),
        };
    }

    SimplexStep::Continue {
        simplex: Simplex::triangle(c, b, a),
        direction: abc,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simplex_push_orders_oldest_to_newest() {
        let mut simplex = Simplex::new();
        assert!(simplex.is_empty());

        simplex.push(Vec3::X);
        simplex.push(Vec3::Y);
        simplex.push(Vec3::Z);

        assert_eq!(simplex.len(), 3);
        assert_eq!(simplex.point(0), Vec3::X);
        assert_eq!(simplex.last(), Vec3::Z);
    }

    #[test]
    fn line_step_keeps_both_points_and_aims_at_origin() {
        let b = Vec3::new(1.0, 1.0, 0.0);
        let a = Vec3::new(1.0, -1.0, 0.0);

        match evolve(Simplex::line(b, a), Vec3::ONE) {
            SimplexStep::Continue { simplex, direction } => {
                assert_eq!(simplex.len(), 2);
                assert_eq!(simplex.point(0), b);
                assert_eq!(simplex.point(1), a);
                // Edge sits at x = 1; the perpendicular points back at the origin.
                assert_eq!(direction, Vec3::new(-4.0, 0.0, 0.0));
            }
            SimplexStep::Enclosed => panic!("a line can never enclose the origin"),
        }
    }

    #[test]
    fn triangle_step_reduces_to_ab_edge() {
        // Triangle entirely past x = 1; the origin sits off the ab edge side.
        let a = Vec3::new(1.0, 0.0, 0.0);
        let b = Vec3::new(2.0, 1.0, 0.0);
        let c = Vec3::new(2.0, -1.0, 0.0);

        match evolve(Simplex::triangle(c, b, a), Vec3::ONE) {
            SimplexStep::Continue { simplex, direction } => {
                assert_eq!(simplex.len(), 2);
                assert_eq!(simplex.point(0), b);
                assert_eq!(simplex.point(1), a);
                assert_eq!(direction, Vec3::new(-1.0, 1.0, 0.0));
            }
            SimplexStep::Enclosed => panic!("Expected an edge reduction."),
        }
    }

    #[test]
    fn triangle_step_promotes_toward_origin_above_plane() {
        // Origin above the z = -1 plane the triangle spans.
        let a = Vec3::new(0.0, 1.0, -1.0);
        let b = Vec3::new(-1.0, -1.0, -1.0);
        let c = Vec3::new(1.0, -1.0, -1.0);

        match evolve(Simplex::triangle(c, b, a), Vec3::ONE) {
            SimplexStep::Continue { simplex, direction } => {
                assert_eq!(simplex.len(), 3);
                assert_eq!(simplex.point(0), c);
                assert_eq!(simplex.point(1), b);
                assert_eq!(simplex.point(2), a);
                assert_eq!(direction, Vec3::new(0.0, 0.0, 4.0));
            }
            SimplexStep::Enclosed => panic!("A triangle alone never encloses the origin."),
        }
    }

    #[test]
    fn triangle_step_flips_winding_below_plane() {
        // Same triangle shifted to z = 1: origin is now behind the plane, so
        // the two older vertices swap and the direction negates.
        let a = Vec3::new(0.0, 1.0, 1.0);
        let b = Vec3::new(-1.0, -1.0, 1.0);
        let c = Vec3::new(1.0, -1.0, 1.0);

        match evolve(Simplex::triangle(c, b, a), Vec3::ONE) {
            SimplexStep::Continue { simplex, direction } => {
                assert_eq!(simplex.len(), 3);
                assert_eq!(simplex.point(0), b);
                assert_eq!(simplex.point(1), c);
                assert_eq!(simplex.point(2), a);
                assert_eq!(direction, Vec3::new(0.0, 0.0, -4.0));
            }
            SimplexStep::Enclosed => panic!("A triangle alone never encloses the origin."),
        }
    }

    #[test]
    fn tetrahedron_step_detects_enclosed_origin() {
        let d = Vec3::new(-1.0, -1.0, -1.0);
        let c = Vec3::new(-1.0, 1.0, -1.0);
        let b = Vec3::new(1.0, 0.0, -1.0);
        let a = Vec3::new(0.0, 0.0, 1.0);

        let step = evolve(Simplex::tetrahedron(d, c, b, a), Vec3::ONE);
        assert_eq!(step, SimplexStep::Enclosed);
    }

    #[test]
    fn tetrahedron_step_reduces_when_origin_in_front_of_face() {
        // Tetrahedron dangling below the origin: the abc face check passes
        // and its ab edge region wins.
        let d = Vec3::new(-2.0, -2.0, -4.0);
        let c = Vec3::new(-2.0, 2.0, -4.0);
        let b = Vec3::new(2.0, 0.0, -4.0);
        let a = Vec3::new(0.0, 0.0, -1.0);

        match evolve(Simplex::tetrahedron(d, c, b, a), Vec3::ONE) {
            SimplexStep::Continue { simplex, direction } => {
                assert!(simplex.len() < 4);
                assert_eq!(simplex.last(), a);
                // Whatever feature was kept, the new direction must make
                // progress toward the origin from the newest point.
                assert!(direction.dot(-a) > 0.0);
            }
            SimplexStep::Enclosed => panic!("Origin is outside this tetrahedron."),
        }
    }
}
