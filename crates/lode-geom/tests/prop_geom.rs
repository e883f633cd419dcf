use lode_geom::{Aabb2, Vec2};
use proptest::prelude::*;
use proptest::strategy::Strategy;

fn approx(a: f32, b: f32, eps: f32) -> bool {
    (a - b).abs() <= eps
}

fn bounded_f32() -> impl Strategy<Value = f32> {
    (-1.0e5f32..1.0e5f32).prop_filter("finite", |v| v.is_finite())
}

fn arb_vec2() -> impl Strategy<Value = Vec2> {
    (bounded_f32(), bounded_f32()).prop_map(|(x, y)| Vec2::new(x, y))
}

fn arb_cell() -> impl Strategy<Value = (i32, i32)> {
    (-1000i32..1000, -1000i32..1000)
}

proptest! {
    #[test]
    fn vec2_add_commutative(a in arb_vec2(), b in arb_vec2()) {
        let ab = a + b;
        let ba = b + a;
        prop_assert!(approx(ab.x, ba.x, 1e-4) && approx(ab.y, ba.y, 1e-4));
    }

    #[test]
    fn vec2_dot_symmetric(a in arb_vec2(), b in arb_vec2()) {
        prop_assert!(approx(a.dot(b), b.dot(a), 1e-2));
    }

    #[test]
    fn aabb_cell_contains_own_center(c in arb_cell()) {
        let cell = Aabb2::cell(c.0, c.1);
        let center = cell.center();
        prop_assert!(center.x > cell.min.x && center.x < cell.max.x);
        prop_assert!(center.y > cell.min.y && center.y < cell.max.y);
    }

    #[test]
    fn aabb_intersects_symmetric(a in arb_vec2(), b in arb_vec2(), sa in 0.1f32..10.0, sb in 0.1f32..10.0) {
        let ba = Aabb2::from_min_size(a, Vec2::new(sa, sa));
        let bb = Aabb2::from_min_size(b, Vec2::new(sb, sb));
        prop_assert_eq!(ba.intersects(bb), bb.intersects(ba));
    }

    #[test]
    fn aabb_adjacent_cells_do_not_intersect(c in arb_cell()) {
        // Sharing an edge is not an overlap; max edges are exclusive.
        let cell = Aabb2::cell(c.0, c.1);
        let right = Aabb2::cell(c.0 + 1, c.1);
        let above = Aabb2::cell(c.0, c.1 + 1);
        prop_assert!(!cell.intersects(right));
        prop_assert!(!cell.intersects(above));
    }

    #[test]
    fn distance_to_cell_matches_center_distance(p in arb_vec2(), c in arb_cell()) {
        let center = Aabb2::cell(c.0, c.1).center();
        let d = (center - p).length();
        prop_assert!(approx(p.distance_to_cell(c.0, c.1), d, 1e-3));
    }
}
