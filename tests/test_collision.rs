use dino_runner::collision::collides;
use dino_runner::entities::Rect;

use proptest::prelude::*;

fn rect() -> impl Strategy<Value = Rect> {
    (-500.0..500.0f64, -500.0..500.0f64, 0.5..200.0f64, 0.5..200.0f64)
        .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
}

#[test]
fn overlapping_boxes_collide() {
    let a = Rect::new(50.0, 300.0, 80.0, 80.0);
    let b = Rect::new(100.0, 340.0, 40.0, 40.0);
    assert!(collides(&a, &b));
    assert!(collides(&b, &a));
}

#[test]
fn touching_edges_do_not_collide() {
    // Half-open intervals: sharing an edge is not an overlap
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let right = Rect::new(10.0, 0.0, 10.0, 10.0);
    let below = Rect::new(0.0, 10.0, 10.0, 10.0);
    assert!(!collides(&a, &right));
    assert!(!collides(&a, &below));
}

#[test]
fn overlap_on_one_axis_only_is_not_a_collision() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    let same_column = Rect::new(2.0, 50.0, 4.0, 4.0);
    let same_row = Rect::new(50.0, 2.0, 4.0, 4.0);
    assert!(!collides(&a, &same_column));
    assert!(!collides(&a, &same_row));
}

#[test]
fn contained_box_collides() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
    let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
    assert!(collides(&outer, &inner));
    assert!(collides(&inner, &outer));
}

#[test]
fn player_clears_ground_hazard_at_jump_apex() {
    // Default geometry: apex of a jump is y = 300 - 210 = 90
    let player = Rect::new(50.0, 90.0, 80.0, 80.0);
    let cactus = Rect::new(60.0, 340.0, 40.0, 40.0);
    assert!(!collides(&player, &cactus));
}

proptest! {
    #[test]
    fn collision_is_symmetric(a in rect(), b in rect()) {
        prop_assert_eq!(collides(&a, &b), collides(&b, &a));
    }

    #[test]
    fn identical_boxes_always_collide(a in rect()) {
        prop_assert!(collides(&a, &a));
    }

    #[test]
    fn horizontally_separated_boxes_never_collide(a in rect(), b in rect(), gap in 0.0..50.0f64) {
        let moved = Rect::new(a.right() + gap, b.y, b.width, b.height);
        prop_assert!(!collides(&a, &moved));
        prop_assert!(!collides(&moved, &a));
    }

    #[test]
    fn vertically_separated_boxes_never_collide(a in rect(), b in rect(), gap in 0.0..50.0f64) {
        let moved = Rect::new(b.x, a.bottom() + gap, b.width, b.height);
        prop_assert!(!collides(&a, &moved));
        prop_assert!(!collides(&moved, &a));
    }
}
