use not_flappy_bird::core::{overlaps, Entity, View};
use not_flappy_bird::types::EntityKind;

fn boxed(x: i32, y: i32, w: i32, h: i32, ox: i32, oy: i32) -> Entity {
    let mut e = Entity::new(EntityKind::Obstacle);
    let body = vec!["#".repeat(w.max(0) as usize); h.max(0) as usize].join("\n");
    e.add_view(View::new(w, h, ox, oy, &body)).unwrap();
    e.set_position(x, y);
    e
}

#[test]
fn touching_edge_is_not_a_collision() {
    let a = boxed(0, 0, 10, 10, 0, 0);
    let b = boxed(10, 0, 10, 10, 0, 0);
    assert!(!overlaps(&a, &b));

    let c = boxed(0, 10, 10, 10, 0, 0);
    assert!(!overlaps(&a, &c));
}

#[test]
fn overlap_is_symmetric() {
    let mut entities = Vec::new();
    for x in -3..4 {
        for y in -3..4 {
            for (w, h) in [(0, 2), (1, 1), (2, 3), (4, 1)] {
                entities.push(boxed(x, y, w, h, (x + y).rem_euclid(2), 0));
            }
        }
    }
    for a in &entities {
        for b in &entities {
            assert_eq!(overlaps(a, b), overlaps(b, a));
        }
    }
}

#[test]
fn zero_sized_box_never_collides_even_with_itself() {
    let flat = boxed(3, 3, 5, 0, 0, 0);
    assert!(!overlaps(&flat, &flat));
    assert!(!overlaps(&flat, &boxed(0, 0, 10, 10, 0, 0)));
}

#[test]
fn entity_without_views_never_collides() {
    let empty = Entity::new(EntityKind::Monster);
    assert!(!overlaps(&empty, &empty));
    assert!(!overlaps(&empty, &boxed(0, 0, 10, 10, 0, 0)));
}
