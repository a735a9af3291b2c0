use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use kitchen_judge_rs::scoring::{MAX_CALORIES, MAX_HEALTH};
use kitchen_judge_rs::{Dish, Ingredient, KitchenError, KosherType};

fn random_ingredient(rng: &mut StdRng) -> Ingredient {
    let kosher_type = KosherType::ALL[rng.gen_range(0..KosherType::ALL.len())];
    let name = format!("ing{}", rng.gen_range(0..6));
    Ingredient::new(
        name,
        kosher_type,
        rng.gen_range(0..=MAX_CALORIES),
        rng.gen_range(0..=MAX_HEALTH),
        rng.gen_range(0.0..50.0),
    )
    .unwrap()
}

fn assert_invariants(dish: &Dish) {
    assert!(dish.len() <= dish.capacity());
    assert!(dish.times_liked() <= dish.times_tasted());

    let held = dish.ingredients();
    for (i, a) in held.iter().enumerate() {
        for b in &held[i + 1..] {
            assert!(a.is_compatible_with(b), "{a} clashes with {b}");
        }
    }

    if let Ok(quality) = dish.quality() {
        assert!((0.0..=10.0).contains(&quality));
    }
}

#[test]
fn test_random_operations_keep_invariants() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let capacity = rng.gen_range(1..6);
        let mut dish = Dish::new("Random", "Chef", capacity).unwrap();

        for _ in 0..30 {
            let before = dish.ingredients().to_vec();
            match rng.gen_range(0..10) {
                0..=5 => {
                    if dish.add_ingredient(random_ingredient(&mut rng)).is_err() {
                        assert_eq!(dish.ingredients(), before.as_slice());
                    }
                }
                6..=8 => {
                    let index = rng.gen_range(0..capacity + 1);
                    if dish.remove_ingredient(index).is_err() {
                        assert_eq!(dish.ingredients(), before.as_slice());
                    }
                }
                _ => dish.taste(rng.gen_bool(0.5)),
            }
            assert_invariants(&dish);
        }
    }
}

#[test]
fn test_tasted_dish_rejects_every_mutation() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..50 {
        let mut dish = Dish::new("Locked", "Chef", 4).unwrap();
        while dish.len() < 2 {
            let _ = dish.add_ingredient(random_ingredient(&mut rng));
        }
        dish.taste(rng.gen_bool(0.5));

        let snapshot = dish.ingredients().to_vec();
        for _ in 0..10 {
            match dish.add_ingredient(random_ingredient(&mut rng)) {
                Err(KitchenError::AlreadyTasted) | Err(KitchenError::KosherViolation { .. }) => {}
                other => panic!("unexpected add result: {other:?}"),
            }
            let index = rng.gen_range(0..dish.len());
            assert_eq!(
                dish.remove_ingredient(index),
                Err(KitchenError::AlreadyTasted)
            );
        }
        assert_eq!(dish.ingredients(), snapshot.as_slice());
    }
}

#[test]
fn test_duplicate_matches_source() {
    let mut rng = StdRng::seed_from_u64(123);

    for _ in 0..50 {
        let mut src = Dish::new("Source", "Chef", 5).unwrap();
        for _ in 0..8 {
            let _ = src.add_ingredient(random_ingredient(&mut rng));
        }
        for _ in 0..rng.gen_range(0..4) {
            src.taste(rng.gen_bool(0.5));
        }

        let copy = src.duplicate().unwrap();
        assert_eq!(copy.ingredients(), src.ingredients());
        assert_eq!(copy.capacity(), src.capacity());
        assert_eq!(copy.times_tasted(), 0);
        assert_eq!(copy.tastiness(), Err(KitchenError::NeverTasted));
        assert_invariants(&copy);
    }
}
