extern crate csnd;

use csnd::{rand31, RandMT};

fn rand31_sequence(start: i32, draws: usize) -> Vec<i32> {
    let mut seed = start;
    (0..draws).map(|_| rand31(&mut seed).unwrap()).collect()
}

#[test]
fn rand31_is_deterministic_and_in_range() {
    let first = rand31_sequence(1956, 1000);
    let second = rand31_sequence(1956, 1000);
    assert_eq!(first, second);
    for value in &first {
        assert!(*value >= 1 && *value <= 2_147_483_646);
    }
    // The recurrence feeds each output back as the next seed.
    let mut seed = 1956;
    let one = rand31(&mut seed).unwrap();
    assert_eq!(seed, one);
    assert_eq!(one, first[0]);
}

#[test]
fn rand31_rejects_out_of_range_seeds() {
    for mut seed in [0, -1, 2_147_483_647] {
        assert!(rand31(&mut seed).is_err());
    }
}

#[test]
fn mt_key_seeding_is_deterministic() {
    let first: Vec<u32> = RandMT::from_key(&[1956]).take(1000).collect();
    let second: Vec<u32> = RandMT::from_key(&[1956]).take(1000).collect();
    assert_eq!(first, second);

    let other: Vec<u32> = RandMT::from_key(&[1957]).take(1000).collect();
    assert_ne!(first, other);
}

#[test]
fn mt_scalar_seeding_is_deterministic() {
    let first: Vec<u32> = RandMT::from_seed(5489).take(100).collect();
    let second: Vec<u32> = RandMT::from_seed(5489).take(100).collect();
    assert_eq!(first, second);
}

#[test]
fn mt_empty_key_uses_the_default_seed() {
    let empty: Vec<u32> = RandMT::from_key(&[]).take(100).collect();
    let default: Vec<u32> = RandMT::from_seed(5489).take(100).collect();
    assert_eq!(empty, default);
}
