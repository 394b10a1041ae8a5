use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_new_clamps() {
    assert_eq!(Difficulty::new(1.7).value(), 1.0);
    assert_eq!(Difficulty::new(-0.2).value(), 0.0);
    assert_eq!(Difficulty::new(f64::NAN).value(), DEFAULT_DIFFICULTY);
    assert_eq!(Difficulty::default().value(), 0.3);
}

#[test]
fn test_after_game() {
    let d = Difficulty::new(0.5);
    assert!(close(d.after(GameResult::Win).value(), 0.48));
    assert!(close(d.after(GameResult::Loss).value(), 0.52));
    assert_eq!(d.after(GameResult::Draw), d);
}

#[test]
fn test_steps_stop_at_bounds() {
    assert_eq!(Difficulty::new(1.0).harder().value(), 1.0);
    assert_eq!(Difficulty::new(0.01).easier().value(), 0.0);
}

#[test]
fn test_candidate_pool() {
    assert_eq!(Difficulty::new(1.0).candidate_pool(20), 1);
    assert_eq!(Difficulty::new(0.5).candidate_pool(20), 10);
    assert_eq!(Difficulty::new(0.0).candidate_pool(20), 20);
    assert_eq!(Difficulty::new(0.5).candidate_pool(1), 1);
    assert_eq!(Difficulty::new(0.0).candidate_pool(0), 1);
}
