// Host-side tests for drag tracking and key activation.

use letter_core::constants::*;
use letter_core::*;

#[test]
fn progress_is_clamped_to_percent() {
    assert_eq!(progress_for(0.0, 120.0), 0.0);
    assert_eq!(progress_for(60.0, 120.0), 50.0);
    assert_eq!(progress_for(500.0, 120.0), 100.0);
    assert_eq!(progress_for(-40.0, 120.0), 0.0);
    assert_eq!(progress_for(10.0, 0.0), 100.0);
}

#[test]
fn seal_pose_grows_then_saturates() {
    assert_eq!(seal_pose(0.0), SealPose::NEUTRAL);
    let p = seal_pose(40.0);
    assert_eq!(p.rotate_deg, 40.0 / SEAL_ROTATE_DIVISOR);
    assert_eq!(p.shift_px, 40.0 / SEAL_SHIFT_DIVISOR);
    let far = seal_pose(10_000.0);
    assert_eq!(far.rotate_deg, SEAL_ROTATE_MAX_DEG);
    assert_eq!(far.shift_px, SEAL_SHIFT_MAX_PX);
    assert_eq!(seal_pose(-30.0), SealPose::NEUTRAL);
}

#[test]
fn update_without_press_is_ignored() {
    let mut g = GestureTracker::new(120.0);
    assert!(g.update(300.0).is_none());
    assert!(g.release().is_none());
    assert_eq!(g.progress(), 0.0);
}

#[test]
fn drag_measures_rightward_travel_only() {
    let mut g = GestureTracker::new(120.0);
    assert!(g.begin(200.0));
    assert!(g.is_active());

    let u = g.update(260.0).expect("active session");
    assert_eq!(u.distance, 60.0);
    assert_eq!(u.progress, 50.0);
    assert!(!u.crossed);

    let u = g.update(150.0).expect("active session");
    assert_eq!(u.distance, 0.0);
    assert_eq!(u.pose, SealPose::NEUTRAL);
    assert_eq!(g.session().map(|s| s.origin_x), Some(200.0));
}

#[test]
fn crossing_requires_strictly_more_than_threshold() {
    let mut g = GestureTracker::new(120.0);
    g.begin(0.0);
    assert!(!g.update(120.0).expect("active").crossed);
    assert!(g.update(120.1).expect("active").crossed);
}

#[test]
fn second_press_keeps_the_first_origin() {
    let mut g = GestureTracker::new(120.0);
    assert!(g.begin(10.0));
    assert!(!g.begin(90.0));
    assert_eq!(g.session().map(|s| s.origin_x), Some(10.0));
}

#[test]
fn release_and_complete_settle_progress() {
    let mut g = GestureTracker::new(120.0);
    g.begin(0.0);
    g.update(90.0);
    let s = g.release().expect("session");
    assert_eq!(s.current_distance, 90.0);
    assert_eq!(g.progress(), 0.0);
    assert!(!g.is_active());

    g.begin(0.0);
    g.complete();
    assert!(g.session().is_none());
    assert_eq!(g.progress(), 100.0);

    g.reset();
    assert_eq!(g.progress(), 0.0);
}

#[test]
fn activation_keys() {
    assert!(is_activation_key("Enter"));
    assert!(is_activation_key(" "));
    assert!(is_activation_key("Spacebar"));
    assert!(!is_activation_key("Escape"));
    assert!(!is_activation_key("a"));
    assert!(!is_activation_key(""));
}

#[test]
fn variants_set_the_threshold() {
    assert_eq!(Variant::Classic.drag_threshold(), CLASSIC_DRAG_THRESHOLD);
    assert_eq!(Variant::Keepsake.drag_threshold(), KEEPSAKE_DRAG_THRESHOLD);
    let g = GestureTracker::new(Variant::Keepsake.drag_threshold());
    assert_eq!(g.threshold(), 130.0);
}
