// Host-side tests for configuration and letter content.

mod support;

use letter_core::constants::*;
use letter_core::*;
use support::*;

#[test]
fn variant_names() {
    assert_eq!(Variant::from_name("classic"), Some(Variant::Classic));
    assert_eq!(Variant::from_name(" keepsake "), Some(Variant::Keepsake));
    assert_eq!(Variant::from_name("Keepsake"), Some(Variant::Keepsake));
    assert_eq!(Variant::from_name("deluxe"), None);
    assert_eq!(Variant::default(), Variant::Classic);
}

#[test]
fn keepsake_writes_faster_and_needs_a_longer_drag() {
    let classic = ExperienceConfig::new(Variant::Classic, MotionPreference::Full);
    let keepsake = ExperienceConfig::new(Variant::Keepsake, MotionPreference::Full);
    assert!(keepsake.drag_threshold > classic.drag_threshold);
    assert!(keepsake.timings.char_interval_ms < classic.timings.char_interval_ms);
    assert_eq!(classic.timings.char_interval_ms, 22.0);
    assert_eq!(keepsake.timings.char_interval_ms, 17.0);
}

#[test]
fn reduced_timings_are_shorter_everywhere() {
    for variant in [Variant::Classic, Variant::Keepsake] {
        let full = Timings::standard(variant);
        let reduced = Timings::for_motion(variant, MotionPreference::Reduced);
        assert_eq!(reduced, Timings::reduced());
        assert!(reduced.intro_ms < full.intro_ms);
        assert!(reduced.seal_break_ms < full.seal_break_ms);
        assert!(reduced.reveal_delay_ms < full.reveal_delay_ms);
        assert!(reduced.char_interval_ms < full.char_interval_ms);
        assert!(reduced.line_pause_ms < full.line_pause_ms);
        assert!(reduced.fold_out_ms < full.fold_out_ms);
    }
}

#[test]
fn reduced_motion_thins_the_sky() {
    let full = ParticleConfig::for_motion(MotionPreference::Full);
    let reduced = ParticleConfig::for_motion(MotionPreference::Reduced);
    assert!(reduced.area_per_star > full.area_per_star);
    assert!(reduced.heart_count_max < full.heart_count_min);
    assert_eq!(reduced.heart_top_margin, full.heart_top_margin);
}

#[test]
fn defaults_validate() {
    for variant in [Variant::Classic, Variant::Keepsake] {
        for motion in [MotionPreference::Full, MotionPreference::Reduced] {
            assert_eq!(ExperienceConfig::new(variant, motion).validate(), Ok(()));
        }
    }
    assert_eq!(ExperienceConfig::default().seed, DEFAULT_SEED);
    assert_eq!(ExperienceConfig::default().with_seed(9).seed, 9);
}

#[test]
fn invalid_values_are_rejected() {
    let mut c = ExperienceConfig::default();
    c.drag_threshold = 0.0;
    assert_eq!(c.validate(), Err(CardError::InvalidThreshold(0.0)));

    let mut c = ExperienceConfig::default();
    c.timings.line_pause_ms = -1.0;
    assert_eq!(
        c.validate(),
        Err(CardError::InvalidTiming {
            name: "line_pause",
            value: -1.0
        })
    );

    let mut c = ExperienceConfig::default();
    c.timings.intro_ms = f64::NAN;
    assert!(matches!(c.validate(), Err(CardError::InvalidTiming { name: "intro", .. })));

    let mut c = ExperienceConfig::default();
    c.particles.heart_count_min = 20;
    assert!(matches!(c.validate(), Err(CardError::InvalidParticles(_))));

    let mut c = ExperienceConfig::default();
    c.particles.area_per_star = 0.0;
    assert!(matches!(c.validate(), Err(CardError::InvalidParticles(_))));
}

#[test]
fn controller_refuses_a_bad_config() {
    let mut config = ExperienceConfig::default();
    config.drag_threshold = -5.0;
    let content = LetterContent::new(["Hi"]).expect("content");
    let result = ExperienceController::new(config, content, ManualClock::new(), SilentBackend);
    assert!(matches!(result, Err(CardError::InvalidThreshold(_))));
}

#[test]
fn letter_needs_at_least_one_line() {
    let empty: [&str; 0] = [];
    assert_eq!(LetterContent::new(empty), Err(CardError::EmptyLetter));
    let content = LetterContent::new(["Dear you,", ""]).expect("two lines");
    assert_eq!(content.lines.len(), 2);
    assert_eq!(content.hints, Hints::default());
}

#[test]
fn custom_hints_reach_the_stage() {
    let hints = Hints {
        ready: "drag me".into(),
        ..Hints::default()
    };
    let content = LetterContent::new(["Hi"]).expect("content").with_hints(hints);
    let clock = ManualClock::new();
    let mut c = ExperienceController::new(
        ExperienceConfig::default(),
        content,
        clock.clone(),
        RecordingBackend::running(),
    )
    .expect("controller");
    ready(&mut c, &clock);
    let cmds = drain(&mut c);
    assert!(cmds.contains(&StageCommand::Hint("drag me".into())));
}

#[test]
fn error_messages_name_the_problem() {
    let e = CardError::InvalidTiming {
        name: "fold_out",
        value: -2.0,
    };
    assert!(e.to_string().contains("fold_out"));
    assert!(!CardError::EmptyLetter.to_string().is_empty());
}

#[test]
fn manual_clock_handles_share_time() {
    let a = ManualClock::new();
    let b = a.clone();
    a.advance(40.0);
    assert_eq!(b.now_ms(), 40.0);
    b.set(5.0);
    assert_eq!(a.now_ms(), 5.0);
    a.advance(-100.0);
    assert_eq!(a.now_ms(), 5.0);
}
