// Host-side tests for the star and heart layer.

mod support;

use glam::Vec2;
use letter_core::constants::*;
use letter_core::*;
use support::*;

#[derive(Default)]
struct CountingCanvas {
    clears: usize,
    circles: usize,
    paths: Vec<Vec<PathSegment>>,
}

impl ParticleCanvas for CountingCanvas {
    fn clear(&mut self, _width: f32, _height: f32) {
        self.clears += 1;
    }

    fn fill_circle(&mut self, _center: Vec2, _radius: f32, _color: Rgba) {
        self.circles += 1;
    }

    fn fill_path(&mut self, path: &[PathSegment], _color: Rgba) {
        self.paths.push(path.to_vec());
    }
}

fn field(motion: MotionPreference, seed: u64) -> ParticleField {
    ParticleField::new(ParticleConfig::for_motion(motion), seed)
}

#[test]
fn star_count_follows_viewport_area() {
    let mut full = field(MotionPreference::Full, 1);
    full.resize(1280.0, 720.0);
    assert_eq!(full.stars().len(), 61);

    let mut reduced = field(MotionPreference::Reduced, 1);
    reduced.resize(1280.0, 720.0);
    assert_eq!(reduced.stars().len(), 28);

    full.resize(100.0, 100.0);
    assert_eq!(full.stars().len(), 0);
}

#[test]
fn heart_count_stays_in_range() {
    for seed in 0..32 {
        let mut full = field(MotionPreference::Full, seed);
        full.resize(800.0, 600.0);
        let n = full.hearts().len();
        assert!((HEART_COUNT_MIN..=HEART_COUNT_MAX).contains(&n), "{n} hearts");

        let mut reduced = field(MotionPreference::Reduced, seed);
        reduced.resize(800.0, 600.0);
        let n = reduced.hearts().len();
        assert!(
            (HEART_COUNT_MIN_REDUCED..=HEART_COUNT_MAX_REDUCED).contains(&n),
            "{n} hearts"
        );
    }
}

#[test]
fn zero_sized_viewport_has_no_particles() {
    let mut f = field(MotionPreference::Full, 3);
    f.resize(0.0, 0.0);
    assert!(f.stars().is_empty());
    assert!(f.hearts().is_empty());
    f.step(1.0 / 60.0);

    let mut canvas = CountingCanvas::default();
    f.render(&mut canvas);
    assert_eq!(canvas.clears, 1);
    assert_eq!(canvas.circles, 0);
    assert!(canvas.paths.is_empty());
}

#[test]
fn initial_particles_lie_inside_the_viewport() {
    let mut f = field(MotionPreference::Full, 9);
    f.resize(640.0, 480.0);
    for s in f.stars() {
        assert!(s.pos.x >= 0.0 && s.pos.x <= 640.0);
        assert!(s.pos.y >= 0.0 && s.pos.y <= 480.0);
        assert!(s.radius >= STAR_RADIUS_MIN && s.radius <= STAR_RADIUS_MIN + STAR_RADIUS_SPAN);
    }
    for h in f.hearts() {
        assert!(h.pos.y >= 0.0 && h.pos.y <= 480.0);
        assert!(h.size >= HEART_SIZE_MIN && h.size <= HEART_SIZE_MIN + HEART_SIZE_SPAN);
    }
}

#[test]
fn star_alpha_stays_within_bounds() {
    let mut f = field(MotionPreference::Full, 11);
    f.resize(1280.0, 720.0);
    let mut dt = XorShift(0x9e37_79b9);
    for _ in 0..5_000 {
        f.step(dt.next_f32() * 0.2);
        for s in f.stars() {
            assert!(s.alpha >= STAR_ALPHA_MIN && s.alpha <= STAR_ALPHA_MAX, "alpha {}", s.alpha);
        }
    }
}

#[test]
fn hearts_wrap_back_below_the_viewport() {
    let (w, h) = (400.0, 300.0);
    let mut f = field(MotionPreference::Full, 5);
    f.resize(w, h);
    let count = f.hearts().len();
    let mut wrapped = false;
    let mut last: Vec<f32> = f.hearts().iter().map(|h| h.pos.y).collect();
    for _ in 0..10_000 {
        f.step(MAX_FRAME_DT_SEC);
        assert_eq!(f.hearts().len(), count);
        for (i, heart) in f.hearts().iter().enumerate() {
            assert!(heart.pos.y >= -HEART_TOP_MARGIN, "y {}", heart.pos.y);
            assert!(heart.pos.y <= h + HEART_SPAWN_DEPTH, "y {}", heart.pos.y);
            assert!(heart.pos.x >= 0.0 && heart.pos.x <= w);
            if heart.pos.y > last[i] {
                wrapped = true;
            }
            last[i] = heart.pos.y;
        }
    }
    assert!(wrapped, "hearts should recycle after leaving the top");
}

#[test]
fn step_clamps_long_frames() {
    let mut a = field(MotionPreference::Full, 21);
    let mut b = field(MotionPreference::Full, 21);
    a.resize(500.0, 500.0);
    b.resize(500.0, 500.0);
    a.step(5.0);
    b.step(MAX_FRAME_DT_SEC);
    assert_eq!(a.hearts(), b.hearts());
    assert_eq!(a.stars(), b.stars());
}

#[test]
fn negative_dt_moves_nothing() {
    let mut f = field(MotionPreference::Full, 2);
    f.resize(500.0, 500.0);
    let before = f.hearts().to_vec();
    f.step(-1.0);
    assert_eq!(f.hearts(), before.as_slice());
}

#[test]
fn render_draws_each_particle_once() {
    let mut f = field(MotionPreference::Full, 8);
    f.resize(1280.0, 720.0);
    let mut canvas = CountingCanvas::default();
    f.render(&mut canvas);
    assert_eq!(canvas.clears, 1);
    assert_eq!(canvas.circles, f.stars().len());
    assert_eq!(canvas.paths.len(), f.hearts().len());
    assert!(canvas.paths.iter().all(|p| p.len() == 5));
}

#[test]
fn heart_path_is_mirror_symmetric() {
    let top = Vec2::new(50.0, 10.0);
    let path = heart_path(top, 20.0);
    assert_eq!(path[0], PathSegment::MoveTo(Vec2::new(50.0, 15.0)));

    let mirror = |v: Vec2| Vec2::new(2.0 * top.x - v.x, v.y);
    let (PathSegment::CubicTo { c1: a1, c2: a2, to: at }, PathSegment::CubicTo { c1: b1, c2: b2, .. }) =
        (path[1], path[4])
    else {
        panic!("expected cubic segments");
    };
    assert_eq!(mirror(a1), b2);
    assert_eq!(mirror(a2), b1);
    assert_eq!(at, Vec2::new(40.0, 15.0));

    let PathSegment::CubicTo { to: tip, .. } = path[2] else {
        panic!("expected cubic segment");
    };
    assert_eq!(tip, Vec2::new(50.0, 30.0));
    let PathSegment::CubicTo { to: end, .. } = path[4] else {
        panic!("expected cubic segment");
    };
    assert_eq!(end, Vec2::new(50.0, 15.0), "outline closes at the notch");
}

#[test]
fn same_seed_same_sky() {
    let mut a = field(MotionPreference::Full, 77);
    let mut b = field(MotionPreference::Full, 77);
    let mut c = field(MotionPreference::Full, 78);
    for f in [&mut a, &mut b, &mut c] {
        f.resize(900.0, 700.0);
        for _ in 0..100 {
            f.step(1.0 / 60.0);
        }
    }
    assert_eq!(a.stars(), b.stars());
    assert_eq!(a.hearts(), b.hearts());
    assert_ne!(a.stars(), c.stars());
}

#[test]
fn controller_frames_drive_the_field() {
    let (mut c, _clock) = keepsake(&["Hi"]);
    c.resize(1280.0, 720.0);
    assert_eq!(c.particles().stars().len(), 61);
    let before: Vec<f32> = c.particles().hearts().iter().map(|h| h.pos.y).collect();
    c.frame(1.0 / 60.0);
    let after: Vec<f32> = c.particles().hearts().iter().map(|h| h.pos.y).collect();
    assert!(before.iter().zip(&after).all(|(b, a)| a < b));

    let mut canvas = CountingCanvas::default();
    c.render_particles(&mut canvas);
    assert_eq!(canvas.circles, 61);
}

#[test]
fn field_and_synth_are_debuggable() {
    let mut f = field(MotionPreference::Reduced, 4);
    f.resize(200.0, 200.0);
    assert!(format!("{:?}", f).contains("ParticleField"));

    let synth = ToneSynthesizer::new(SilentBackend);
    assert!(format!("{:?}", synth).contains("SilentBackend"));
}
