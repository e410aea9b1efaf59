use super::*;
use crate::cfg::{SEGMENT_CHOICES, WIDTH_REL_EPS};
use crate::error::ConfigError;
use crate::stage::{Phase, StagePlan};
use nalgebra::{vector, Vector2};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn close(a: Vector2<f64>, b: Vector2<f64>, tol: f64) -> bool {
    (a - b).norm() < tol
}

fn circle_16() -> ReflowParams {
    ReflowParams::circle(16, 140.0, vector![400.0, 240.0]).unwrap()
}

#[test]
fn decompose_16_by_140() {
    let wedges = decompose_wedges(16, 140.0).unwrap();
    assert_eq!(wedges.len(), 16);
    for (i, w) in wedges.iter().enumerate() {
        assert_eq!(w.index, i);
        assert!((w.half_angle_deg() - 11.25).abs() < 1e-12);
        assert!((w.start_deg + 11.25).abs() < 1e-12);
        assert_eq!(w.radius, 140.0);
        let expected = if i < 8 { Group::A } else { Group::B };
        assert_eq!(w.group, expected, "wedge {i}");
    }
}

#[test]
fn decompose_rejects_bad_counts_and_radius() {
    assert_eq!(
        decompose_wedges(15, 140.0),
        Err(ConfigError::OddSegmentCount { segments: 15 })
    );
    assert_eq!(
        decompose_wedges(2, 140.0),
        Err(ConfigError::TooFewSegments {
            segments: 2,
            min: 4
        })
    );
    assert_eq!(
        decompose_wedges(8, 0.0),
        Err(ConfigError::NonPositiveRadius { radius: 0.0 })
    );
    assert!(decompose_wedges(8, f64::NAN).is_err());
}

#[test]
fn sweeps_cover_the_full_turn() {
    for n in SEGMENT_CHOICES {
        let total: f64 = decompose_wedges(n, 10.0)
            .unwrap()
            .iter()
            .map(|w| w.sweep_deg)
            .sum();
        assert!((total - 360.0).abs() < 1e-9, "n={n} total={total}");
    }
}

#[test]
fn merged_wedge_zero_of_reference_circle() {
    let p = circle_16();
    let m = p.strip_metrics().unwrap();
    assert!((m.arc_length - 439.823).abs() < 1e-3);
    assert!((m.segment_width - 54.978).abs() < 1e-3);
    let w0 = decompose(&p)[0];
    let pose = resolve_phase(&w0, Phase::Merged, &p);
    assert!((pose.translation.x - 207.578).abs() < 1e-3);
    assert!((pose.translation.y - 310.0).abs() < 1e-12);
    assert_eq!(pose.rotation_deg, -90.0);
    // stage 3 of the reference plan is the same pose
    assert_eq!(resolve_pose(&w0, 3, &p), pose);
}

#[test]
fn original_ring_closes_exactly_once() {
    let p = circle_16();
    let wedges = decompose(&p);
    let poses = resolve_stage(&p, &StagePlan::reference(), 0);
    let n = wedges.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let end_i = poses[i].apply(wedges[i].boundary().end);
        let start_j = poses[j].apply(wedges[j].boundary().start);
        assert!(close(end_i, start_j, 1e-9), "seam {i}->{j}");
        assert!(((end_i - p.center()).norm() - p.radius()).abs() < 1e-9);
    }
    // wedge 0 starts on the left of the circle
    let start0 = poses[0].apply(wedges[0].boundary().start);
    assert!(close(start0, vector![260.0, 240.0], 1e-9));
}

#[test]
fn merged_strip_interlocks_halves() {
    let p = circle_16();
    let m = p.strip_metrics().unwrap();
    let wedges = decompose(&p);
    let poses = resolve_stage(&p, &StagePlan::reference(), 4);
    let a: Vec<&Pose> = wedges
        .iter()
        .zip(&poses)
        .filter(|(w, _)| w.group == Group::A)
        .map(|(_, pose)| pose)
        .collect();
    let b: Vec<&Pose> = wedges
        .iter()
        .zip(&poses)
        .filter(|(w, _)| w.group == Group::B)
        .map(|(_, pose)| pose)
        .collect();
    assert_eq!(a.len(), 8);
    assert_eq!(b.len(), 8);
    for k in 0..8 {
        assert!((b[k].translation.x - a[k].translation.x - m.segment_width / 2.0).abs() < 1e-9);
        assert_eq!(a[k].rotation_deg, -90.0);
        assert_eq!(b[k].rotation_deg, 90.0);
        assert!((a[k].translation.y - b[k].translation.y - m.height).abs() < 1e-9);
    }
    // the A apexes are centred on the circle's centre line
    let span_mid = (a[0].translation.x + a[7].translation.x) / 2.0;
    assert!((span_mid - p.center().x).abs() < 1e-9);
}

#[test]
fn separated_reuses_merged_rotation_and_column() {
    for p in [
        circle_16(),
        ReflowParams::triangle_arcs(300.0, vector![400.0, 320.0]).unwrap(),
    ] {
        for w in decompose(&p) {
            let sep = resolve_phase(&w, Phase::Separated, &p);
            let merged = resolve_phase(&w, Phase::Merged, &p);
            assert_eq!(sep.rotation_deg, merged.rotation_deg);
        }
    }
    let p = circle_16();
    for w in decompose(&p) {
        let sep = resolve_phase(&w, Phase::Separated, &p);
        let merged = resolve_phase(&w, Phase::Merged, &p);
        assert_eq!(sep.translation.x, merged.translation.x);
        assert_ne!(sep.translation.y, merged.translation.y);
        let expected_y = match w.group {
            Group::A => 180.0,
            Group::B => 300.0,
        };
        assert!((sep.translation.y - expected_y).abs() < 1e-12);
    }
}

#[test]
fn separation_is_configurable_per_visualization() {
    let p = circle_16().with_separation(90.0).unwrap();
    let w = decompose(&p)[0];
    assert!((resolve_phase(&w, Phase::Separated, &p).translation.y - 150.0).abs() < 1e-12);
    assert_eq!(
        circle_16().with_separation(0.0),
        Err(ConfigError::NonPositiveSeparation { separation: 0.0 })
    );
    let tri = ReflowParams::triangle_arcs(300.0, vector![400.0, 320.0]).unwrap();
    assert_eq!(tri.separation(), 170.0);
}

#[test]
fn triangle_corner_arcs_end_on_side_midpoints() {
    let p = ReflowParams::triangle_arcs(300.0, vector![400.0, 320.0]).unwrap();
    let OriginRule::Corners { vertices, .. } = p.origin() else {
        panic!("triangle preset must use corner arrangement");
    };
    let [top, right, left] = vertices;
    let mid = |a: Vector2<f64>, b: Vector2<f64>| (a + b) / 2.0;
    let expected = [
        (mid(top, right), mid(top, left)),
        (mid(right, left), mid(right, top)),
        (mid(left, top), mid(left, right)),
    ];
    let wedges = decompose(&p);
    assert_eq!(wedges.len(), 3);
    assert_eq!(p.radius(), 150.0);
    for (w, (s, e)) in wedges.iter().zip(expected) {
        assert_eq!(w.group, Group::A);
        assert_eq!(w.sweep_deg, 60.0);
        let pose = resolve_phase(w, Phase::Original, &p);
        let b = w.boundary();
        assert!(close(pose.apply(b.start), s, 1e-9), "wedge {} start", w.index);
        assert!(close(pose.apply(b.end), e, 1e-9), "wedge {} end", w.index);
    }
}

#[test]
fn corner_arcs_sit_at_the_given_vertices() {
    let vertices = [vector![10.0, -40.0], vector![95.0, 30.0], vector![-60.0, 25.0]];
    let target = vector![0.0, 200.0];
    let p = ReflowParams::corner_arcs(vertices, 45.0, target).unwrap();
    assert_eq!(p.radius(), 45.0);
    assert_eq!(p.separation(), 65.0);
    assert!(close(p.center(), vector![15.0, 5.0], 1e-12));
    let wedges = decompose(&p);
    let rotations = [60.0, 180.0, 300.0];
    for (w, (v, rot)) in wedges.iter().zip(vertices.iter().zip(rotations)) {
        let pose = resolve_phase(w, Phase::Original, &p);
        assert_eq!(pose.translation, *v);
        assert_eq!(pose.rotation_deg, rot);
        assert_eq!(resolve_phase(w, Phase::Merged, &p).translation, target);
    }

    // the equilateral preset is the same rule at its computed vertices
    let tri = ReflowParams::triangle_arcs(300.0, vector![400.0, 320.0]).unwrap();
    let OriginRule::Corners { vertices, .. } = tri.origin() else {
        panic!("triangle preset must use corner arrangement");
    };
    let MergedRule::Fan { target, .. } = tri.merged() else {
        panic!("triangle preset must merge into a fan");
    };
    let explicit = ReflowParams::corner_arcs(vertices, tri.radius(), target).unwrap();
    assert_eq!(explicit.origin(), tri.origin());
    assert_eq!(explicit.merged(), tri.merged());
    assert_eq!(explicit.separation(), tri.separation());
    let plan = StagePlan::reference();
    for stage in 0..plan.stage_count() {
        assert_eq!(resolve_stage(&explicit, &plan, stage), resolve_stage(&tri, &plan, stage));
    }

    let bad = [vector![f64::NAN, 0.0], vector![1.0, 0.0], vector![0.0, 1.0]];
    assert!(matches!(
        ReflowParams::corner_arcs(bad, 10.0, target),
        Err(ConfigError::NonFinite { .. })
    ));
    assert!(matches!(
        ReflowParams::corner_arcs(vertices, 0.0, target),
        Err(ConfigError::NonPositiveRadius { .. })
    ));
}

#[test]
fn triangle_arcs_merge_into_a_semicircle() {
    let p = ReflowParams::triangle_arcs(300.0, vector![400.0, 320.0]).unwrap();
    let wedges = decompose(&p);
    let poses = resolve_stage(&p, &StagePlan::reference(), 3);
    let rotations: Vec<f64> = poses.iter().map(|q| q.rotation_deg).collect();
    assert_eq!(rotations, vec![180.0, 240.0, 300.0]);
    let target = vector![400.0, 420.0];
    assert!(poses.iter().all(|q| q.translation == target));
    // contiguous: no gap, no overlap, 180° in total
    for k in 0..2 {
        assert_eq!(rotations[k] + wedges[k].sweep_deg, rotations[k + 1]);
    }
    let covered = rotations[2] + wedges[2].sweep_deg - rotations[0];
    assert_eq!(covered, 180.0);
    let left = poses[0].apply(wedges[0].boundary().start);
    let right = poses[2].apply(wedges[2].boundary().end);
    assert!(close(left, target + vector![-150.0, 0.0], 1e-9));
    assert!(close(right, target + vector![150.0, 0.0], 1e-9));

    let spread: Vec<f64> = resolve_stage(&p, &StagePlan::reference(), 2)
        .iter()
        .map(|q| q.translation.x - target.x)
        .collect();
    assert_eq!(spread, vec![-170.0, 0.0, 170.0]);
}

#[test]
fn mismatched_rules_are_rejected() {
    let circle = circle_16();
    let fan = MergedRule::Fan {
        target: vector![0.0, 0.0],
        start_deg: 180.0,
    };
    assert!(matches!(
        circle.with_merged(fan),
        Err(ConfigError::IncompatibleLayout { .. })
    ));
    let tri = ReflowParams::triangle_arcs(300.0, vector![0.0, 0.0]).unwrap();
    assert!(matches!(
        tri.with_merged(MergedRule::Strip { offset: 10.0 }),
        Err(ConfigError::IncompatibleLayout { .. })
    ));
    let lowered = circle.with_merged(MergedRule::Strip { offset: 50.0 }).unwrap();
    let w = decompose(&lowered)[0];
    assert_eq!(resolve_phase(&w, Phase::Merged, &lowered).translation.y, 290.0);
    assert!(ReflowParams::triangle_arcs(-1.0, vector![0.0, 0.0]).is_err());
    assert!(ReflowParams::circle(8, 1.0, vector![f64::NAN, 0.0]).is_err());
}

#[test]
fn svg_outline_uses_minor_clockwise_arc() {
    let w = decompose_wedges(8, 100.0).unwrap()[0];
    let b = w.boundary();
    let path = b.svg_path();
    assert!(path.starts_with("M 0 0 L 92.388 -38.268 A 100.000 100.000 0 0 1"));
    assert!(path.ends_with('Z'));
    let pts = b.sample(4);
    assert_eq!(pts.len(), 6);
    assert_eq!(pts[0], Vector2::zeros());
    assert!(pts[1..].iter().all(|q| (q.norm() - 100.0).abs() < 1e-9));
    let pose = Pose::new(vector![1.0, 2.0], 90.0);
    assert_eq!(pose.svg_transform(), "translate(1.000 2.000) rotate(90.000)");
}

#[test]
fn resolution_is_repeatable_for_random_centres() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..20 {
        let n = SEGMENT_CHOICES[rng.gen_range(0..SEGMENT_CHOICES.len())];
        let c = vector![rng.gen_range(-500.0..500.0), rng.gen_range(-500.0..500.0)];
        let p = ReflowParams::circle(n, rng.gen_range(1.0..300.0), c).unwrap();
        let plan = StagePlan::reference();
        for stage in 0..plan.stage_count() {
            assert_eq!(
                resolve_stage(&p, &plan, stage),
                resolve_stage(&p, &plan, stage)
            );
        }
        assert_eq!(decompose(&p), decompose(&p));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn halves_and_strip_width_hold_for_any_even_count(
        half in 2usize..=32,
        radius in 0.5f64..1000.0,
        cx in -1000.0f64..1000.0,
        cy in -1000.0f64..1000.0,
    ) {
        let n = half * 2;
        let p = ReflowParams::circle(n, radius, vector![cx, cy]).unwrap();
        let wedges = decompose(&p);
        prop_assert_eq!(wedges.len(), n);
        let a = wedges.iter().filter(|w| w.group == Group::A).count();
        prop_assert_eq!(a, half);
        prop_assert_eq!(n - a, half);

        // strip width from where the A apexes actually land, plus one pitch
        let m = p.strip_metrics().unwrap();
        let xs: Vec<f64> = wedges
            .iter()
            .filter(|w| w.group == Group::A)
            .map(|w| resolve_phase(w, Phase::Merged, &p).translation.x)
            .collect();
        prop_assert!(xs.windows(2).all(|pair| pair[1] > pair[0]));
        let width = xs[xs.len() - 1] - xs[0] + m.segment_width;
        let target = std::f64::consts::PI * radius;
        prop_assert!(((width - target) / target).abs() < WIDTH_REL_EPS);
    }
}
