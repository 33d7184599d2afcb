use std::f64::consts::PI;

use aneurysm_types::{LayerKind, Parameters, Point3d, Vec3};
use approx::assert_abs_diff_eq;
use centerline::{AreaSample, CenterlinePath};
use profile_ops::{
    layer_radii, plan_centerline_sections, plan_sections, AreaProfile, NormalMode, RadiusProfile,
    SectionRole,
};

fn reference_params() -> Parameters {
    Parameters {
        length: 100.0,
        radius_nondilated: 5.0,
        radius_sac: 12.0,
        wall_thickness_intima: 1.0,
        wall_thickness_media: 1.0,
        wall_thickness_adventitia: 1.0,
        ilt_thickness: 0.0,
        x_shift: 4.0,
        y_shift: 0.0,
        n_sections: 11,
    }
}

// ── Idealized layout ───────────────────────────────────────────────────────

#[test]
fn eleven_sections_give_fifteen_per_layer() {
    let params = reference_params();
    for kind in LayerKind::ALL {
        let layout = plan_sections(&params, kind).unwrap();
        assert_eq!(layout.len(), 15, "{kind}");
        let baseline = layout
            .sections()
            .iter()
            .filter(|s| s.role == SectionRole::Baseline)
            .count();
        assert_eq!(baseline, 11);
    }
}

#[test]
fn mid_origin_is_shifted_for_every_layer() {
    let params = reference_params();
    for kind in LayerKind::ALL {
        let layout = plan_sections(&params, kind).unwrap();
        assert_eq!(layout.baseline(5).unwrap().origin, Point3d::new(4.0, 0.0, 50.0));
        assert_eq!(layout.baseline(4).unwrap().origin, Point3d::new(2.0, 0.0, 40.0));
        assert_eq!(layout.baseline(6).unwrap().origin, Point3d::new(2.0, 0.0, 60.0));
    }
}

#[test]
fn section_names_use_layer_prefix() {
    let layout = plan_sections(&reference_params(), LayerKind::Adventitia).unwrap();
    let order = layout.loft_order();
    assert_eq!(order.first().map(String::as_str), Some("adventitia0"));
    assert_eq!(order[1], "adventitia0a");
    assert_eq!(order[2], "adventitia0b");
    assert_eq!(order[12], "adventitia10a");
    assert_eq!(order[13], "adventitia10b");
    assert_eq!(order.last().map(String::as_str), Some("adventitia10"));
}

#[test]
fn loft_order_is_longitudinally_monotonic() {
    let layout = plan_sections(&reference_params(), LayerKind::Lumen).unwrap();
    let z: Vec<f64> = layout.sections().iter().map(|s| s.origin.z).collect();
    assert!(z.windows(2).all(|w| w[0] < w[1]), "{z:?}");
}

// ── Radii ──────────────────────────────────────────────────────────────────

#[test]
fn reference_scenario_radii() {
    let params = reference_params();
    let lumen = layer_radii(&params, LayerKind::Lumen).unwrap();
    let intima = layer_radii(&params, LayerKind::Intima).unwrap();
    assert_eq!(lumen[5], 12.0);
    assert_eq!(intima[5], 13.0);
    assert_eq!(intima[3], 6.0);
    assert_eq!(intima[7], 6.0);
}

#[test]
fn transition_is_monotonic_towards_apex() {
    let radii = layer_radii(&reference_params(), LayerKind::Media).unwrap();
    assert!(radii[3] < radii[4] && radii[4] < radii[5]);
    assert!(radii[7] < radii[6] && radii[6] < radii[5]);
}

#[test]
fn layers_nest_at_every_index() {
    let params = reference_params();
    let radii: Vec<Vec<f64>> = LayerKind::ALL
        .iter()
        .map(|&kind| layer_radii(&params, kind).unwrap())
        .collect();
    for pair in radii.windows(2) {
        for (inner, outer) in pair[0].iter().zip(&pair[1]) {
            assert!(outer > inner);
        }
    }
}

// ── Patient-specific ───────────────────────────────────────────────────────

#[test]
fn area_round_trip_on_straight_centerline() {
    let radius = |z: f64| 3.0 + 0.05 * z;
    let samples: Vec<AreaSample> = (0..=8)
        .map(|i| {
            let z = 10.0 * i as f64;
            AreaSample {
                z,
                area: PI * radius(z).powi(2),
            }
        })
        .collect();

    let raw: Vec<Point3d> = (0..=8).map(|i| Point3d::on_axis(10.0 * i as f64)).collect();
    let path = CenterlinePath::from_samples(&raw, 2).unwrap();
    assert_abs_diff_eq!(path.length(), 80.0, epsilon = 1e-9);

    let profile = AreaProfile::from_samples(&samples, path.length()).unwrap();
    let sections = plan_centerline_sections(&path, &profile, "aneurysm_outer", NormalMode::Tangent);
    assert_eq!(sections.len(), 17);
    for s in &sections {
        assert_abs_diff_eq!(s.circle.radius, radius(s.origin().z), epsilon = 1e-6);
        assert_abs_diff_eq!(s.circle.normal.z, 1.0, epsilon = 1e-9);
    }
    assert_eq!(sections[16].name, "aneurysm_outer16");
}

#[test]
fn vertical_mode_ignores_tangent() {
    let raw = [
        Point3d::new(0.0, 0.0, 0.0),
        Point3d::new(3.0, 0.0, 10.0),
        Point3d::new(3.0, 3.0, 20.0),
    ];
    let path = CenterlinePath::from_samples(&raw, 1).unwrap();
    let samples = [
        AreaSample { z: 0.0, area: PI },
        AreaSample { z: 1.0, area: PI },
    ];
    let profile = AreaProfile::from_samples(&samples, path.length()).unwrap();
    for s in plan_centerline_sections(&path, &profile, "ILT", NormalMode::Vertical) {
        assert_eq!(s.circle.normal, Vec3::Z);
        assert_abs_diff_eq!(s.circle.radius, 1.0, epsilon = 1e-12);
    }
    assert!(profile.radius_at(-50.0) >= 0.0);
}
