use bellnozzle::{
    errors::NozzleError,
    float_types::Real,
    mesh::MeshBuffers,
    nozzle::{
        AngleSource, BellNozzle, LengthClass, NozzleParameters,
        contour::expected_point_count,
        solver::solve,
        table::WALL_ANGLES,
    },
    revolve::RevolveOptions,
};
use nalgebra::Vector2;

mod support;

#[test]
fn reference_scenario() {
    let params = support::reference_parameters();
    let nozzle = BellNozzle::new(params, RevolveOptions::new(8));
    let mesh = nozzle.rebuild().unwrap();
    let geometry = mesh.geometry;

    assert_eq!(geometry.source, AngleSource::Table { index: 3 });
    assert!(support::approx_eq(geometry.theta_n.to_degrees(), 28.8, 1e-9));
    assert!(support::approx_eq(geometry.theta_e.to_degrees(), 9.0, 1e-9));
    assert!(support::approx_eq(geometry.throat_radius, 0.223_606_8, 1e-6));
    assert!(support::approx_eq(geometry.eps, (20.0 as Real).sqrt(), 1e-12));
    assert!(support::approx_eq(geometry.bell_length, 2.318_02, 1e-4));

    assert_eq!(mesh.contour.len(), expected_point_count(10, 10));
    assert_eq!(mesh.contour.len(), 56);
    assert_eq!(mesh.buffers.vertex_count(), 56 * 8);
    assert_eq!(mesh.buffers.indices.len(), 56 * 8 * 6);
    assert!(support::indices_in_range(&mesh.buffers));
}

#[test]
fn contour_ends_at_exit_lip() {
    let mesh = BellNozzle::new(support::reference_parameters(), RevolveOptions::new(8))
        .rebuild()
        .unwrap();
    // outer throat holds 2 * 10 - 2 points, then the outer bell ends at E + thickness
    let outer_lip = mesh.contour.points[2 * 10 - 2 + 10 - 1];
    let inner_lip = mesh.contour.points[2 * 10 - 2 + 10];
    assert!(support::approx_eq(outer_lip.x, mesh.geometry.bell_length, 1e-12));
    assert!(support::approx_eq(outer_lip.y, 1.05, 1e-12));
    assert!(support::approx_eq(inner_lip.x, mesh.geometry.bell_length, 1e-12));
    assert!(support::approx_eq(inner_lip.y, 1.0, 1e-12));
}

#[test]
fn unknown_length_percentage_behaves_like_normal() {
    let normal = support::reference_parameters();
    let odd = NozzleParameters {
        length_class: LengthClass::from_percent(75),
        ..normal
    };
    let a = bellnozzle::rebuild(&normal).unwrap();
    let b = bellnozzle::rebuild(&odd).unwrap();
    assert_eq!(a.geometry, b.geometry);
    assert_eq!(a.buffers, b.buffers);
}

#[test]
fn rebuild_is_idempotent() {
    let nozzle = BellNozzle::new(
        NozzleParameters::new(37.0, 2.5, LengthClass::Long)
            .with_vertex_counts(17, 31)
            .with_position_offset(Vector2::new(0.2, -0.1)),
        RevolveOptions::new(24),
    );
    let first = nozzle.rebuild().unwrap();
    let second = nozzle.rebuild().unwrap();
    assert_eq!(first, second);
}

#[test]
fn interpolated_ratio_uses_bracketing_rows() {
    let geometry = solve(45.0, 0.1, LengthClass::Short);
    assert_eq!(geometry.source, AngleSource::Interpolated { lo: 5, hi: 6 });
    let expected_n = (WALL_ANGLES.short.theta_n[5] + WALL_ANGLES.short.theta_n[6]) / 2.0;
    let expected_e = (WALL_ANGLES.short.theta_e[5] + WALL_ANGLES.short.theta_e[6]) / 2.0;
    assert!(support::approx_eq(geometry.theta_n.to_degrees(), expected_n, 1e-9));
    assert!(support::approx_eq(geometry.theta_e.to_degrees(), expected_e, 1e-9));
}

#[test]
fn every_table_sample_builds_for_every_class() {
    for &ratio in &WALL_ANGLES.ratios {
        for class in [LengthClass::Short, LengthClass::Normal, LengthClass::Long] {
            let params = NozzleParameters::new(ratio, 1.0, class).with_vertex_counts(6, 8);
            let mesh = BellNozzle::new(params, RevolveOptions::new(6)).rebuild().unwrap();
            assert_eq!(mesh.contour.len(), expected_point_count(6, 8));
            assert!(mesh.curve.degenerate_tangents.is_empty());
        }
    }
}

#[test]
fn out_of_range_parameters_are_clamped() {
    let params = NozzleParameters {
        expansion_ratio: 9000.0,
        exit_radius: 40.0,
        throat_vertex_count: 1,
        bell_vertex_count: 400,
        wall_thickness: 0.0,
        ..Default::default()
    };
    let mesh = BellNozzle::new(params, RevolveOptions::new(1)).rebuild().unwrap();
    assert_eq!(mesh.parameters.expansion_ratio, 500.0);
    assert_eq!(mesh.parameters.exit_radius, 10.0);
    assert_eq!(mesh.slices, 3);
    assert_eq!(mesh.contour.len(), expected_point_count(2, 50));
}

#[test]
fn failed_rebuild_keeps_previous_mesh() {
    let mut target = MeshBuffers::default();
    let good = BellNozzle::new(support::reference_parameters(), RevolveOptions::new(8));
    good.rebuild_into(&mut target).unwrap();
    let previous = target.clone();
    assert_eq!(previous.vertex_count(), 56 * 8);

    let bad = BellNozzle::new(
        NozzleParameters {
            expansion_ratio: Real::NAN,
            ..support::reference_parameters()
        },
        RevolveOptions::new(8),
    );
    let err = bad.rebuild_into(&mut target).unwrap_err();
    assert!(matches!(err, NozzleError::InvalidParameter { name: "expansion_ratio", .. }));
    assert_eq!(target, previous);
}

#[test]
fn rebuild_replaces_target_completely() {
    let mut target = MeshBuffers::default();
    BellNozzle::new(support::reference_parameters(), RevolveOptions::new(12))
        .rebuild_into(&mut target)
        .unwrap();
    BellNozzle::new(support::reference_parameters(), RevolveOptions::new(4))
        .rebuild_into(&mut target)
        .unwrap();
    assert_eq!(target.vertex_count(), 56 * 4);
    assert!(support::indices_in_range(&target));
}
