use bellnozzle::{
    curve::CurveData,
    errors::NozzleError,
    float_types::Real,
    nozzle::BellNozzle,
    revolve::{RevolveOptions, extrude, revolution_path},
    traits::TransformOps,
};
use nalgebra::Point2;

mod support;

#[test]
fn closed_contour_lines_have_single_wrap() {
    let mesh = BellNozzle::new(support::reference_parameters(), RevolveOptions::new(8))
        .rebuild()
        .unwrap();
    let v = mesh.curve.len();
    assert_eq!(mesh.curve.lines.len(), 2 * v);
    assert_eq!(mesh.curve.segments().filter(|&s| s == (v - 1, 0)).count(), 1);
    assert_eq!(mesh.curve.u_coords[v - 1], (v - 1) as Real / v as Real);
}

#[test]
fn minimum_slice_count_is_watertight() {
    let mesh = BellNozzle::new(support::reference_parameters(), RevolveOptions::new(3))
        .rebuild()
        .unwrap();
    let buffers = &mesh.buffers;
    assert_eq!(buffers.vertex_count(), mesh.curve.len() * 3);
    assert_eq!(buffers.indices.len(), mesh.curve.segment_count() * 3 * 6);
    assert!(support::indices_in_range(buffers));

    let analysis = buffers.analyze_manifold();
    println!("3-slice analysis: {:?}", analysis);
    assert!(analysis.is_watertight());
    assert_eq!(analysis.degenerate_triangles, 0);
    // a closed profile swept around an axis is a torus
    assert_eq!(analysis.euler_characteristic, 0);
}

#[test]
fn default_slice_count_is_watertight() {
    let mesh = bellnozzle::rebuild(&support::reference_parameters()).unwrap();
    assert_eq!(mesh.slices, 36);
    assert!(mesh.buffers.is_watertight());
}

#[test]
fn revolved_points_keep_axial_position_and_radius() {
    let mesh = BellNozzle::new(support::reference_parameters(), RevolveOptions::new(5))
        .rebuild()
        .unwrap();
    let v = mesh.curve.len();
    for slice in 0..5 {
        let ring = mesh.edge_loop(slice).unwrap();
        assert_eq!(ring.len(), v);
        for (p, q) in ring.iter().zip(&mesh.curve.verts) {
            assert!(support::approx_eq(p.y, q.x, 1e-12));
            assert!(support::approx_eq((p.x * p.x + p.z * p.z).sqrt(), q.y, 1e-12));
        }
    }
    assert!(mesh.edge_loop(5).is_none());
}

#[test]
fn wall_normals_point_out_of_the_wall() {
    let mesh = BellNozzle::new(support::reference_parameters(), RevolveOptions::new(8))
        .rebuild()
        .unwrap();
    // slice 0 maps the contour's radial coordinate onto world +Z
    let outer_bell_mid = 2 * 10 - 2 + 5;
    let inner_bell_mid = 2 * 10 - 2 + 10 + 4;
    assert!(mesh.buffers.normals[outer_bell_mid].z > 0.0);
    assert!(mesh.buffers.normals[inner_bell_mid].z < 0.0);

    // triangle of slice 0 built on the outer bell segment agrees with the vertex normal
    let t = 2 * outer_bell_mid;
    let face = support::face_normal(&mesh.buffers, t);
    assert!(face.dot(&mesh.buffers.normals[outer_bell_mid]) > 0.0);
}

#[test]
fn mesher_rejects_short_paths() {
    let curve = CurveData::new(vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.0)], false);
    assert_eq!(
        extrude(&curve, &revolution_path(2)).unwrap_err(),
        NozzleError::TooFewSlices(2)
    );
}

#[test]
fn open_curve_leaves_boundary_loops() {
    let curve = CurveData::new(
        vec![Point2::new(0.0, 1.0), Point2::new(1.0, 1.5), Point2::new(2.0, 2.0)],
        false,
    );
    let mesh = extrude(&curve, &revolution_path(6)).unwrap();
    assert_eq!(mesh.indices.len(), 2 * 6 * 6);
    let analysis = mesh.analyze_manifold();
    // both open ends form a ring of 6 boundary edges
    assert_eq!(analysis.boundary_edges, 12);
    assert!(analysis.consistent_orientation);
}

#[test]
fn transformed_mesh_stays_watertight() {
    let mesh = BellNozzle::new(support::reference_parameters(), RevolveOptions::new(6))
        .rebuild()
        .unwrap();
    let placed = mesh
        .buffers
        .rotate(90.0, 0.0, 0.0)
        .scale(2.0, 2.0, 2.0)
        .translate(0.0, 0.0, 5.0);
    assert_eq!(placed.indices, mesh.buffers.indices);
    assert!(placed.is_watertight());
    let (mins, maxs) = placed.bounding_box().unwrap();
    assert!(maxs.z > mins.z);
}
