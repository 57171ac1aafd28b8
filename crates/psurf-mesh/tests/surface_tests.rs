use std::path::PathBuf;

use approx::assert_relative_eq;
use psurf_core::{PsurfError, Validate};
use psurf_math::{Point3, Rgba, OUT};
use psurf_mesh::shapes::Sphere;
use psurf_mesh::{
    Axes3, Axis, ColorScheme, NumberAxis, ParametricSurface, Resolution, Surface, SurfaceConfig,
    SurfaceGroup, TexturedSurface,
};
use psurf_scale::LogBase;

fn plane(nu: usize, nv: usize) -> ParametricSurface {
    let config = SurfaceConfig::default().with_resolution(Resolution::new(nu, nv));
    ParametricSurface::plane(config).unwrap()
}

fn flat_at(z: f64) -> ParametricSurface {
    let config = SurfaceConfig::default().with_resolution(Resolution::new(3, 3));
    ParametricSurface::new(move |u: f64, v: f64| Point3::new(u, v, z), config).unwrap()
}

fn passthrough(name: &str) -> psurf_core::Result<PathBuf> {
    Ok(PathBuf::from(name))
}

#[test_log::test]
fn test_index_count_for_every_resolution() {
    for (nu, nv) in [(2, 2), (3, 5), (7, 4), (11, 11)] {
        let s = plane(nu, nv);
        assert_eq!(s.triangle_indices().len(), 6 * (nu - 1) * (nv - 1));
        assert!(s.triangle_indices().iter().all(|&i| (i as usize) < nu * nv));
        s.validate().unwrap();
    }
}

#[test_log::test]
fn test_default_surface_is_101_by_101() {
    let s = ParametricSurface::plane(SurfaceConfig::default()).unwrap();
    assert_eq!(s.vertex_count(), 101 * 101);
    assert_eq!(s.core().points().len(), 3 * 101 * 101);
}

#[test_log::test]
fn test_plane_normals_point_out() {
    let s = plane(4, 6);
    for n in s.unit_normals() {
        assert_relative_eq!(n.dot(OUT), 1.0, epsilon = 1e-9);
    }
}

#[test_log::test]
fn test_sphere_bounding_box() {
    let sphere = Sphere::new(Point3::ZERO, 2.0);
    let config = sphere.config().with_resolution(Resolution::new(24, 12));
    let s = ParametricSurface::new(sphere, config).unwrap();
    let bbox = Surface::from(s).bounding_box().unwrap();
    assert_relative_eq!(bbox.min.z, -2.0, epsilon = 1e-9);
    assert_relative_eq!(bbox.max.z, 2.0, epsilon = 1e-9);
}

#[test_log::test]
fn test_full_partial_is_identity_and_shares_storage() {
    let source = plane(5, 5);
    let mut target = source.clone();
    target.become_partial(&source, 0.0, 1.0, None).unwrap();
    assert!(target.core().points().shares_storage(source.core().points()));
}

#[test_log::test]
fn test_partial_is_idempotent() {
    let source = plane(6, 4);
    let mut once = source.clone();
    once.become_partial(&source, 0.2, 0.7, Some(Axis::U)).unwrap();
    let mut twice = once.clone();
    twice.become_partial(&source, 0.2, 0.7, Some(Axis::U)).unwrap();
    assert_eq!(once.core().points().as_slice(), twice.core().points().as_slice());
}

#[test_log::test]
fn test_partial_leaves_source_untouched() {
    let source = plane(5, 5);
    let before = source.core().points().as_slice().to_vec();
    let mut target = source.clone();
    target.become_partial(&source, 0.1, 0.4, Some(Axis::V)).unwrap();
    assert_eq!(source.core().points().as_slice(), &before[..]);
    assert_ne!(target.core().points().as_slice(), &before[..]);
}

#[test_log::test]
fn test_partial_rejects_reversed_interval() {
    let source = plane(3, 3);
    let mut target = source.clone();
    let err = target.become_partial(&source, 0.8, 0.2, None).unwrap_err();
    assert!(matches!(err, PsurfError::InvalidInterval { .. }));
}

#[test_log::test]
fn test_depth_sort_reverses_for_opposite_directions() {
    let sphere = Sphere::new(Point3::ZERO, 1.0);
    let config = sphere.config().with_resolution(Resolution::new(8, 6));
    let mut toward = Surface::from(ParametricSurface::new(sphere, config).unwrap());
    let mut away = toward.clone();
    toward.sort_faces_back_to_front(OUT).unwrap();
    away.sort_faces_back_to_front(-OUT).unwrap();

    let (Surface::Plain(a), Surface::Plain(b)) = (&toward, &away) else {
        panic!("expected plain surfaces");
    };
    let first = &a.triangle_indices()[..3];
    let last = &b.triangle_indices()[b.triangle_indices().len() - 3..];
    let points = a.core().surface_points_and_nudged_points().0;
    let z = |tri: &[u32]| points[tri[0] as usize].z;
    // The farthest triangle in one order is the nearest in the other.
    assert_relative_eq!(z(first), z(last), epsilon = 1e-12);
}

#[test_log::test]
fn test_fill_by_value_colors_each_member() {
    let axes = Axes3::new(
        Point3::ZERO,
        NumberAxis::new((-1.0, 1.0), 1.0),
        NumberAxis::new((-1.0, 1.0), 1.0),
        NumberAxis::new((-1.0, 1.0), 1.0),
    );
    let mut group: Surface = [flat_at(-0.5), flat_at(0.0), flat_at(0.2)]
        .into_iter()
        .map(Surface::from)
        .collect::<SurfaceGroup>()
        .into();
    let scheme = ColorScheme::Pivoted(vec![
        (Rgba::RED, -0.4),
        (Rgba::YELLOW, 0.0),
        (Rgba::GREEN, 0.4),
    ]);
    group.set_fill_by_value(&axes, &scheme).unwrap();

    let colors: Vec<Rgba> = group
        .family_members_with_points()
        .into_iter()
        .map(|m| match m {
            Surface::Plain(s) => s.rgbas()[0],
            _ => panic!("expected plain surfaces"),
        })
        .collect();
    assert_eq!(colors[0], Rgba::RED);
    assert_eq!(colors[1], Rgba::YELLOW);
    assert_relative_eq!(colors[2].g, (Rgba::YELLOW.g + Rgba::GREEN.g) / 2.0, epsilon = 1e-12);
}

#[test_log::test]
fn test_gradient_over_log_z_axis() {
    let axes = Axes3::new(
        Point3::ZERO,
        NumberAxis::new((0.0, 1.0), 1.0),
        NumberAxis::new((0.0, 1.0), 1.0),
        NumberAxis::new((0.0, 2.0), 1.0).with_scaling(LogBase::default()),
    );
    // Value range of the z axis is 10^0 .. 10^2; a surface at offset 2 sits at 100.
    let mut top = Surface::from(flat_at(2.0));
    top.set_fill_by_value(&axes, &ColorScheme::Gradient(vec![Rgba::BLUE, Rgba::RED]))
        .unwrap();
    let Surface::Plain(s) = &top else {
        panic!("expected plain surface");
    };
    assert_eq!(s.rgbas()[0], Rgba::RED);
}

#[test_log::test]
fn test_textured_surface_coordinates() {
    let base = Surface::from(plane(3, 3));
    let textured = TexturedSurface::new(&base, "earth.png", None, &passthrough).unwrap();
    let uv: Vec<(f64, f64)> = textured.im_coords().iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(
        uv,
        vec![
            (0.0, 1.0),
            (0.0, 0.5),
            (0.0, 0.0),
            (0.5, 1.0),
            (0.5, 0.5),
            (0.5, 0.0),
            (1.0, 1.0),
            (1.0, 0.5),
            (1.0, 0.0),
        ]
    );
    assert_eq!(textured.num_textures(), 1);
    assert_eq!(textured.textures().light, textured.textures().dark);
}

#[test_log::test]
fn test_textured_surface_shares_base_points() {
    let base = plane(4, 4);
    let textured =
        TexturedSurface::from_plain(&base, "day", Some("night"), &passthrough).unwrap();
    assert!(textured.core().points().shares_storage(base.core().points()));
    assert_eq!(textured.num_textures(), 2);
}

#[test_log::test]
fn test_textured_surface_requires_plain_base() {
    let group = Surface::from(SurfaceGroup::new(vec![plane(2, 2).into()]));
    let err = TexturedSurface::new(&group, "earth.png", None, &passthrough).unwrap_err();
    assert!(matches!(err, PsurfError::TypeMismatch(_)));
}

#[test_log::test]
fn test_zero_resolution_surface() {
    let s = plane(0, 0);
    assert_eq!(s.vertex_count(), 0);
    assert!(s.triangle_indices().is_empty());
    assert!(s.core().points().is_empty());
    assert!(!Surface::from(s).has_points());
}
