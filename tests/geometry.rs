use quickcheck_macros::quickcheck;
use webgl2_quad_sandbox::domain::geometry::{
    QUAD_INDICES, QUAD_VERTICES, quad_triangles, signed_area, square_side,
};

#[test]
fn quad_resolves_to_expected_triangles() {
    let triangles = quad_triangles();
    assert_eq!(
        triangles,
        vec![
            [[-0.5, 0.5], [-0.5, -0.5], [0.5, -0.5]],
            [[0.5, -0.5], [0.5, 0.5], [-0.5, 0.5]],
        ]
    );
}

#[test]
fn triangles_tile_the_unit_square() {
    let area: f32 = quad_triangles().iter().map(signed_area).sum();
    assert!((area - 1.0).abs() < f32::EPSILON);

    for v in QUAD_VERTICES {
        assert_eq!(v.position[0].abs(), 0.5);
        assert_eq!(v.position[1].abs(), 0.5);
    }
}

#[test]
fn indices_reference_every_corner() {
    let mut seen = [false; 4];
    for i in QUAD_INDICES {
        seen[i as usize] = true;
    }
    assert!(seen.iter().all(|s| *s));
}

#[test]
fn landscape_and_portrait_viewports() {
    assert_eq!(square_side(1920.0, 1080.0), 1080);
    assert_eq!(square_side(390.0, 844.0), 390);
    assert_eq!(square_side(-10.0, 500.0), 0);
    assert_eq!(square_side(f64::NAN, f64::NAN), 0);
}

#[quickcheck]
fn side_is_the_smaller_dimension(width: u16, height: u16) -> bool {
    square_side(width as f64, height as f64) == width.min(height) as u32
}

#[quickcheck]
fn side_is_symmetric(width: u16, height: u16) -> bool {
    square_side(width as f64, height as f64) == square_side(height as f64, width as f64)
}
