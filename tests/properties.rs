use transform_lab::{
    ClosedPolygon, Point, Polygon, ReflectionAxis, ViewportConfig, dilate, reflect, rotate,
    translate, viewport_range,
};

const EPS: f64 = 1e-9;

fn samples() -> Vec<ClosedPolygon> {
    vec![
        Polygon::new([(1.0, 1.0), (3.0, 4.0), (5.0, 1.0)]).closed(),
        Polygon::new([(-2.5, 0.0), (0.0, 3.25), (4.0, -1.5), (0.5, -0.5)]).closed(),
        Polygon::new([(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]).closed(),
        Polygon::new([(7.0, -3.0)]).closed(),
    ]
}

const VECTORS: [(f64, f64); 4] = [(2.0, 1.0), (-5.0, 0.5), (0.0, 0.0), (3.3, -4.1)];
const ANGLES: [f64; 6] = [0.0, 45.0, 90.0, -135.0, 180.0, 17.5];
const FACTORS: [f64; 5] = [1.5, 0.1, 3.0, 2.0, -0.5];

#[test]
fn closed_form_repeats_first_vertex() {
    for n in 1..=6 {
        let vertices: Vec<Point> = (0..n).map(|i| Point::new(i as f64, (i * i) as f64)).collect();
        let closed = Polygon::new(vertices.clone()).closed();
        assert_eq!(closed.len(), n + 1);
        assert_eq!(closed.points()[0], closed.points()[n]);
        assert_eq!(closed.vertices(), vertices.as_slice());
    }
}

#[test]
fn translation_is_additive() {
    for polygon in samples() {
        for a in VECTORS {
            for b in VECTORS {
                let a = Point::from(a);
                let b = Point::from(b);
                let stepwise = translate(&translate(&polygon, a), b);
                let combined = translate(&polygon, a + b);
                assert!(stepwise.approx_eq(&combined, EPS));
            }
        }
    }
}

#[test]
fn rotation_composes_and_wraps() {
    for polygon in samples() {
        assert_eq!(rotate(&polygon, 0.0), polygon);
        for a in ANGLES {
            assert!(rotate(&polygon, a + 360.0).approx_eq(&rotate(&polygon, a), EPS));
            for b in ANGLES {
                let stepwise = rotate(&rotate(&polygon, a), b);
                let combined = rotate(&polygon, a + b);
                assert!(stepwise.approx_eq(&combined, EPS), "{a} + {b}");
            }
        }
    }
}

#[test]
fn dilation_identity_and_associativity() {
    for polygon in samples() {
        assert_eq!(dilate(&polygon, 1.0), polygon);
        for a in FACTORS {
            for b in FACTORS {
                let stepwise = dilate(&dilate(&polygon, a), b);
                let combined = dilate(&polygon, a * b);
                assert!(stepwise.approx_eq(&combined, EPS));
            }
        }
    }
}

#[test]
fn reflection_is_an_involution() {
    for polygon in samples() {
        for axis in ReflectionAxis::ALL {
            let twice = reflect(&reflect(&polygon, Some(axis)), Some(axis));
            assert_eq!(twice, polygon, "{axis}");
        }
    }
}

#[test]
fn origin_distances() {
    for polygon in samples() {
        for angle in ANGLES {
            let rotated = rotate(&polygon, angle);
            for (a, b) in polygon.points().iter().zip(rotated.points()) {
                assert!((a.norm() - b.norm()).abs() < EPS);
            }
        }
        for axis in ReflectionAxis::ALL {
            let reflected = reflect(&polygon, Some(axis));
            for (a, b) in polygon.points().iter().zip(reflected.points()) {
                assert!((a.norm() - b.norm()).abs() < EPS);
            }
        }
        for k in FACTORS {
            let scaled = dilate(&polygon, k);
            for (a, b) in polygon.points().iter().zip(scaled.points()) {
                assert!((a.norm() * k.abs() - b.norm()).abs() < EPS);
            }
        }
    }
}

#[test]
fn transformed_outlines_stay_closed() {
    for polygon in samples() {
        let outlines = [
            translate(&polygon, Point::new(1.0, -2.0)),
            rotate(&polygon, 33.0),
            dilate(&polygon, -1.5),
            reflect(&polygon, Some(ReflectionAxis::LineYEqX)),
        ];
        for outline in outlines {
            assert_eq!(outline.len(), polygon.len());
            assert_eq!(outline.points().first(), outline.points().last());
        }
    }
}

#[test]
fn triangle_translation_scenario() {
    let triangle = Polygon::new([(1.0, 1.0), (3.0, 4.0), (5.0, 1.0)]).closed();
    let moved = translate(&triangle, Point::new(2.0, 1.0));
    assert_eq!(
        moved.vertices(),
        &[Point::new(3.0, 2.0), Point::new(5.0, 5.0), Point::new(7.0, 2.0)]
    );

    let range = viewport_range(&triangle, &moved, &ViewportConfig::default());
    assert!((range - 10.5).abs() < EPS);
}

#[test]
fn single_point_scenarios() {
    let unit = Polygon::new([(1.0, 0.0)]).closed();
    assert!(rotate(&unit, 90.0).vertices()[0].approx_eq(Point::new(0.0, 1.0), EPS));

    let diagonal = Polygon::new([(2.0, 2.0)]).closed();
    assert!(dilate(&diagonal, 1.5).vertices()[0].approx_eq(Point::new(3.0, 3.0), EPS));

    let p = Polygon::new([(1.0, 2.0)]).closed();
    let reflected = |axis| reflect(&p, Some(axis)).vertices()[0];
    assert_eq!(reflected(ReflectionAxis::XAxis), Point::new(1.0, -2.0));
    assert_eq!(reflected(ReflectionAxis::YAxis), Point::new(-1.0, 2.0));
    assert_eq!(reflected(ReflectionAxis::LineYEqX), Point::new(2.0, 1.0));
    assert_eq!(reflected(ReflectionAxis::LineYEqNegX), Point::new(-2.0, -1.0));
}
