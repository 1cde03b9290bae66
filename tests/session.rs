use transform_lab::{
    AxisPolicy, LabConfig, LabError, Point, ReflectionAxis, RenderCommand, ScreenPoint,
    ScreenRect, SessionEvent, Theme, TransformKind, Transformation, TransformationSession,
    build_figure,
};

#[test]
fn every_event_recomputes_active_view() {
    let mut session = TransformationSession::default();

    let result = session
        .handle(SessionEvent::SetTranslation { tx: -1.0, ty: 0.0 })
        .unwrap();
    assert_eq!(result.transformed.vertices()[0], Point::new(0.0, 1.0));

    let result = session
        .handle(SessionEvent::SelectView(TransformKind::Dilation))
        .unwrap();
    assert_eq!(
        result.transformation,
        Transformation::Dilation { factor: 1.5 }
    );
    assert_eq!(result.transformed.vertices()[2], Point::new(7.5, 1.5));
    assert!((result.viewport_range - 7.5 * 1.5).abs() < 1e-9);

    let result = session
        .handle(SessionEvent::SetVertex {
            index: 2,
            point: Point::new(-4.0, 0.0),
        })
        .unwrap();
    assert_eq!(result.original.vertices()[2], Point::new(-4.0, 0.0));
    assert_eq!(result.transformed.vertices()[2], Point::new(-6.0, 0.0));
}

#[test]
fn views_keep_independent_parameters() {
    let mut session = TransformationSession::default();
    session
        .handle(SessionEvent::SetRotation { degrees: 90.0 })
        .unwrap();
    session
        .handle(SessionEvent::SetDilation { factor: 2.0 })
        .unwrap();

    // Each view transforms the original shape, never another view's output.
    let rotation = session.result(TransformKind::Rotation);
    let dilation = session.result(TransformKind::Dilation);
    assert_eq!(rotation.original, dilation.original);
    assert!(rotation.transformed.vertices()[0].approx_eq(Point::new(-1.0, 1.0), 1e-9));
    assert_eq!(dilation.transformed.vertices()[0], Point::new(2.0, 2.0));
}

#[test]
fn reflection_labels_follow_policy() {
    let mut lenient = TransformationSession::default();
    lenient
        .handle(SessionEvent::SelectView(TransformKind::Reflection))
        .unwrap();
    let result = lenient
        .handle(SessionEvent::SelectReflectionLabel("Line y=x".into()))
        .unwrap();
    assert_eq!(result.transformed.vertices()[1], Point::new(4.0, 3.0));
    assert_eq!(result.title(), "Reflection across Line y=x");

    let mut strict = TransformationSession::new(LabConfig {
        axis_policy: AxisPolicy::Strict,
        ..LabConfig::default()
    });
    let err = strict
        .handle(SessionEvent::SelectReflectionLabel("z axis".into()))
        .unwrap_err();
    assert_eq!(err, LabError::UnknownAxis("z axis".into()));
    assert_eq!(err.to_string(), "unknown reflection axis: \"z axis\"");
}

#[test]
fn all_zero_input_still_frames() {
    let mut session = TransformationSession::new(LabConfig {
        vertices: vec![Point::ORIGIN; 3],
        ..LabConfig::default()
    });
    let result = session
        .handle(SessionEvent::SelectView(TransformKind::Rotation))
        .unwrap();
    assert_eq!(result.viewport_range, 1.0);
    assert!(result.viewport().is_valid());
}

#[test]
fn figure_for_each_view() {
    let mut session = TransformationSession::default();
    session
        .handle(SessionEvent::SetReflectionAxis(Some(ReflectionAxis::YAxis)))
        .unwrap();
    let bounds = ScreenRect::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(800.0, 600.0));
    for result in session.results() {
        let figure = build_figure(&result, &Theme::dark(), bounds);
        let title = result.title();
        assert!(figure.commands().iter().any(|command| matches!(
            command,
            RenderCommand::Text { text, .. } if *text == title
        )));
        let clips = figure
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::ClipRect(_)))
            .count();
        let ends = figure
            .commands()
            .iter()
            .filter(|command| matches!(command, RenderCommand::ClipEnd))
            .count();
        assert_eq!(clips, ends);
    }
}
