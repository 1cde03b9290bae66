use transform_lab::{
    LabConfig, Point, ReflectionAxis, SessionEvent, TransformKind, Transformation,
    TransformationSession,
};

fn main() -> transform_lab::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("info,transform_lab=debug")
        .init();

    let config = LabConfig::builder()
        .vertices([(1.0, 1.0), (3.0, 4.0), (5.0, 1.0)])
        .rotation_degrees(45.0)
        .build();
    let mut session = TransformationSession::new(config);
    print_all(&session);

    session.handle(SessionEvent::SetVertex {
        index: 1,
        point: Point::new(2.0, 5.0),
    })?;
    session.handle(SessionEvent::SetRotation { degrees: -90.0 })?;
    // Out of the control range; lands on the maximum factor.
    session.handle(SessionEvent::ControlInput(Transformation::Dilation {
        factor: 4.2,
    }))?;
    session.handle(SessionEvent::SetReflectionAxis(Some(ReflectionAxis::LineYEqNegX)))?;
    session.handle(SessionEvent::SelectView(TransformKind::Rotation))?;
    println!("--- after edits ---");
    print_all(&session);
    Ok(())
}

fn print_all(session: &TransformationSession) {
    for result in session.results() {
        println!("{} (viewport ±{:.2})", result.title(), result.viewport_range);
        println!("  {}", result.transformation.formula());
        for vertex in result.original.vertices() {
            println!("  {}", result.transformation.describe_vertex(*vertex));
        }
    }
}
