use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use transform_lab::{LabConfig, Theme, TransformationSession, TransformationView};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info,transform_lab=debug")
        .init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(720.0), px(720.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let session = TransformationSession::new(LabConfig::default());
            let view = TransformationView::new(session).with_theme(Theme::light());
            cx.new(|_| view)
        })
        .unwrap();
    });
}
