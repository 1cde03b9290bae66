use gpui::prelude::*;
use gpui::{Bounds, MouseButton, MouseDownEvent, Pixels, Window, canvas, div};

use crate::error::Result;
use crate::geom::{ScreenPoint, ScreenRect};
use crate::render::build_figure;
use crate::session::{SessionEvent, TransformResult, TransformationSession};
use crate::style::Theme;

use super::paint::{paint_figure, to_hsla};

/// A GPUI view that plots the active view of a [`TransformationSession`].
///
/// Left click switches to the next view, right click to the previous one.
/// Parameter changes go through [`TransformationView::apply`].
pub struct TransformationView {
    session: TransformationSession,
    theme: Theme,
}

impl TransformationView {
    /// Create a view for the given session with the default theme.
    pub fn new(session: TransformationSession) -> Self {
        Self {
            session,
            theme: Theme::default(),
        }
    }

    /// Replace the theme.
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Access the session.
    pub fn session(&self) -> &TransformationSession {
        &self.session
    }

    /// Apply a control event and schedule a redraw.
    pub fn apply(
        &mut self,
        event: SessionEvent,
        cx: &mut Context<Self>,
    ) -> Result<TransformResult> {
        let result = self.session.handle(event)?;
        cx.notify();
        Ok(result)
    }

    fn on_mouse_down(&mut self, event: &MouseDownEvent, cx: &mut Context<Self>) {
        let kind = match event.button {
            MouseButton::Right => self.session.active().previous(),
            _ => self.session.active().next(),
        };
        if let Err(err) = self.apply(SessionEvent::SelectView(kind), cx) {
            tracing::warn!(%err, "view switch rejected");
        }
    }
}

impl Render for TransformationView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let result = self.session.active_result();
        let theme = self.theme.clone();

        div()
            .size_full()
            .bg(to_hsla(theme.background))
            .child(
                canvas(
                    move |bounds, _, _| build_figure(&result, &theme, screen_rect(bounds)),
                    move |_, figure, window, cx| {
                        paint_figure(&figure, window, cx);
                    },
                )
                .size_full(),
            )
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, ev: &MouseDownEvent, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
            .on_mouse_down(
                MouseButton::Right,
                cx.listener(|this, ev: &MouseDownEvent, _, cx| {
                    this.on_mouse_down(ev, cx);
                }),
            )
    }
}

fn screen_rect(bounds: Bounds<Pixels>) -> ScreenRect {
    ScreenRect::from_origin_size(
        ScreenPoint::new(f32::from(bounds.origin.x), f32::from(bounds.origin.y)),
        f32::from(bounds.size.width),
        f32::from(bounds.size.height),
    )
}
