//! Floating, draggable comments panel with an embedded frame.

use crate::shared::dom;
use crate::shared::icons::icon;
use leptos::ev;
use leptos::html::Div;
use leptos::prelude::*;

/// Frame source that stops whatever the comments page was doing
const BLANK_SRC: &str = "about:blank";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelState {
    pub open: bool,
    pub src: Option<String>,
    /// Absolute `left/top`; `None` keeps the stylesheet's right-anchored default
    pub position: Option<(f64, f64)>,
}

impl PanelState {
    pub fn open_with(&mut self, src: String) {
        self.open = true;
        self.src = Some(src);
    }

    pub fn close(&mut self) {
        self.open = false;
        self.src = None;
    }

    pub fn frame_src(&self) -> &str {
        self.src.as_deref().unwrap_or(BLANK_SRC)
    }

    pub fn position_style(&self) -> String {
        match self.position {
            Some((left, top)) => format!("left: {}px; top: {}px; right: auto;", left, top),
            None => String::new(),
        }
    }
}

/// Pointer offset inside the panel captured when the header is grabbed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    offset_x: f64,
    offset_y: f64,
}

impl DragState {
    pub fn start(pointer: (f64, f64), panel_origin: (f64, f64)) -> Self {
        Self {
            offset_x: pointer.0 - panel_origin.0,
            offset_y: pointer.1 - panel_origin.1,
        }
    }

    /// New panel origin for the pointer, kept inside the viewport's top-left
    pub fn position_for(&self, pointer: (f64, f64)) -> (f64, f64) {
        (
            (pointer.0 - self.offset_x).max(0.0),
            (pointer.1 - self.offset_y).max(0.0),
        )
    }
}

#[component]
pub fn CommentsPanel(panel: RwSignal<PanelState>) -> impl IntoView {
    let panel_ref = NodeRef::<Div>::new();
    let drag = StoredValue::new(None::<DragState>);

    let close = move || {
        panel.update(|p| p.close());
        dom::set_body_scroll_locked(false);
    };

    let escape = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && panel.get_untracked().open {
            close();
        }
    });

    let on_header_mouse_down = move |ev: ev::MouseEvent| {
        // grabbing the close button is not a drag
        if ev.target() != ev.current_target() {
            return;
        }
        let Some(el) = panel_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        drag.set_value(Some(DragState::start(
            (ev.client_x() as f64, ev.client_y() as f64),
            (rect.left(), rect.top()),
        )));
        ev.prevent_default();
    };

    let mouse_move = window_event_listener(ev::mousemove, move |ev| {
        let Some(state) = drag.get_value() else {
            return;
        };
        ev.prevent_default();
        let position = state.position_for((ev.client_x() as f64, ev.client_y() as f64));
        panel.update(|p| p.position = Some(position));
    });

    let mouse_up = window_event_listener(ev::mouseup, move |_| {
        drag.set_value(None);
    });

    on_cleanup(move || {
        escape.remove();
        mouse_move.remove();
        mouse_up.remove();
        dom::set_body_scroll_locked(false);
    });

    view! {
        <Show when=move || panel.with(|p| p.open)>
            <div class="comments-backdrop" on:click=move |_| close()></div>
        </Show>
        <div
            node_ref=panel_ref
            class="comments-panel"
            class:hidden=move || !panel.with(|p| p.open)
            style=move || panel.with(|p| p.position_style())
        >
            <div class="comments-panel__header" on:mousedown=on_header_mouse_down>
                "Comments"
                <button
                    type="button"
                    class="comments-panel__close"
                    title="Close"
                    on:click=move |_| close()
                >
                    {icon("x")}
                </button>
            </div>
            <iframe
                class="comments-panel__frame"
                title="Comments"
                src=move || panel.with(|p| p.frame_src().to_string())
            ></iframe>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_close_blanks_frame() {
        let mut panel = PanelState::default();
        assert_eq!(panel.frame_src(), BLANK_SRC);

        panel.open_with("/artwork/5/comments/".into());
        assert!(panel.open);
        assert_eq!(panel.frame_src(), "/artwork/5/comments/");

        panel.close();
        assert!(!panel.open);
        assert_eq!(panel.frame_src(), BLANK_SRC);
    }

    #[test]
    fn test_position_keeps_grab_offset() {
        let drag = DragState::start((120.0, 80.0), (100.0, 60.0));
        assert_eq!(drag.position_for((300.0, 200.0)), (280.0, 180.0));
        assert_eq!(drag.position_for((5.0, 5.0)), (0.0, 0.0));
    }

    #[test]
    fn test_position_style_clears_right_anchor() {
        let mut panel = PanelState::default();
        assert_eq!(panel.position_style(), "");
        panel.position = Some((10.0, 20.5));
        assert_eq!(panel.position_style(), "left: 10px; top: 20.5px; right: auto;");
    }
}
