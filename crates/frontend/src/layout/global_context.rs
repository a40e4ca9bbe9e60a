use leptos::prelude::*;

/// Width below which the sidebar starts collapsed and overlays the content
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Shell-wide UI state shared by the header, sidebar and overlays.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub notifications_open: RwSignal<bool>,
    pub create_modal_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let wide = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|w| w >= MOBILE_BREAKPOINT_PX)
            .unwrap_or(true);
        Self {
            left_open: RwSignal::new(wide),
            notifications_open: RwSignal::new(false),
            create_modal_open: RwSignal::new(false),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }

    pub fn close_left(&self) {
        self.left_open.set(false);
    }

    pub fn toggle_notifications(&self) {
        self.notifications_open.update(|val| *val = !*val);
    }

    pub fn close_notifications(&self) {
        self.notifications_open.set(false);
    }

    pub fn open_create_modal(&self) {
        self.notifications_open.set(false);
        self.create_modal_open.set(true);
    }

    pub fn close_create_modal(&self) {
        self.create_modal_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
