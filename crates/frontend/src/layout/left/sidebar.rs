//! Sidebar navigation between the server-rendered pages

use crate::layout::global_context::{use_global_context, MOBILE_BREAKPOINT_PX};
use crate::shared::dom;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
struct NavItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
}

const NAV_ITEMS: &[NavItem] = &[
    NavItem { href: "/dashboard/", label: "Dashboard", icon: "layout-dashboard" },
    NavItem { href: "/favorites/", label: "Favorites", icon: "heart" },
    NavItem { href: "/artists/", label: "Artists", icon: "users" },
    NavItem { href: "/profile/", label: "Profile", icon: "user" },
];

/// `href` is active for itself and everything below it
fn is_active(href: &str, pathname: &str) -> bool {
    let href = href.trim_end_matches('/');
    let pathname = pathname.trim_end_matches('/');
    pathname == href || pathname.starts_with(&format!("{}/", href))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_global_context();
    let pathname = dom::pathname();

    // following a link on a narrow screen hides the overlayed sidebar
    let on_navigate = move |_: leptos::ev::MouseEvent| {
        let narrow = web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .map(|w| w < MOBILE_BREAKPOINT_PX)
            .unwrap_or(false);
        if narrow {
            ctx.close_left();
        }
    };

    view! {
        <nav class="app-sidebar__content">
            {NAV_ITEMS
                .iter()
                .map(|item| {
                    let active = is_active(item.href, &pathname);
                    view! {
                        <a
                            href=item.href
                            class="app-sidebar__item"
                            class:app-sidebar__item--active=active
                            on:click=on_navigate
                        >
                            <div class="app-sidebar__item-content">
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </div>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_matches_section() {
        assert!(is_active("/dashboard/", "/dashboard/"));
        assert!(is_active("/dashboard/", "/dashboard"));
        assert!(is_active("/artists/", "/artists/12/"));
        assert!(!is_active("/artists/", "/artists-archive/"));
        assert!(!is_active("/favorites/", "/dashboard/"));
    }
}
