//! Sidebar with collapsible menu groups

use crate::layout::global_context::use_app_context;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use crate::system::auth::use_session;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "people",
            label: "People",
            icon: "users",
            items: vec![("a001_manager", "users")],
            admin_only: true,
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "calendar",
            items: vec![
                ("a002_seller", "store"),
                ("a003_event", "calendar"),
                ("a004_venue", "map-pin"),
                ("a005_banner", "image"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "ticket",
            items: vec![("a006_ticket", "ticket"), ("a007_ticket_request", "inbox")],
            admin_only: false,
        },
        MenuGroup {
            id: "support",
            label: "Support",
            icon: "support",
            items: vec![("a008_support_ticket", "support"), ("a009_enquiry", "mail")],
            admin_only: false,
        },
        MenuGroup {
            id: "finance",
            label: "Finance",
            icon: "wallet",
            items: vec![("a010_deposit", "wallet"), ("a011_withdrawal", "bank")],
            admin_only: false,
        },
    ]
}

/// Groups the given role may see
fn visible_groups(is_admin: bool) -> Vec<MenuGroup> {
    menu_groups()
        .into_iter()
        .filter(|group| is_admin || !group.admin_only)
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let is_admin = use_session().is_admin();
    let expanded = RwSignal::new(vec!["catalog"]);

    view! {
        <nav class="app-sidebar__content">
            {visible_groups(is_admin).into_iter().map(|group| {
                let group_id = group.id;
                let items = group.items;
                let is_expanded = move || expanded.with(|ids| ids.contains(&group_id));
                view! {
                    <div class="app-sidebar__group">
                        <div
                            class="app-sidebar__item"
                            on:click=move |_| expanded.update(|ids| {
                                match ids.iter().position(|id| *id == group_id) {
                                    Some(pos) => {
                                        ids.remove(pos);
                                    }
                                    None => ids.push(group_id),
                                }
                            })
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>
                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {items.iter().map(|&(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.with(|a| a.as_deref() == Some(key))
                                            }
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_managers_are_admin_only() {
        let keys = |groups: Vec<MenuGroup>| -> Vec<&'static str> {
            groups.into_iter().flat_map(|g| g.items).map(|(key, _)| key).collect()
        };
        let manager_view = keys(visible_groups(false));
        assert!(!manager_view.contains(&"a001_manager"));
        assert_eq!(manager_view.len(), 10);
        assert_eq!(keys(visible_groups(true)).len(), 11);
    }
}
