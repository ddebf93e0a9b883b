use leptos::logging::log;
use leptos::prelude::*;

/// Open tabs and shell state, shared by the sidebar, the tab strip and
/// every screen that navigates (detail views open as tabs).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        log!("open_tab: key='{}', title='{}'", key, title);
        self.opened.update(|tabs| push_unique(tabs, key, title));
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        log!("close_tab: key='{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

/// Append a tab unless one with the same key is already open
fn push_unique(tabs: &mut Vec<Tab>, key: &str, title: &str) {
    if !tabs.iter().any(|tab| tab.key == key) {
        tabs.push(Tab {
            key: key.to_string(),
            title: title.to_string(),
        });
    }
}
