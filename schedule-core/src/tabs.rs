use std::fmt::Debug;

/// Identifier of one trigger/panel pair in a tab group.
///
/// Triggers carry `id()` as their data attribute; the matching panel's element
/// id is `id()` plus the group's suffix.
pub trait TabKey: Copy + Eq + Debug + 'static {
    const ALL: &'static [Self];
    const PANEL_SUFFIX: &'static str;

    fn id(self) -> &'static str;

    fn label(self) -> &'static str;

    fn panel_id(self) -> String {
        format!("{}-{}", self.id(), Self::PANEL_SUFFIX)
    }
}

/// Top-level navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Parse,
    Yougile,
    Analysis,
}

impl TabKey for Tab {
    const ALL: &'static [Self] = &[Self::Parse, Self::Yougile, Self::Analysis];
    const PANEL_SUFFIX: &'static str = "tab";

    fn id(self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Yougile => "yougile",
            Self::Analysis => "analysis",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Parse => "Парсинг расписания",
            Self::Yougile => "Интеграция с YouGile",
            Self::Analysis => "Анализ расписаний",
        }
    }
}

/// Analysis method sub-navigation inside [`Tab::Analysis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Method {
    #[default]
    Common,
    Split,
}

impl TabKey for Method {
    const ALL: &'static [Self] = &[Self::Common, Self::Split];
    const PANEL_SUFFIX: &'static str = "method";

    fn id(self) -> &'static str {
        match self {
            Self::Common => "common",
            Self::Split => "split",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Common => "Общее окно",
            Self::Split => "Сплит окно",
        }
    }
}

/// Active marker of one tab group. At most one key is active; once any
/// trigger has been clicked exactly one is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TabGroup<K> {
    active: Option<K>,
}

impl<K: TabKey> TabGroup<K> {
    /// `initial` is whatever the markup marks active before any click.
    pub fn new(initial: Option<K>) -> Self {
        Self { active: initial }
    }

    pub fn active(&self) -> Option<K> {
        self.active
    }

    pub fn is_active(&self, key: K) -> bool {
        self.active == Some(key)
    }

    /// Clears every marker in the group, then marks `key`.
    pub fn activate(&mut self, key: K) {
        self.active = Some(key);
    }

    /// Class list for a trigger or panel: `base`, plus `active` when marked.
    pub fn class_for(&self, base: &str, key: K) -> String {
        if self.is_active(key) {
            format!("{base} active")
        } else {
            base.to_string()
        }
    }
}

impl<K: TabKey + Default> Default for TabGroup<K> {
    fn default() -> Self {
        Self::new(Some(K::default()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_ids() {
        assert_eq!(Tab::Parse.panel_id(), "parse-tab");
        assert_eq!(Tab::Yougile.panel_id(), "yougile-tab");
        assert_eq!(Method::Split.panel_id(), "split-method");
    }

    /// Keys whose rendered class list carries the `active` marker.
    fn marked<K: TabKey>(group: &TabGroup<K>, base: &str) -> Vec<K> {
        K::ALL
            .iter()
            .copied()
            .filter(|&k| group.class_for(base, k).split(' ').any(|c| c == "active"))
            .collect()
    }

    #[test]
    fn test_exactly_one_active_after_any_click() {
        let mut tabs = TabGroup::<Tab>::new(None);
        assert!(marked(&tabs, "tab-button").is_empty());
        assert!(marked(&tabs, "tab-content").is_empty());

        for &clicked in Tab::ALL.iter().chain(Tab::ALL.iter().rev()) {
            tabs.activate(clicked);
            assert_eq!(marked(&tabs, "tab-button"), vec![clicked]);
            assert_eq!(marked(&tabs, "tab-content"), vec![clicked]);
        }

        let mut methods = TabGroup::<Method>::default();
        methods.activate(Method::Split);
        methods.activate(Method::Split);
        assert_eq!(marked(&methods, "method-tab"), vec![Method::Split]);
        assert_eq!(marked(&methods, "method-content"), vec![Method::Split]);
    }

    #[test]
    fn test_class_for() {
        let tabs = TabGroup::new(Some(Tab::Yougile));
        assert_eq!(tabs.class_for("tab-button", Tab::Yougile), "tab-button active");
        assert_eq!(tabs.class_for("tab-button", Tab::Parse), "tab-button");
    }
}
