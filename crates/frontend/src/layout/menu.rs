use crate::layout::tabs::TabKey;
use crate::shared::icons::Icon;

/// Entries of the navigation drawer, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Dashboard,
    Products,
    Categories,
    Orders,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::Dashboard,
        MenuEntry::Products,
        MenuEntry::Categories,
        MenuEntry::Orders,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuEntry::Dashboard => "Dashboard",
            MenuEntry::Products => "Produtos",
            MenuEntry::Categories => "Categorias",
            MenuEntry::Orders => "Pedidos",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            MenuEntry::Dashboard => Icon::Dashboard,
            MenuEntry::Products => Icon::Products,
            MenuEntry::Categories => Icon::Categories,
            MenuEntry::Orders => Icon::Orders,
        }
    }

    pub fn tab(self) -> TabKey {
        match self {
            MenuEntry::Dashboard => TabKey::Dashboard,
            MenuEntry::Products => TabKey::ProductList,
            MenuEntry::Categories => TabKey::CategoryList,
            MenuEntry::Orders => TabKey::OrderList,
        }
    }

    /// Highlighted while the active tab belongs to this entry (editors included)
    pub fn is_active_for(self, active: &TabKey) -> bool {
        active.list() == self.tab()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_open_distinct_tabs() {
        let tabs: Vec<TabKey> = MenuEntry::ALL.iter().map(|e| e.tab()).collect();
        for (i, a) in tabs.iter().enumerate() {
            for b in &tabs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_editor_highlights_its_entry() {
        let editor = TabKey::CategoryEdit("c1".into());
        assert!(MenuEntry::Categories.is_active_for(&editor));
        assert!(!MenuEntry::Products.is_active_for(&editor));
        assert!(MenuEntry::Dashboard.is_active_for(&TabKey::Dashboard));
    }
}
