//! PageFrame - root wrapper for every page rendered inside a tab.
//!
//! Sets two attributes on the root element:
//!   - `id`                 - `"{entity}--{category}"`, e.g. `"a001_product--list"`
//!   - `data-page-category` - see [`PageCategory::as_str`]
//!
//! ```ignore
//! view! {
//!     <PageFrame page_id="a001_product--list" category=PageCategory::List>
//!         <div class="page__header">...</div>
//!         <div class="page__content">...</div>
//!     </PageFrame>
//! }
//! ```

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageCategory {
    /// Paginated table of records
    List,
    /// Create / edit form for a single record
    Detail,
    Dashboard,
}

impl PageCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            PageCategory::List => "list",
            PageCategory::Detail => "detail",
            PageCategory::Dashboard => "dashboard",
        }
    }

    /// BEM classes of the root element
    pub fn class(self) -> &'static str {
        match self {
            PageCategory::List => "page",
            PageCategory::Detail => "page page--detail",
            PageCategory::Dashboard => "page page--dashboard",
        }
    }
}

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    category: PageCategory,
    children: Children,
) -> impl IntoView {
    view! {
        <div id=page_id class=category.class() data-page-category=category.as_str()>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_classes() {
        assert_eq!(PageCategory::List.class(), "page");
        assert_eq!(PageCategory::Detail.class(), "page page--detail");
        assert_eq!(PageCategory::Dashboard.as_str(), "dashboard");
    }
}
