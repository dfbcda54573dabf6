use contracts::domain::a001_product::Product;
use contracts::domain::a002_category::Category;
use contracts::domain::common::AggregateId;

/// Item that can be moved between the two panels of a dual-list editor
pub trait ListItem {
    /// Stable identifier, unique within one editor session
    fn id(&self) -> &str;
    /// Text shown in the panel
    fn label(&self) -> String;
}

/// Item that contributes to a running total
pub trait Priced: ListItem {
    fn price(&self) -> f64;
}

impl ListItem for Product {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

impl Priced for Product {
    fn price(&self) -> f64 {
        self.price
    }
}

impl ListItem for Category {
    fn id(&self) -> &str {
        self.id.as_str()
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}
