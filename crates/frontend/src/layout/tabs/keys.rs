//! Tab keys - the one place where a screen maps to its tab key and title

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TabKey {
    Dashboard,
    ProductList,
    ProductNew,
    ProductEdit(String),
    CategoryList,
    CategoryNew,
    CategoryEdit(String),
    OrderList,
    OrderNew,
    OrderEdit(String),
}

const DASHBOARD: &str = "d400_order_summary";
const PRODUCT: &str = "a001_product";
const CATEGORY: &str = "a002_category";
const ORDER: &str = "a003_order";
const NEW_SUFFIX: &str = "_new";
const DETAIL_INFIX: &str = "_detail_";

impl TabKey {
    pub fn as_key(&self) -> String {
        match self {
            TabKey::Dashboard => DASHBOARD.to_string(),
            TabKey::ProductList => PRODUCT.to_string(),
            TabKey::ProductNew => format!("{PRODUCT}{NEW_SUFFIX}"),
            TabKey::ProductEdit(id) => format!("{PRODUCT}{DETAIL_INFIX}{id}"),
            TabKey::CategoryList => CATEGORY.to_string(),
            TabKey::CategoryNew => format!("{CATEGORY}{NEW_SUFFIX}"),
            TabKey::CategoryEdit(id) => format!("{CATEGORY}{DETAIL_INFIX}{id}"),
            TabKey::OrderList => ORDER.to_string(),
            TabKey::OrderNew => format!("{ORDER}{NEW_SUFFIX}"),
            TabKey::OrderEdit(id) => format!("{ORDER}{DETAIL_INFIX}{id}"),
        }
    }

    pub fn from_key(key: &str) -> Option<TabKey> {
        if key == DASHBOARD {
            return Some(TabKey::Dashboard);
        }
        let (prefix, rest) = [PRODUCT, CATEGORY, ORDER]
            .into_iter()
            .find_map(|p| key.strip_prefix(p).map(|rest| (p, rest)))?;

        let make = |kind: Kind| match (prefix, kind) {
            (PRODUCT, Kind::List) => TabKey::ProductList,
            (PRODUCT, Kind::New) => TabKey::ProductNew,
            (PRODUCT, Kind::Edit(id)) => TabKey::ProductEdit(id),
            (CATEGORY, Kind::List) => TabKey::CategoryList,
            (CATEGORY, Kind::New) => TabKey::CategoryNew,
            (CATEGORY, Kind::Edit(id)) => TabKey::CategoryEdit(id),
            (_, Kind::List) => TabKey::OrderList,
            (_, Kind::New) => TabKey::OrderNew,
            (_, Kind::Edit(id)) => TabKey::OrderEdit(id),
        };

        match rest {
            "" => Some(make(Kind::List)),
            NEW_SUFFIX => Some(make(Kind::New)),
            _ => {
                let id = rest.strip_prefix(DETAIL_INFIX)?;
                if id.is_empty() {
                    None
                } else {
                    Some(make(Kind::Edit(id.to_string())))
                }
            }
        }
    }

    pub fn title(&self) -> String {
        match self {
            TabKey::Dashboard => "Dashboard".to_string(),
            TabKey::ProductList => "Produtos".to_string(),
            TabKey::ProductNew => "Novo Produto".to_string(),
            TabKey::ProductEdit(id) => format!("Produto {}", short_id(id)),
            TabKey::CategoryList => "Categorias".to_string(),
            TabKey::CategoryNew => "Nova Categoria".to_string(),
            TabKey::CategoryEdit(id) => format!("Categoria {}", short_id(id)),
            TabKey::OrderList => "Pedidos".to_string(),
            TabKey::OrderNew => "Novo Pedido".to_string(),
            TabKey::OrderEdit(id) => format!("Pedido {}", short_id(id)),
        }
    }

    /// List tab an editor returns to on save or cancel
    pub fn list(&self) -> TabKey {
        match self {
            TabKey::Dashboard => TabKey::Dashboard,
            TabKey::ProductList | TabKey::ProductNew | TabKey::ProductEdit(_) => TabKey::ProductList,
            TabKey::CategoryList | TabKey::CategoryNew | TabKey::CategoryEdit(_) => {
                TabKey::CategoryList
            }
            TabKey::OrderList | TabKey::OrderNew | TabKey::OrderEdit(_) => TabKey::OrderList,
        }
    }
}

enum Kind {
    List,
    New,
    Edit(String),
}

/// Last 6 characters of an API id, enough to tell tabs apart
fn short_id(id: &str) -> &str {
    let start = id.char_indices().rev().nth(5).map(|(i, _)| i).unwrap_or(0);
    &id[start..]
}
