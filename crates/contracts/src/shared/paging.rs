use serde::{Deserialize, Serialize};

/// Body of every listing endpoint: `GET /{resource}` and `GET /{resource}?page=&limit=`
///
/// `total` is the server-side row count and may exceed `data.len()`.
/// Unpaginated collection fetches may omit it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    #[serde(default)]
    pub total: usize,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

/// Query string of a paginated listing request
///
/// The API counts pages from 1 while the screens count from 0.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: usize,
    /// Rows per page
    pub limit: usize,
}

impl ListQuery {
    /// Build the query for a 0-based page index
    pub fn for_page(index: usize, size: usize) -> Self {
        Self {
            page: index + 1,
            limit: size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_page_is_one_based() {
        assert_eq!(ListQuery::for_page(0, 10).page, 1);
        assert_eq!(ListQuery::for_page(2, 10).page, 3);
        assert_eq!(ListQuery::for_page(2, 25).limit, 25);
    }

    #[test]
    fn test_list_response_without_total() {
        let parsed: ListResponse<String> = serde_json::from_str(r#"{"data":["a","b"]}"#).unwrap();
        assert_eq!(parsed.data, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(parsed.total, 0);
    }

    #[test]
    fn test_list_response_with_total() {
        let parsed: ListResponse<u32> = serde_json::from_str(r#"{"data":[1,2,3],"total":45}"#).unwrap();
        assert_eq!(parsed.data.len(), 3);
        assert_eq!(parsed.total, 45);
    }
}
