use contracts::shared::ListQuery;

/// Lifecycle of the current page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// A fetch issued by [`PagingState`], tagged with the epoch it belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingRequest {
    pub epoch: u64,
    pub index: usize,
    pub size: usize,
}

impl ListingRequest {
    pub fn query(&self) -> ListQuery {
        ListQuery::for_page(self.index, self.size)
    }
}

/// Pagination state of one listing screen.
///
/// `index` is 0-based. Every navigation bumps `epoch`; responses carrying an
/// older epoch are dropped so a slow page never overwrites a newer one.
#[derive(Debug, Clone, PartialEq)]
pub struct PagingState<T> {
    pub rows: Vec<T>,
    pub total: usize,
    pub index: usize,
    pub size: usize,
    pub status: LoadState,
    epoch: u64,
}

impl<T> PagingState<T> {
    pub fn new(size: usize) -> Self {
        Self {
            rows: Vec::new(),
            total: 0,
            index: 0,
            size: size.max(1),
            status: LoadState::Idle,
            epoch: 0,
        }
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// First load of the screen
    pub fn start(&mut self) -> ListingRequest {
        self.issue()
    }

    /// Reload the current page
    pub fn refresh(&mut self) -> ListingRequest {
        self.issue()
    }

    pub fn set_page(&mut self, index: usize) -> ListingRequest {
        self.index = index;
        self.issue()
    }

    /// Change the page size. Always returns to the first page.
    pub fn set_page_size(&mut self, size: usize) -> ListingRequest {
        self.size = size.max(1);
        self.index = 0;
        self.issue()
    }

    /// Apply a successful response. Returns `false` when the response is stale.
    pub fn complete(&mut self, epoch: u64, mut rows: Vec<T>, total: usize) -> bool {
        if epoch != self.epoch {
            return false;
        }
        rows.truncate(self.size);
        self.rows = rows;
        self.total = total;
        self.status = LoadState::Loaded;
        true
    }

    /// Apply a failed response. Rows of the previous page stay visible.
    pub fn fail(&mut self, epoch: u64, message: impl Into<String>) -> bool {
        if epoch != self.epoch {
            return false;
        }
        self.status = LoadState::Failed(message.into());
        true
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn total_pages(&self) -> usize {
        self.total.div_ceil(self.size)
    }

    /// Last valid index when a loaded page came back empty past the end of
    /// a non-empty collection, e.g. after deleting the only row of the last page.
    pub fn past_end(&self) -> Option<usize> {
        let pages = self.total_pages();
        let overshoot = self.status == LoadState::Loaded
            && self.rows.is_empty()
            && pages > 0
            && self.index >= pages;
        overshoot.then(|| pages - 1)
    }

    /// "1-10 de 45" style label of the rows on screen
    pub fn range_label(&self) -> String {
        if self.rows.is_empty() {
            return format!("0-0 de {}", self.total);
        }
        let first = self.index * self.size + 1;
        let last = (self.index * self.size + self.rows.len()).min(self.total.max(first));
        format!("{}-{} de {}", first, last, self.total)
    }

    fn issue(&mut self) -> ListingRequest {
        self.epoch += 1;
        self.status = LoadState::Loading;
        ListingRequest {
            epoch: self.epoch,
            index: self.index,
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<usize> {
        (0..n).collect()
    }

    #[test]
    fn test_new_state_is_idle() {
        let state: PagingState<usize> = PagingState::new(10);
        assert_eq!(state.status, LoadState::Idle);
        assert_eq!(state.index, 0);
        assert_eq!(state.total_pages(), 0);
    }

    #[test]
    fn test_request_is_one_based_on_the_wire() {
        let mut state: PagingState<usize> = PagingState::new(10);
        let first = state.start();
        assert_eq!(first.query(), ListQuery { page: 1, limit: 10 });

        let third = state.set_page(2);
        assert_eq!(third.query(), ListQuery { page: 3, limit: 10 });
        assert!(state.is_loading());
    }

    #[test]
    fn test_complete_loads_rows() {
        let mut state = PagingState::new(10);
        let req = state.start();
        assert!(state.complete(req.epoch, rows(10), 45));
        assert_eq!(state.status, LoadState::Loaded);
        assert_eq!(state.rows.len(), 10);
        assert_eq!(state.total_pages(), 5);
        assert_eq!(state.range_label(), "1-10 de 45");
    }

    #[test]
    fn test_rows_never_exceed_page_size() {
        let mut state = PagingState::new(5);
        let req = state.start();
        state.complete(req.epoch, rows(8), 8);
        assert_eq!(state.rows.len(), 5);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut state = PagingState::new(10);
        state.start();
        let page2 = state.set_page(1);
        let page3 = state.set_page(2);

        assert!(state.complete(page3.epoch, vec![30, 31], 45));
        assert!(!state.complete(page2.epoch, vec![20, 21], 45));
        assert!(!state.fail(page2.epoch, "late"));

        assert_eq!(state.index, 2);
        assert_eq!(state.rows, vec![30, 31]);
        assert_eq!(state.status, LoadState::Loaded);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut state: PagingState<usize> = PagingState::new(10);
        state.start();
        state.set_page(3);
        let req = state.set_page_size(25);
        assert_eq!(state.index, 0);
        assert_eq!(req.query(), ListQuery { page: 1, limit: 25 });
    }

    #[test]
    fn test_zero_page_size_is_clamped() {
        let mut state: PagingState<usize> = PagingState::new(0);
        assert_eq!(state.size, 1);
        state.set_page_size(0);
        assert_eq!(state.size, 1);
    }

    #[test]
    fn test_failure_keeps_previous_rows() {
        let mut state = PagingState::new(10);
        let req = state.start();
        state.complete(req.epoch, rows(10), 45);

        let req = state.set_page(1);
        assert!(state.fail(req.epoch, "Erro de rede"));
        assert_eq!(state.error(), Some("Erro de rede"));
        assert_eq!(state.rows, rows(10));
        assert_eq!(state.total, 45);
    }

    #[test]
    fn test_range_label_on_last_page() {
        let mut state = PagingState::new(10);
        state.start();
        let req = state.set_page(4);
        state.complete(req.epoch, rows(5), 45);
        assert_eq!(state.range_label(), "41-45 de 45");

        let empty: PagingState<usize> = PagingState::new(10);
        assert_eq!(empty.range_label(), "0-0 de 0");
    }

    #[test]
    fn test_empty_page_past_the_end() {
        let mut state = PagingState::new(10);
        state.start();
        let req = state.set_page(4);
        state.complete(req.epoch, rows(1), 41);
        assert_eq!(state.past_end(), None);

        let req = state.refresh();
        state.complete(req.epoch, Vec::new(), 40);
        assert_eq!(state.total_pages(), 4);
        assert_eq!(state.past_end(), Some(3));
        assert_eq!(state.range_label(), "0-0 de 40");
    }

    #[test]
    fn test_empty_collection_is_not_past_the_end() {
        let mut state: PagingState<usize> = PagingState::new(10);
        let req = state.start();
        state.complete(req.epoch, Vec::new(), 0);
        assert_eq!(state.past_end(), None);
    }
}
