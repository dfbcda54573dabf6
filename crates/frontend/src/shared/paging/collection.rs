use super::deletion::{DeleteFlow, DeleteMessages};
use super::state::{ListingRequest, PagingState};
use crate::layout::notice::{Notice, NoticeService};
use crate::shared::api_utils::{ApiError, RestResource};
use contracts::shared::ListResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;

/// Shown when a page cannot be loaded
pub const LOAD_FAILURE: &str = "Erro ao carregar os dados.";

/// Side effect requested by [`CollectionModel`]
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Fetch(ListingRequest),
    Delete(String),
    Notify(Notice),
}

/// Paginated listing plus its delete flow, without any I/O.
///
/// Every input returns the commands the caller has to run.
#[derive(Debug, Clone)]
pub struct CollectionModel<T> {
    pub paging: PagingState<T>,
    pub deletion: DeleteFlow,
    messages: DeleteMessages,
}

impl<T> CollectionModel<T> {
    pub fn new(page_size: usize, messages: DeleteMessages) -> Self {
        Self {
            paging: PagingState::new(page_size),
            deletion: DeleteFlow::default(),
            messages,
        }
    }

    pub fn messages(&self) -> &DeleteMessages {
        &self.messages
    }

    pub fn start(&mut self) -> Command {
        Command::Fetch(self.paging.start())
    }

    pub fn refresh(&mut self) -> Command {
        Command::Fetch(self.paging.refresh())
    }

    pub fn set_page(&mut self, index: usize) -> Command {
        Command::Fetch(self.paging.set_page(index))
    }

    pub fn set_page_size(&mut self, size: usize) -> Command {
        Command::Fetch(self.paging.set_page_size(size))
    }

    pub fn on_loaded(
        &mut self,
        epoch: u64,
        result: Result<ListResponse<T>, ApiError>,
    ) -> Vec<Command> {
        match result {
            Ok(page) => {
                if !self.paging.complete(epoch, page.data, page.total) {
                    log::debug!("dropping stale page response (epoch {epoch})");
                    return Vec::new();
                }
                match self.paging.past_end() {
                    Some(last) => {
                        log::debug!("page {} is past the end, moving to {last}", self.paging.index);
                        vec![self.set_page(last)]
                    }
                    None => Vec::new(),
                }
            }
            Err(err) => {
                if self.paging.fail(epoch, err.to_string()) {
                    log::error!("listing failed: {err}");
                    vec![Command::Notify(Notice::error(LOAD_FAILURE))]
                } else {
                    log::debug!("dropping stale page failure (epoch {epoch}): {err}");
                    Vec::new()
                }
            }
        }
    }

    pub fn request_delete(&mut self, id: impl Into<String>) {
        self.deletion.request(id);
    }

    pub fn cancel_delete(&mut self) {
        self.deletion.cancel();
    }

    pub fn confirm_delete(&mut self) -> Option<Command> {
        self.deletion.confirm().map(Command::Delete)
    }

    /// Close the delete flow. Success reloads the current page once.
    pub fn on_deleted(&mut self, result: Result<(), ApiError>) -> Vec<Command> {
        let target = self.deletion.target().unwrap_or_default().to_string();
        self.deletion.finish();
        match result {
            Ok(()) => vec![self.refresh()],
            Err(err) => {
                log::error!("delete of {target} failed: {err}");
                vec![Command::Notify(Notice::error(self.messages.for_error(&err)))]
            }
        }
    }
}

/// Leptos driver of a [`CollectionModel`] bound to one REST resource
pub struct PagedCollection<T: 'static> {
    model: RwSignal<CollectionModel<T>>,
    resource: StoredValue<RestResource<T>>,
    notices: NoticeService,
}

impl<T: 'static> Clone for PagedCollection<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for PagedCollection<T> {}

impl<T> PagedCollection<T>
where
    T: DeserializeOwned + Clone + Send + Sync + 'static,
{
    pub fn new(
        resource: RestResource<T>,
        page_size: usize,
        messages: DeleteMessages,
        notices: NoticeService,
    ) -> Self {
        Self {
            model: RwSignal::new(CollectionModel::new(page_size, messages)),
            resource: StoredValue::new(resource),
            notices,
        }
    }

    pub fn start(&self) {
        self.apply(|m| m.start());
    }

    pub fn refresh(&self) {
        self.apply(|m| m.refresh());
    }

    pub fn set_page(&self, index: usize) {
        log::debug!("{}: page {}", self.resource_name(), index);
        self.apply(|m| m.set_page(index));
    }

    pub fn set_page_size(&self, size: usize) {
        log::debug!("{}: page size {}", self.resource_name(), size);
        self.apply(|m| m.set_page_size(size));
    }

    pub fn request_delete(&self, id: String) {
        self.model.update(|m| m.request_delete(id));
    }

    pub fn cancel_delete(&self) {
        self.model.update(|m| m.cancel_delete());
    }

    pub fn confirm_delete(&self) {
        if let Some(Some(cmd)) = self.model.try_update(|m| m.confirm_delete()) {
            self.run(vec![cmd]);
        }
    }

    pub fn rows(&self) -> Vec<T> {
        self.model.with(|m| m.paging.rows.clone())
    }

    pub fn with<U>(&self, f: impl FnOnce(&CollectionModel<T>) -> U) -> U {
        self.model.with(f)
    }

    pub fn is_confirm_open(&self) -> bool {
        self.model.with(|m| m.deletion.is_confirm_open())
    }

    pub fn is_deleting(&self) -> bool {
        self.model.with(|m| m.deletion.is_in_flight())
    }

    fn apply(&self, f: impl FnOnce(&mut CollectionModel<T>) -> Command) {
        if let Some(cmd) = self.model.try_update(f) {
            self.run(vec![cmd]);
        }
    }

    fn resource_name(&self) -> &'static str {
        self.resource.with_value(|r| r.resource())
    }

    fn run(&self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Notify(notice) => self.notices.show(notice),
                Command::Fetch(request) => {
                    let this = *self;
                    let resource = self.resource.get_value();
                    spawn_local(async move {
                        let result = resource.list(request.query()).await;
                        // None once the screen is gone
                        if let Some(next) = this.model.try_update(|m| m.on_loaded(request.epoch, result)) {
                            this.run(next);
                        }
                    });
                }
                Command::Delete(id) => {
                    let this = *self;
                    let resource = self.resource.get_value();
                    spawn_local(async move {
                        let result = resource.delete(&id).await;
                        if let Some(next) = this.model.try_update(|m| m.on_deleted(result)) {
                            this.run(next);
                        }
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::notice::NoticeLevel;

    const MESSAGES: DeleteMessages = DeleteMessages {
        confirm_title: "Excluir produto",
        confirm_text: "Tem certeza que deseja excluir este produto?",
        conflict: "Produto vinculado a um pedido e não pode ser excluído",
        failure: "Erro inesperado ao tentar excluir o produto.",
    };

    fn page(data: Vec<u32>, total: usize) -> Result<ListResponse<u32>, ApiError> {
        Ok(ListResponse { data, total })
    }

    fn loaded_model() -> CollectionModel<u32> {
        let mut model = CollectionModel::new(10, MESSAGES);
        let Command::Fetch(req) = model.start() else {
            panic!("start must fetch");
        };
        assert!(model.on_loaded(req.epoch, page((1..=10).collect(), 45)).is_empty());
        model
    }

    fn fetches(cmds: &[Command]) -> usize {
        cmds.iter().filter(|c| matches!(c, Command::Fetch(_))).count()
    }

    #[test]
    fn test_stale_response_does_not_overwrite() {
        let mut model: CollectionModel<u32> = CollectionModel::new(10, MESSAGES);
        let Command::Fetch(first) = model.start() else { panic!() };
        let Command::Fetch(second) = model.set_page(1) else { panic!() };

        model.on_loaded(second.epoch, page(vec![11, 12], 45));
        model.on_loaded(first.epoch, page(vec![1, 2], 45));

        assert_eq!(model.paging.rows, vec![11, 12]);
        assert_eq!(model.paging.index, 1);
    }

    #[test]
    fn test_load_failure_notifies_and_keeps_rows() {
        let mut model = loaded_model();
        let Command::Fetch(req) = model.set_page(1) else { panic!() };

        let cmds = model.on_loaded(req.epoch, Err(ApiError::Network("offline".into())));
        assert_eq!(cmds, vec![Command::Notify(Notice::error(LOAD_FAILURE))]);
        assert_eq!(model.paging.rows.len(), 10);
        assert_eq!(model.paging.total, 45);
    }

    #[test]
    fn test_delete_success_refreshes_exactly_once() {
        let mut model = loaded_model();
        model.request_delete("7");
        assert_eq!(model.confirm_delete(), Some(Command::Delete("7".into())));

        let cmds = model.on_deleted(Ok(()));
        assert_eq!(fetches(&cmds), 1);
        assert_eq!(cmds.len(), 1);
        assert_eq!(model.deletion, DeleteFlow::NoPending);
        let Command::Fetch(req) = &cmds[0] else { panic!() };
        assert_eq!(req.index, 0);
        assert_eq!(req.epoch, model.paging.epoch());
    }

    #[test]
    fn test_deleting_last_row_of_last_page_moves_back() {
        let mut model: CollectionModel<u32> = CollectionModel::new(10, MESSAGES);
        model.start();
        let Command::Fetch(req) = model.set_page(4) else { panic!() };
        model.on_loaded(req.epoch, page(vec![41], 41));

        model.request_delete("41");
        model.confirm_delete();
        let cmds = model.on_deleted(Ok(()));
        let [Command::Fetch(refresh)] = &cmds[..] else { panic!("expected one refresh") };
        assert_eq!(refresh.index, 4);

        let cmds = model.on_loaded(refresh.epoch, page(vec![], 40));
        let [Command::Fetch(back)] = &cmds[..] else { panic!("expected a fetch of the last page") };
        assert_eq!(back.index, 3);
        assert_eq!(model.paging.index, 3);

        assert!(model.on_loaded(back.epoch, page((31..=40).collect(), 40)).is_empty());
        assert_eq!(model.paging.range_label(), "31-40 de 40");
    }

    #[test]
    fn test_delete_conflict_shows_specific_message() {
        let mut model = loaded_model();
        let rows_before = model.paging.rows.clone();
        model.request_delete("7");
        model.confirm_delete();

        let cmds = model.on_deleted(Err(ApiError::Conflict));
        assert_eq!(fetches(&cmds), 0);
        match &cmds[..] {
            [Command::Notify(notice)] => {
                assert_eq!(notice.text, MESSAGES.conflict);
                assert_eq!(notice.level, NoticeLevel::Error);
            }
            other => panic!("unexpected commands: {other:?}"),
        }
        assert_eq!(model.paging.rows, rows_before);
        assert_eq!(model.deletion, DeleteFlow::NoPending);
    }

    #[test]
    fn test_delete_other_failure_shows_generic_message() {
        let mut model = loaded_model();
        model.request_delete("7");
        model.confirm_delete();

        let cmds = model.on_deleted(Err(ApiError::Status(500)));
        assert_eq!(cmds, vec![Command::Notify(Notice::error(MESSAGES.failure))]);
    }

    #[test]
    fn test_cancel_issues_nothing() {
        let mut model = loaded_model();
        model.request_delete("7");
        model.cancel_delete();
        assert_eq!(model.confirm_delete(), None);
        assert_eq!(model.deletion, DeleteFlow::NoPending);
    }
}
