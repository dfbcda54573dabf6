//! Server-paginated listing with a confirm-before-delete flow
//!
//! [`state::PagingState`] and [`deletion::DeleteFlow`] are plain state machines.
//! [`collection::CollectionModel`] combines them and emits commands,
//! [`collection::PagedCollection`] runs those commands inside a screen and
//! [`view`] renders the parts every list page shares.

pub mod collection;
pub mod deletion;
pub mod state;
pub mod view;

pub use collection::{CollectionModel, Command, PagedCollection};
pub use deletion::{DeleteFlow, DeleteMessages};
pub use state::{ListingRequest, LoadState, PagingState};
pub use view::{CollectionFooter, CollectionStatus};
