//! Generic data-fetching and mutation handles
//!
//! Every admin screen is a [`ResourceReader`] for its list plus one or more
//! [`ResourceWriter`]s for its create/edit/delete actions.

pub mod bulk;
pub mod reader;
pub mod writer;

pub use bulk::{BulkReport, delete_many_then_refresh};
pub use reader::{FetchOutcome, ReadResult, ReadState, ResourceReader};
pub use writer::{ResourceWriter, WriteMethod, WriteState};
