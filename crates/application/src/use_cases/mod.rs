pub mod resolve_records;

pub use resolve_records::{ResolveRecordsUseCase, DEFAULT_FETCH_TIMEOUT};
