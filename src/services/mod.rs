pub mod mutation_gateway;
pub mod record_store;

pub use mutation_gateway::{ImportSummary, MutationGateway};
pub use record_store::{RecordStore, Snapshot};
