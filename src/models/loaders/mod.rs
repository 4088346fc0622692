pub mod toml_loader;

pub use toml_loader::{load_student_batch, load_student_batches, StudentBatch};
