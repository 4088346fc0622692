pub mod course;
pub mod loaders;
pub mod query;
pub mod stats;
pub mod student;

pub use course::{Branch, Course};
pub use loaders::{load_student_batch, load_student_batches, StudentBatch};
pub use query::{QuerySpec, SortField, SortOrder};
pub use stats::{AggregateStats, CourseCount};
pub use student::{NewStudent, PercentageBand, StudentId, StudentInput, StudentRecord};
