//! Entity structs for gpacert domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! be read from subject sheets, printed as JSON, and dumped by `gpa schema`.

mod sheet;
mod student;
mod subject;
mod summary;

pub use sheet::SubjectSheet;
pub use student::StudentInfo;
pub use subject::{ListedSubject, Subject, SubjectId, SubjectInput, ValidSubject};
pub use summary::GpaSummary;
