pub mod calculate;
pub mod certificate;
pub mod check_student;
pub mod dispatch;
pub mod grades;
pub mod schema;
pub mod shared;
pub mod shell;
pub mod simulate;
