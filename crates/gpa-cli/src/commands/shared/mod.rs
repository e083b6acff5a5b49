pub mod issue;
pub mod listing;
pub mod sheet;
