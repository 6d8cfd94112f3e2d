pub mod add;
pub mod catalog;
pub mod delete;
pub mod dispatch;
pub mod edit;
pub mod export;
pub mod history;
pub mod list;
pub mod region;
pub mod report;
pub mod shared;
