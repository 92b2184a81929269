pub mod catalog;
pub mod docs;
pub mod serve;
pub mod show;
pub mod summary;
pub mod tools;
