pub mod health;
pub mod status;
pub mod summary;
pub mod tools;
