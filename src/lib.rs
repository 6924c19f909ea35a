pub mod books;
pub mod catalog;
pub mod core;
pub mod router;
pub mod utils;
pub mod web;
