//! Book catalog lookups by name, by allow-listed author, or all at once.

pub mod books;
pub mod lookup;

pub mod core {
    pub mod command;
    pub mod context;
    pub mod controller;
    pub mod domain;
    pub mod library;
    pub mod logger;
    pub mod repository;
}

pub mod utils {
    pub mod date;
    pub mod ddb;
}
