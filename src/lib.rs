pub mod core {
    pub mod command;
    pub mod domain;
    pub mod events;
    pub mod library;
    pub mod repository;
}

pub mod utils {
    pub mod date;
    pub mod file;
    pub mod logs;
}

pub mod books;
pub mod gateway;
pub mod library;
pub mod remote;
pub mod shelves;
pub mod sync;

#[cfg(test)]
pub(crate) mod testing;
