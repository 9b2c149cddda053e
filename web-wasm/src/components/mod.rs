pub mod gallery;
pub mod header;
pub mod worker_modal;
pub mod workers;
