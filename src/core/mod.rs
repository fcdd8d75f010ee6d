pub mod capture;
pub mod edit;
pub mod filter;
pub mod form;
pub mod log;
pub mod store;
pub mod table;
