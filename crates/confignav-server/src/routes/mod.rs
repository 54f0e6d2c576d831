pub mod catalog;
pub mod goto;
