pub use sqlhint_app as app;
pub use sqlhint_domain as domain;

pub mod adapters;
pub mod config;
