pub use sqlhint_app as app;
pub use sqlhint_domain as domain;
pub use sqlhint_infra as infra;

pub mod error;
pub mod logging;
pub mod output;
