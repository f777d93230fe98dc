pub mod config;
pub mod open;
pub mod run;
pub mod status;

pub use config::handle_config;
pub use open::handle_open;
pub use run::handle_run;
pub use status::handle_status;
