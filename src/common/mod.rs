pub mod config;
pub mod distro;
pub mod logging;
pub mod package;
pub mod paths;
pub mod privilege;
