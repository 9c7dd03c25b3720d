pub mod args;
pub mod aws;
pub mod catalog;
pub mod config;
pub mod i18n;
pub mod interactive;
pub mod openbao;
pub mod provisioner;
pub mod report;
pub mod store;

pub use args::Args;
