#![deny(unexpected_cfgs)]
//
#![warn(clippy::cargo)]
#![warn(clippy::nursery)]
//
// https://github.com/rust-lang/rust-clippy/issues/16440
#![allow(clippy::multiple_crate_versions)]

mod alert;

pub mod discord;
pub mod validate;

pub use alert::{AlertStyle, ip_change_notification};

/// Server state reported by the IP change alert, as handed over by the DDNS script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemStatus {
    pub new_ip: String,
    pub apache_status: String,
    pub update_status: String,
    pub system_time: String,
    pub domain_status: String,
}
