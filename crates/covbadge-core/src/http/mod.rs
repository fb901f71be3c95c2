//! HTTP access to the badge rendering service

pub mod badge_url;
pub mod client;

pub use badge_url::{badge_url, escape_field};
pub use client::BadgeClient;
