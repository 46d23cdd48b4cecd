pub mod components;
pub mod config;
pub mod date_utils;
pub mod drawer;
pub mod icons;
pub mod modal;
pub mod toast;
