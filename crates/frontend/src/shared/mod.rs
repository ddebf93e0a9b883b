pub mod api;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod date_utils;
pub mod icons;
pub mod list;
pub mod list_utils;
pub mod modal;
