pub mod api_client;
pub mod components;
pub mod config;
pub mod date_utils;
pub mod icons;
pub mod outcome;
pub mod validation;
