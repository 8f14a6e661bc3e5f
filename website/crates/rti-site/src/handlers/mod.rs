//! Request Handlers

pub mod api;
pub mod documents;
pub mod health;
pub mod home;
pub mod regions;
