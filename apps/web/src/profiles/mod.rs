// Runner profiles: pace parsing, validation and the list/create pages.

pub mod handlers;
pub mod pace;
pub mod service;
