pub mod clipboard_service;
pub mod mint_service;

#[cfg(test)]
mod mint_service_test;
