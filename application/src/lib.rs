pub mod service;
pub mod state;
pub mod ticker;
pub mod transfer;

#[cfg(test)]
mod fixture;
