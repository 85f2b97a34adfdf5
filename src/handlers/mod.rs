//! API handlers, one module per domain

pub mod ads;
pub mod favorites;
pub mod health;
pub mod promotions;
pub mod ratings;
pub mod reports;
pub mod users;
