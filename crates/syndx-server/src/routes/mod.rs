pub mod cases;
pub mod diagnose;
pub mod health;
pub mod rules;
pub mod surveillance;
