pub mod auth;
pub mod contact;
pub mod industries;
pub mod jobs;
pub mod products;
pub mod trainings;
