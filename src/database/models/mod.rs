pub mod application;
pub mod industry;
pub mod job;
pub mod message;
pub mod product;
pub mod registration;
pub mod training;
