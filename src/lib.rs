pub mod dom;
pub mod schedule;
pub mod clock;
pub mod rotation;
pub mod engine;
