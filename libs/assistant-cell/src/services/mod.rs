pub mod engine;
pub mod openai;
pub mod resolver;
pub mod rules;
pub mod session;
pub mod suggestion;
pub mod voice_booking;
