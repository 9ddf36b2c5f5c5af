pub mod health;
pub mod tts;
