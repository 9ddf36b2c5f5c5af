pub mod http_speech_repository;
pub mod speech_repository;

pub use http_speech_repository::HttpSpeechRepository;
pub use speech_repository::SpeechRepository;
