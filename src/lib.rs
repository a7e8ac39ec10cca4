pub mod config;
pub mod error;
pub mod input;
pub mod shared;
pub mod stats;
pub mod translator;

pub use config::SimulatorConfig;
pub use error::TranslateError;
pub use input::AddressReader;
pub use shared::SharedTranslator;
pub use stats::Statistics;
pub use translator::{Resolution, Translation, Translator};

/// Translator with the frame size of the default 16 bit layout.
pub type DefaultTranslator = Translator<{ config::FRAME_SIZE }>;
