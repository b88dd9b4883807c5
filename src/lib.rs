pub mod config;
pub mod core;

pub use crate::core::codec::{decode, decode_with_selector, encode};
pub use crate::core::language::{Language, LanguageError};
pub use crate::core::signal::{to_signals, Signal, SoundFiles};
pub use crate::core::unicode::{script_of, split_syllable, Script, Syllable};
