pub mod codec;
pub mod language;
pub mod signal;
pub mod table;
pub mod unicode;
