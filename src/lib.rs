pub mod convert;
pub mod envconfig;

pub use convert::{BatchConverter, Converter, NotedownConverter};
