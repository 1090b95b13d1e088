pub mod kind;
pub mod language;
pub mod raw;
pub mod symbol;

pub use kind::*;
pub use language::*;
pub use raw::*;
pub use symbol::*;
