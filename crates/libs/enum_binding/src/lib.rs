#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::module_name_repetitions)]

//! Binding of raw request strings onto closed enum kinds.
//!
//! A kind is declared with [`enum_kind!`], which implements [`EnumKind`] plus
//! `Display`, `FromStr` and serde `Deserialize` on top of the resolver. The
//! resolver itself is [`resolve`] (default settings) or an [`EnumResolver`]
//! built from [`BindingSettings`].

pub mod de;
mod error;
mod kind;
mod resolver;
mod settings;

pub use error::*;
pub use kind::*;
pub use resolver::*;
pub use settings::*;

#[doc(hidden)]
pub mod __private {
    pub use serde;
}
