#![deny(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc)]

mod analysis;
mod api;
mod backend;
mod biometrics;

pub use analysis::*;
pub use api::*;
pub use backend::*;
pub use biometrics::*;
