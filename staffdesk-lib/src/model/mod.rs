//! HR record types

mod attendance;
mod department;
mod employee;
mod leave;

pub use attendance::*;
pub use department::*;
pub use employee::*;
pub use leave::*;
