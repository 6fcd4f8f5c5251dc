pub mod controller;
pub mod assembler;
pub mod collaborator;
pub mod session;

pub use controller::*;
pub use assembler::*;
pub use collaborator::*;
pub use session::*;
