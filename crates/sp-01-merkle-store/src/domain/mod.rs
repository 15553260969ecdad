pub mod entities;
pub mod errors;
pub mod root;

pub use entities::*;
pub use errors::*;
pub use root::*;
