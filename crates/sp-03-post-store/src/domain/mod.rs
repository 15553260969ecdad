pub mod entities;
pub mod errors;
pub mod keys;
pub mod model;

pub use entities::*;
pub use errors::*;
pub use keys::*;
pub use model::*;
