// Domain layer module
pub mod base;
pub mod entities;
pub mod fields;
pub mod validators;
pub mod value_objects;

pub use base::*;
pub use entities::*;
pub use fields::*;
pub use validators::*;
pub use value_objects::*;
