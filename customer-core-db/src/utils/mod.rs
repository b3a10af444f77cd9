pub mod phone;
pub mod unique_id;

pub use phone::*;
pub use unique_id::*;
