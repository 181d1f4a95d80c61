pub mod material;
pub mod overview;
pub mod product;
pub mod transaction;

pub use material::*;
pub use overview::*;
pub use product::*;
pub use transaction::*;
