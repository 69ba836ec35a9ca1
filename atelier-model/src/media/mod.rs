pub mod collection;
pub mod descriptor;
pub mod geometry;
pub mod version;

pub use collection::*;
pub use descriptor::*;
pub use geometry::*;
pub use version::*;
