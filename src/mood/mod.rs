pub mod mapper;
pub mod table;

pub use mapper::*;
pub use table::*;
