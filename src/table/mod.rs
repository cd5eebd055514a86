pub mod data;
pub mod filters;
pub mod io;
pub mod schema;
