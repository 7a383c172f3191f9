pub mod bytes;
pub mod io;
