pub mod cursor;
pub mod handler;

pub use handler::handle_input;
