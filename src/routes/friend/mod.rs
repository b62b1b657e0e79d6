mod handler;
pub mod model;

pub use handler::{add_friend, get_link};
