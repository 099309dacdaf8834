pub mod fallback;
pub mod greet;
pub mod hello;
pub mod status;
pub mod version;

pub use fallback::not_found_handler;
pub use greet::greet_handler;
pub use hello::{hello_handler, root_handler};
pub use status::status_handler;
pub use version::version_handler;
