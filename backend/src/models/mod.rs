pub mod season;
pub mod time;
pub mod window;

pub use season::*;
pub use time::*;
pub use window::*;
