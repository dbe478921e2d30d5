// HTTP routes
pub mod export;
pub mod generate;
pub mod health;

pub use export::*;
pub use generate::*;
pub use health::*;
