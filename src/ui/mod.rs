//! Terminal presentation: async line console plus pure text renderers.

pub mod console;
pub mod render;

pub use console::{Console, StdConsole, stdio};
pub use render::Notice;
