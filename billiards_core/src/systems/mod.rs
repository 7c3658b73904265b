pub mod collision;
pub mod cushion;
pub mod movement;
pub mod pockets;

pub use collision::*;
pub use cushion::*;
pub use movement::*;
pub use pockets::*;
