pub mod badges;
pub mod cry_player;
pub mod locale;
pub mod presenter;
pub mod progress;
pub mod unlocks;

// Re-export main components
pub use badges::*;
pub use cry_player::*;
pub use locale::*;
pub use presenter::*;
pub use progress::*;
pub use unlocks::*;
