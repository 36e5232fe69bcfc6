pub mod badge;
pub mod errors;
pub mod guess;
pub mod hints;

// Re-export all types
pub use badge::*;
pub use errors::*;
pub use guess::*;
pub use hints::*;
