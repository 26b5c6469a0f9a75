pub mod image;
pub mod session;
pub mod topic;

pub use image::GeneratedImage;
pub use session::{ChatSession, ChatTurn, Role};
pub use topic::Topic;
