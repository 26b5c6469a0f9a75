pub mod dispatcher;
pub mod image_store;
pub mod providers;

pub use dispatcher::{ImageDispatcher, PromptDispatcher};
pub use image_store::ImageStore;
