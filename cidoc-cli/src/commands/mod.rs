pub mod pipeline;
pub mod upload;
