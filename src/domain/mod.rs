pub mod boundary;
pub mod error;
pub mod path;
pub mod scene;
