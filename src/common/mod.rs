// Common types shared across the crate

pub mod path;

pub use path::NavigablePath;
