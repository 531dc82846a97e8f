pub mod category;
pub mod import;
pub mod posting;
