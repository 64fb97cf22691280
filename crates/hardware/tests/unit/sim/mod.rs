/// Image parsing and file loading.
pub mod loader;
