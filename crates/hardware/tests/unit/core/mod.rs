/// Machine state initialization and the word stores.
pub mod machine;
