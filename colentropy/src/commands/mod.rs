// colentropy/src/commands/mod.rs
pub mod entropy;
