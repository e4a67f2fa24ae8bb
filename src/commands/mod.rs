pub mod analyze;
pub mod split;
pub mod vocabulary;

mod sources;
