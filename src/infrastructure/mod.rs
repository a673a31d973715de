pub mod bootstrap;
pub mod langid;
pub mod tabular;
pub mod translation;
