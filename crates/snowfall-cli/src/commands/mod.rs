pub mod config;
pub mod mesh;
pub mod run;
