//! Command-line workflows built on the domain and git layers

pub mod orchestration;
