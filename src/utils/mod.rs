// src/utils/mod.rs

pub mod secrets;
