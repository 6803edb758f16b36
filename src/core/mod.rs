//! Core data structures for the employee service

pub mod models;
