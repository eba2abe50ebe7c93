//! Command implementations for the component-builder CLI

pub mod build;
