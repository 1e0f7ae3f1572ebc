//! Типы, общие для frontend и backend.

pub mod usecases;
