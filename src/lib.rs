//! In-hand Salary Engine
//!
//! This crate computes take-home annual and monthly salary from an annual
//! gross salary, applying optional gratuity and provident fund deductions
//! followed by a progressive income tax.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
