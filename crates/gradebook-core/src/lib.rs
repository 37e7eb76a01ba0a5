//! gradebook-core — Students, courses, enrollments and grade aggregation.
//!
//! This crate defines the entity model, the enrollment relationship between
//! students and courses, and the statistics computed on top of it.

pub mod error;
pub mod grade;
pub mod model;
pub mod report;
pub mod service;
pub mod statistics;
pub mod store;
pub mod traits;

pub use error::{GradebookError, Result};
pub use grade::Grade;
pub use model::{Course, Enrollment, Student, Teacher};
pub use service::UniversityService;
pub use store::{CourseStore, MemoryStore, StudentStore, TeacherStore};
pub use traits::{Entity, Store};
