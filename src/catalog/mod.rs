// src/catalog/mod.rs

//! Planning inputs: courses, the catalog they live in, and the requirement
//! trees curricula are made of.

pub mod course;
pub mod requirement;

pub use course::{Catalog, Course, CourseCode, Season};
pub use requirement::{CourseGroup, Curriculum, Requirement};
