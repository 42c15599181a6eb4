//! Yardplan Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Yardplan layout
//! engine and its collaborators. It includes:
//!
//! - **Geometry**: Basic geometric types ([`geometry`] module)
//! - **Spec**: The immutable layout input, [`spec::YardSpec`]
//! - **Elements**: Placed rectangles and their kinds ([`element`] module)
//! - **Layout**: The computed result, [`yard::YardLayout`]
//! - **Diagnostics**: Non-fatal findings attached to a layout ([`diagnostic`] module)
//!
//! Nothing here renders or performs I/O.

pub mod diagnostic;
pub mod element;
pub mod geometry;
pub mod spec;
pub mod yard;
