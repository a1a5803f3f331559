//! Shared core of the table wizard.
//!
//! The `model` module holds the column descriptors authored in the wizard.
//! `sample` and `codegen` are the two pure transformations run over a
//! finished [`model::sequence::ColumnConfigSequence`]: synthetic preview rows
//! and the generated table source listing. Both read the per-column
//! dispatch computed in `plan`, which keeps the live preview (`preview`)
//! and the generated cell logic in step.

pub mod codegen;
pub mod model;
pub mod naming;
pub mod plan;
pub mod preview;
pub mod requests;
pub mod sample;
