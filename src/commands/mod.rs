//! Command implementations
//!
//! Every command is a `Repository` method that first asks the access mediator
//! whether the calling user may run it, then composes the object store, the
//! reference store and the index into the requested workflow.

pub mod porcelain;
