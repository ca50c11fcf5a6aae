//! Ramita core library.
//!
//! Samples a uniform random spanning tree of a simple undirected graph with
//! Wilson's loop-erased random walk, then optionally densifies the tree with
//! extra edges up to a capped count. Graphs are represented as dense
//! symmetric adjacency matrices; inputs are assumed small enough for that
//! representation.

mod builder;
mod cycles;
mod error;
mod matrix;
mod sampler;
mod tree;
mod wilson;

pub use crate::{
    builder::SamplerBuilder,
    error::{MatrixError, MatrixErrorCode, Result, SamplerError, SamplerErrorCode},
    matrix::AdjacencyMatrix,
    sampler::TreeSampler,
    tree::SampledTree,
};

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;
