//! Visits on graphs.
//!
//! Visits implement the [`Sequential`] trait. They borrow the graph
//! immutably, and keep their state (the set of discovered nodes and, if
//! needed, a stack) in the visit object, never in the graph: several visits
//! can thus run on the same graph, and a visit can be reused after a
//! [`reset`](Sequential::reset).

pub mod depth_first;

use dsi_progress_logger::ProgressLog;
use std::ops::ControlFlow;

/// A sequential visit.
///
/// Implementations must provide the [`visit`](Sequential::visit) method,
/// which performs a visit starting from a sequence of roots, and the
/// [`visit_all`](Sequential::visit_all) method, which performs a visit of the
/// whole graph.
///
/// The callback receives a node and returns a [`ControlFlow`]: returning
/// [`Break`](ControlFlow::Break) stops the visit immediately, and the
/// value is returned to the caller. If the visit cannot be interrupted,
/// use [`Infallible`](std::convert::Infallible) as break type and unwrap
/// the result with [`no_break::NoBreak`].
pub trait Sequential {
    /// Visits the graph from the specified roots.
    ///
    /// Roots are visited in order, and nodes discovered while visiting a
    /// root are not visited again from the following roots. Roots already
    /// discovered are skipped.
    ///
    /// # Arguments
    /// * `roots`: the nodes to start the visit from.
    ///
    /// * `callback`: the callback function.
    ///
    /// * `pl`: a progress logger that implements
    ///   [`dsi_progress_logger::ProgressLog`] may be passed to the method to
    ///   log the progress of the visit. If
    ///   `Option::<dsi_progress_logger::ProgressLogger>::None` is passed,
    ///   logging code should be optimized away by the compiler.
    ///
    /// # Panics
    ///
    /// If a root is not a node of the graph.
    fn visit<R: IntoIterator<Item = usize>, B, C: FnMut(usize) -> ControlFlow<B, ()>>(
        &mut self,
        roots: R,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>;

    /// Visits the whole graph, using every node as a root in index order.
    ///
    /// See [`visit`](Sequential::visit) for more details.
    fn visit_all<B, C: FnMut(usize) -> ControlFlow<B, ()>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> ControlFlow<B, ()>;

    /// Resets the visit status, making it possible to reuse it.
    ///
    /// Must be called before reusing a visit that has been interrupted.
    fn reset(&mut self);
}
