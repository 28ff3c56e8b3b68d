//! Implementation of different callback functions.
use crate::core::results::ConvergenceEntry;
use crossbeam_channel::{Receiver, Sender};
use num_traits::Float;
use std::fmt::Display;

/// Trait for consumers of a running convergence analysis.
///
/// The analyzer calls [`Self::publish`] after every finished sample size with all entries
/// collected so far, in request order. The consumer decides the update cadence; the analyzer
/// stays synchronous and push-based.
pub trait Callback<T> {
    /// This method is called after each successfully finished entry and may publish information
    /// about the partial series.
    fn publish(&self, entries: &[ConvergenceEntry<T>]);
}

/// A callback function that does nothing
pub struct SinkCallback {}

impl<T> Callback<T> for SinkCallback {
    fn publish(&self, _: &[ConvergenceEntry<T>]) {}
}

/// A callback function that prints the result of each individual entry
pub struct SimpleCallback {}

impl<T> Callback<T> for SimpleCallback
where
    T: Display + Float,
{
    fn publish(&self, entries: &[ConvergenceEntry<T>]) {
        // Make sure that there is at least one entry, otherwise do nothing.
        if let Some(entry) = entries.last() {
            let result = entry.result();
            println!(
                "entry {} finished: N={} A={} (exact: {}, error: {}%)",
                entries.len() - 1,
                entry.calls(),
                result.estimate(),
                result.exact_area(),
                result.error_percentage()
            );
        }
    }
}

/// A callback that forwards every newly finished entry into a channel.
///
/// The receiving end can live on another thread and refresh a display progressively while the
/// analysis is still running, without sharing any state with the analyzer.
pub struct ChannelCallback<T> {
    sender: Sender<ConvergenceEntry<T>>,
}

impl<T: Clone> ChannelCallback<T> {
    /// Creates the callback together with the receiving end of its channel.
    pub fn new() -> (Self, Receiver<ConvergenceEntry<T>>) {
        let (sender, receiver) = crossbeam_channel::unbounded();
        (Self { sender }, receiver)
    }
}

impl<T: Clone> Callback<T> for ChannelCallback<T> {
    fn publish(&self, entries: &[ConvergenceEntry<T>]) {
        if let Some(entry) = entries.last() {
            // a disconnected receiver means the consumer is gone; the analysis finishes anyway
            let _ = self.sender.send(entry.clone());
        }
    }
}
