use std::marker::PhantomData;

use crate::TransformError;

/// Converts an item into another representation before it is handed to the caller.
///
/// Closures of the form `Fn(I) -> Result<O, TransformError>` implement this trait, so most
/// callers never need to name a type.
pub trait Transform<I, O>: Send + Sync {
    /// Applies the transform to a single item.
    fn apply(&self, item: I) -> Result<O, TransformError>;

    /// Returns a transform that applies `self` and then `next` to its output.
    fn then<T, P>(self, next: T) -> Chain<Self, T, O>
    where
        Self: Sized,
        T: Transform<O, P>,
    {
        Chain::new(self, next)
    }
}

impl<F, I, O> Transform<I, O> for F
where
    F: Fn(I) -> Result<O, TransformError> + Send + Sync,
{
    fn apply(&self, item: I) -> Result<O, TransformError> {
        self(item)
    }
}

/// Transform returning its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl<I> Transform<I, I> for Identity {
    fn apply(&self, item: I) -> Result<I, TransformError> {
        Ok(item)
    }
}

/// Two transforms applied one after the other.
///
/// Built with [Transform::then].
pub struct Chain<A, B, M> {
    first: A,
    second: B,
    // `fn() -> M` keeps the chain `Send + Sync` whatever the intermediate type is.
    intermediate: PhantomData<fn() -> M>,
}

impl<A, B, M> Chain<A, B, M> {
    /// Creates a new chain.
    pub fn new(first: A, second: B) -> Self {
        Self {
            first,
            second,
            intermediate: PhantomData,
        }
    }
}

impl<A, B, I, M, O> Transform<I, O> for Chain<A, B, M>
where
    A: Transform<I, M>,
    B: Transform<M, O>,
{
    fn apply(&self, item: I) -> Result<O, TransformError> {
        let item = self.first.apply(item)?;
        self.second.apply(item)
    }
}
