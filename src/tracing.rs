use crate::base::*;
use crate::classify::Category;

/// Observer of the classification cascade. Events arrive properly nested: every `Enter` is
/// followed by exactly one `Classified` and, after any nested events, one matching `Leave`.
pub trait Tracer {
    fn log(&mut self, ev: Event<'_>);
}

#[derive(Debug)]
pub enum Event<'a> {
    /// A number is about to be described.
    Enter(&'a Number),
    /// The number entered last was sorted into this category.
    Classified(Category),
    /// The description of the number entered last.
    Leave(&'a str)
}

/// A tracer that discards everything.
#[derive(Default)]
pub struct NoTracer;

impl Tracer for NoTracer {
    fn log(&mut self, _ev: Event<'_>) { }
}
