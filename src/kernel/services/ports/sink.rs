use std::io;

/// Persisted-state field the editor publishes valid formulas to.
///
/// The editor reads it once, at construction, to seed the tree.
pub trait OutputSink {
    fn read(&self) -> Option<String>;

    /// Stores `value` and signals a change.
    fn write(&mut self, value: &str) -> io::Result<()>;
}

impl<S: OutputSink + ?Sized> OutputSink for Box<S> {
    fn read(&self) -> Option<String> {
        (**self).read()
    }

    fn write(&mut self, value: &str) -> io::Result<()> {
        (**self).write(value)
    }
}
