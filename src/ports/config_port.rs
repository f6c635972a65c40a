//! Configuration access port trait.

/// Key lookup into the run configuration. Portfel's config surface is plain
/// string keys (data paths, report output); typed accessors can grow here
/// if a numeric knob ever appears.
pub trait ConfigPort {
    fn get_string(&self, section: &str, key: &str) -> Option<String>;
}
