use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::hint::black_box;

/// Per-element payload used by every benchmark operation.
///
/// Implementors must be trivially copyable and default-constructible so that
/// populating a container costs nothing beyond the container's own work.
/// `touch` consumes one element during traversal benchmarks in a way the
/// optimizer cannot elide without materially changing the measured cost.
pub trait Payload: Copy + Default + 'static {
    /// Consume a single element read.
    fn touch(&self);

    /// Fixed payload size in bytes.
    fn byte_size() -> usize {
        std::mem::size_of::<Self>()
    }
}

/// Cheap-to-copy payload: a single machine word.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SmallElement(pub u64);

impl Payload for SmallElement {
    fn touch(&self) {
        // Self-XOR keeps the load observable without adding arithmetic that
        // would dominate the traversal being measured.
        black_box(self.0 ^ self.0);
    }
}

/// Expensive-to-copy payload: a fixed 4 KiB aggregate (512 words).
#[derive(Clone, Copy)]
pub struct LargeElement {
    words: [u64; 512],
}

// Arrays of this length have no derived Default.
impl Default for LargeElement {
    fn default() -> Self {
        Self { words: [0; 512] }
    }
}

impl Payload for LargeElement {
    fn touch(&self) {
        black_box(&self.words);
    }
}

/// Element profiles a benchmark instance can be bound to.
///
/// A given instance holds exactly one profile; profiles are never mixed
/// within a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ElementProfile {
    /// Single machine word
    #[clap(name = "small")]
    Small,

    /// 4 KiB aggregate
    #[clap(name = "large")]
    Large,

    /// Both profiles
    #[clap(name = "all")]
    All,
}

impl std::fmt::Display for ElementProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ElementProfile {
    /// Short identifier used in benchmark names.
    pub fn name(&self) -> &'static str {
        match self {
            ElementProfile::Small => "small",
            ElementProfile::Large => "large",
            ElementProfile::All => "all",
        }
    }

    /// Fixed element size for byte-rate derivation.
    pub fn byte_size(&self) -> usize {
        match self {
            ElementProfile::Small => SmallElement::byte_size(),
            ElementProfile::Large => LargeElement::byte_size(),
            ElementProfile::All => 0,
        }
    }

    /// Expand the "All" variant to the concrete profiles.
    pub fn expand_all(profiles: Vec<ElementProfile>) -> Vec<ElementProfile> {
        if profiles.contains(&ElementProfile::All) {
            vec![ElementProfile::Small, ElementProfile::Large]
        } else {
            profiles
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_byte_sizes() {
        assert_eq!(ElementProfile::Small.byte_size(), 8);
        assert_eq!(ElementProfile::Large.byte_size(), 4096);
    }

    #[test]
    fn test_large_element_is_page_sized() {
        assert_eq!(std::mem::size_of::<LargeElement>(), 4096);
    }

    #[test]
    fn test_expand_all() {
        assert_eq!(
            ElementProfile::expand_all(vec![ElementProfile::All]),
            vec![ElementProfile::Small, ElementProfile::Large]
        );
        assert_eq!(
            ElementProfile::expand_all(vec![ElementProfile::Large]),
            vec![ElementProfile::Large]
        );
    }

    #[test]
    fn test_touch_does_not_mutate() {
        let element = SmallElement(42);
        element.touch();
        assert_eq!(element, SmallElement(42));
    }
}
