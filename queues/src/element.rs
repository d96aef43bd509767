use serde::{Deserialize, Serialize};

/// A value paired with its priority. Lower priorities are served first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Element<V, P> {
    pub value: V,
    pub priority: P,
}

impl<V, P> Element<V, P> {
    pub fn new(value: V, priority: P) -> Self {
        Self { value, priority }
    }

    pub fn into_parts(self) -> (V, P) {
        (self.value, self.priority)
    }
}
