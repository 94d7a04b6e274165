use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestimonialsMsg {
    Next,
    Previous,
    /// Jump straight to a slide, like clicking its indicator dot
    Select(usize),
}
