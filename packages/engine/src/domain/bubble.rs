use std::fmt;

/// State of a single bubble. A bubble's identity is its grid index.
///
/// `repr(u8)` lets the host view the whole grid as a `Uint8Array`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BubbleState {
    #[default]
    Intact = 0,
    Popped = 1,
}

impl BubbleState {
    pub fn is_popped(self) -> bool {
        self == BubbleState::Popped
    }
}

/// Score readout shown next to the bubble grid
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Readout {
    pub popped: usize,
    pub total: usize,
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.popped, self.total)
    }
}
