use std::fmt;

/// Which toy is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Bubble,
    Particles,
}

impl Mode {
    pub fn label(self) -> &'static str {
        match self {
            Mode::Bubble => "bubble",
            Mode::Particles => "particles",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
