/// Key state of a replay frame.
///
/// Keyboard keys also set the matching mouse bit (K1 implies M1), so
/// presence of any click bit is enough to tell a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Keys(u32);

impl Keys {
    pub const NONE: Keys = Keys(0);
    pub const M1: Keys = Keys(1);
    pub const M2: Keys = Keys(2);
    pub const K1: Keys = Keys(4);
    pub const K2: Keys = Keys(8);
    pub const SMOKE: Keys = Keys(16);

    const CLICK_MASK: u32 = 0b1111;

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn contains(self, other: Keys) -> bool {
        self.0 & other.0 == other.0
    }

    /// Any click key (M1, M2, K1, K2) is held. Smoke does not count.
    pub const fn is_pressed(self) -> bool {
        self.0 & Self::CLICK_MASK != 0
    }

    /// A click key is held now that was not held in `previous`.
    pub const fn newly_pressed(self, previous: Keys) -> bool {
        self.0 & !previous.0 & Self::CLICK_MASK != 0
    }
}

impl std::ops::BitOr for Keys {
    type Output = Keys;

    fn bitor(self, rhs: Keys) -> Keys {
        Keys(self.0 | rhs.0)
    }
}

impl std::fmt::Display for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = [
            (Keys::M1, "M1"),
            (Keys::M2, "M2"),
            (Keys::K1, "K1"),
            (Keys::K2, "K2"),
            (Keys::SMOKE, "S"),
        ];
        let held: Vec<&str> = names
            .iter()
            .filter(|(key, _)| self.contains(*key))
            .map(|(_, name)| *name)
            .collect();
        if held.is_empty() {
            write!(f, "-")
        } else {
            write!(f, "{}", held.join("+"))
        }
    }
}
