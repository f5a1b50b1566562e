//! Course Plans
//!
//! The plans offered on the landing page, in the order their buttons appear.

/// Course plan tiers
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Plan {
    Basic,
    Premium,
    Lifetime,
    /// A button outside the known positions was clicked
    #[default]
    Undefined,
}

impl Plan {
    /// Map a landing-page button position to its plan
    pub const fn from_button_index(index: usize) -> Self {
        match index {
            0 => Self::Basic,
            1 => Self::Premium,
            2 => Self::Lifetime,
            _ => Self::Undefined,
        }
    }

    /// Name shown to the customer and carried through the hand-off
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Plan",
            Self::Premium => "Premium Plan",
            Self::Lifetime => "Lifetime Plan",
            Self::Undefined => "Undefined Plan",
        }
    }
}

impl std::fmt::Display for Plan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_index_mapping() {
        assert_eq!(Plan::from_button_index(0), Plan::Basic);
        assert_eq!(Plan::from_button_index(1), Plan::Premium);
        assert_eq!(Plan::from_button_index(2), Plan::Lifetime);
        assert_eq!(Plan::from_button_index(7), Plan::Undefined);
    }

    #[test]
    fn test_display() {
        assert_eq!(Plan::Basic.to_string(), "Basic Plan");
    }
}
