use core::fmt;
use core::str::FromStr;

/// The tier of operations a cursor supports.
///
/// Tiers are totally ordered by how rich their operation set is, so the
/// capability of a composite cursor is the minimum over its constituents.
/// See [`category`](crate::category) for the same lattice expressed as types.
///
/// # Examples
///
/// ```
/// use iterzip::Capability;
///
/// let composite = Capability::Forward.meet(Capability::RandomAccess);
/// assert_eq!(composite, Capability::Forward);
/// assert!(Capability::RandomAccess > Capability::Bidirectional);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Capability {
    /// Single-pass: dereference, equality and advance.
    #[default]
    InputOutput = 1,
    /// Multi-pass and default-constructible.
    Forward = 2,
    /// Can also step backwards.
    Bidirectional = 3,
    /// Can also jump by an offset, be indexed and be ordered.
    RandomAccess = 4,
}

impl Capability {
    /// All capabilities, weakest first.
    pub const ALL: [Capability; 4] = [
        Capability::InputOutput,
        Capability::Forward,
        Capability::Bidirectional,
        Capability::RandomAccess,
    ];

    /// The numeric ordinal of this capability.
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Map an ordinal back to a capability.
    ///
    /// Ordinals that name no tier fall back to [`Capability::InputOutput`],
    /// the weakest tier.
    pub const fn from_rank(rank: u8) -> Self {
        match rank {
            2 => Capability::Forward,
            3 => Capability::Bidirectional,
            4 => Capability::RandomAccess,
            _ => Capability::InputOutput,
        }
    }

    /// The weaker of two capabilities.
    pub const fn meet(self, other: Self) -> Self {
        if self.rank() <= other.rank() {
            self
        } else {
            other
        }
    }

    /// Fold [`meet`](Self::meet) over a list of capabilities, left to right.
    ///
    /// Returns `None` for an empty list: there is no composite of nothing.
    pub const fn weakest(capabilities: &[Capability]) -> Option<Self> {
        if capabilities.is_empty() {
            return None;
        }
        let mut acc = capabilities[0];
        let mut i = 1;
        while i < capabilities.len() {
            acc = acc.meet(capabilities[i]);
            i += 1;
        }
        Some(acc)
    }

    /// Whether a cursor of this capability offers every operation of `required`.
    pub const fn supports(self, required: Self) -> bool {
        self.rank() >= required.rank()
    }

    const fn name(self) -> &'static str {
        match self {
            Capability::InputOutput => "input-output",
            Capability::Forward => "forward",
            Capability::Bidirectional => "bidirectional",
            Capability::RandomAccess => "random-access",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Capability {
    type Err = ParseCapabilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Capability::ALL
            .into_iter()
            .find(|capability| capability.name() == s)
            .ok_or(ParseCapabilityError { _priv: () })
    }
}

impl From<u8> for Capability {
    fn from(rank: u8) -> Self {
        Capability::from_rank(rank)
    }
}

impl From<Capability> for u8 {
    fn from(capability: Capability) -> Self {
        capability.rank()
    }
}

/// The error returned when parsing a [`Capability`] from a string fails.
#[derive(Clone, PartialEq, Eq)]
pub struct ParseCapabilityError {
    _priv: (),
}

impl fmt::Debug for ParseCapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseCapabilityError").finish()
    }
}

impl fmt::Display for ParseCapabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            "expected one of `input-output`, `forward`, `bidirectional`, `random-access`",
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseCapabilityError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_round_trip() {
        for capability in Capability::ALL {
            assert_eq!(Capability::from_rank(capability.rank()), capability);
        }
    }

    #[test]
    fn unknown_rank_is_weakest() {
        assert_eq!(Capability::from_rank(0), Capability::InputOutput);
        assert_eq!(Capability::from_rank(9), Capability::InputOutput);
        assert_eq!(Capability::default(), Capability::InputOutput);
    }

    #[test]
    fn meet_is_the_minimum() {
        for a in Capability::ALL {
            for b in Capability::ALL {
                assert_eq!(a.meet(b), a.min(b));
                assert_eq!(a.meet(b), b.meet(a));
            }
            assert_eq!(a.meet(a), a);
        }
    }

    #[test]
    fn weakest_folds_in_any_order() {
        use Capability::*;

        assert_eq!(Capability::weakest(&[]), None);
        assert_eq!(Capability::weakest(&[Bidirectional]), Some(Bidirectional));
        assert_eq!(
            Capability::weakest(&[RandomAccess, Forward, Bidirectional]),
            Some(Forward)
        );
        assert_eq!(
            Capability::weakest(&[Bidirectional, RandomAccess, Forward]),
            Some(Forward)
        );
    }

    #[test]
    fn weakest_is_const() {
        const CAP: Option<Capability> =
            Capability::weakest(&[Capability::RandomAccess, Capability::Bidirectional]);
        assert_eq!(CAP, Some(Capability::Bidirectional));
    }

    #[test]
    fn supports() {
        assert!(Capability::RandomAccess.supports(Capability::Forward));
        assert!(Capability::Forward.supports(Capability::Forward));
        assert!(!Capability::Forward.supports(Capability::Bidirectional));
    }

    #[cfg(feature = "std")]
    #[test]
    fn parse_and_display() {
        for capability in Capability::ALL {
            let name = capability.to_string();
            assert_eq!(name.parse::<Capability>(), Ok(capability));
        }
        let err = "sideways".parse::<Capability>().unwrap_err();
        assert!(err.to_string().contains("random-access"));
    }
}
