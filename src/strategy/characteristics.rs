use std::{
    fmt::{self, Debug},
    ops::{BitOr, BitOrAssign},
};

/// A set of flags declaring how a [`Strategy`](super::Strategy) may be evaluated.
///
/// # Examples
///
/// ```
/// use fold_merge::strategy::Characteristics;
///
/// let flags = Characteristics::UNORDERED | Characteristics::IDENTITY_FINISH;
///
/// assert!(flags.contains(Characteristics::UNORDERED));
/// assert!(!flags.contains(Characteristics::CONCURRENT));
/// assert!(flags.is_merge_safe());
/// assert!(!Characteristics::empty().is_merge_safe());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Characteristics(u8);

impl Characteristics {
    /// Every state is privately owned by one worker and only handed over at merge time,
    /// so the strategy tolerates being folded from several threads at once.
    pub const CONCURRENT: Self = Self(1);

    /// The output does not depend on the order items are folded in, nor on how the
    /// input is partitioned. Required for fork-join evaluation.
    pub const UNORDERED: Self = Self(1 << 1);

    /// [`finish`](super::Strategy::finish) returns the state unchanged.
    pub const IDENTITY_FINISH: Self = Self(1 << 2);

    const NAMED: [(Self, &'static str); 3] = [
        (Self::CONCURRENT, "CONCURRENT"),
        (Self::UNORDERED, "UNORDERED"),
        (Self::IDENTITY_FINISH, "IDENTITY_FINISH"),
    ];

    /// No flags: strictly sequential, ordered evaluation only.
    #[inline]
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns `true` if every flag of `other` is also set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns `true` if partial states may be folded independently and
    /// combined in any order.
    #[inline]
    pub const fn is_merge_safe(self) -> bool {
        self.contains(Self::UNORDERED)
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl BitOrAssign for Characteristics {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut set = f.debug_set();
        for (flag, name) in Self::NAMED {
            if self.contains(flag) {
                set.entry(&format_args!("{name}"));
            }
        }
        set.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::Characteristics;

    #[test]
    fn debug_lists_set_flags() {
        let flags = Characteristics::CONCURRENT | Characteristics::IDENTITY_FINISH;
        assert_eq!(format!("{flags:?}"), "{CONCURRENT, IDENTITY_FINISH}");
        assert_eq!(format!("{:?}", Characteristics::empty()), "{}");
    }

    #[test]
    fn bitor_assign_accumulates() {
        let mut flags = Characteristics::empty();
        assert!(flags.is_empty());

        flags |= Characteristics::UNORDERED;
        flags |= Characteristics::UNORDERED;

        assert_eq!(flags, Characteristics::UNORDERED);
        assert!(flags.contains(Characteristics::empty()));
    }
}
