use super::{Category, Weakest};

impl<C: Category, const N: usize> Weakest for [C; N] {
    type Output = C;
}

#[cfg(test)]
mod tests {
    use crate::category::{Bidirectional, Category, Forward, Weakest};
    use crate::Capability;

    #[test]
    fn homogeneous_slots_keep_their_class() {
        assert_eq!(
            <<[Forward; 5] as Weakest>::Output as Category>::CAPABILITY,
            Capability::Forward
        );
        assert_eq!(
            <<[Bidirectional; 1] as Weakest>::Output as Category>::CAPABILITY,
            Capability::Bidirectional
        );
    }
}
