#![allow(unused_imports)]

#[allow(dead_code, unstable_name_collisions)]
mod definitions {
    pub trait ExactSizeIsEmpty: ExactSizeIterator {
        fn is_empty(&self) -> bool {
            self.len() == 0
        }
    }

    #[cfg(not(feature = "exact_size_is_empty"))]
    impl<I: ExactSizeIterator> ExactSizeIsEmpty for I {}
}

#[cfg(test)]
pub(crate) use definitions::ExactSizeIsEmpty as _;
