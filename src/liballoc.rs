#![allow(
    clippy::clone_on_copy,
    clippy::drop_non_drop,
    clippy::type_complexity,
    unstable_name_collisions
)]
#![cfg_attr(
    test,
    allow(
        clippy::bool_assert_comparison,
        clippy::explicit_counter_loop,
        clippy::needless_range_loop,
        clippy::redundant_clone,
        clippy::uninlined_format_args,
        clippy::useless_vec,
    )
)]

pub mod collections {
    pub mod binary_heap;
}

#[cfg(test)]
mod testing;
