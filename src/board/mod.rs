//! Board structure: theater stacks and theater display order.

pub mod order;
pub mod stack;

pub use order::{theater_order, theater_order_from_bits};
pub use stack::TheaterStack;
