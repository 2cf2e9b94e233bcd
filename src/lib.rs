//! Elementary cellular automaton animator.
//!
//! [`rule`] is the pure engine (neighborhood encoding and rule lookup),
//! [`board`] owns the scrolling window of generations, and [`draw`]
//! wraps both in a crossterm render loop.

pub mod board;
pub mod draw;
pub mod rule;
