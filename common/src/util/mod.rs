pub mod consts;
pub mod keys;
pub mod random;
pub mod serialize;
pub mod state;
