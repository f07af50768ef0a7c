//! Implementation details of the `collide` function.

pub use self::collide::collide;
pub use self::collide_ssv_ssv::collide_ssv_ssv;

mod collide;
mod collide_ssv_ssv;
