//! Auxiliary two-state equipment
//!
//! Grippers, status LEDs and similar outputs that the coordinator switches
//! but never positions.

/// Two-state auxiliary output
pub trait Effector {
    /// Switch the effector on (gripper closed, LED lit) or off
    fn set_active(&mut self, active: bool);

    /// Last commanded state
    fn is_active(&self) -> bool;
}

impl<T: Effector + ?Sized> Effector for &mut T {
    fn set_active(&mut self, active: bool) {
        (**self).set_active(active);
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

/// Effector that only remembers its state
///
/// Useful for boards without a gripper fitted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NullEffector {
    active: bool,
}

impl Effector for NullEffector {
    fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    fn is_active(&self) -> bool {
        self.active
    }
}
