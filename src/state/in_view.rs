/// One-shot "has been seen" flag used to gate entry animations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InViewLatch {
    fired: bool,
}

impl InViewLatch {
    /// Returns true only on the call that flips the latch.
    pub fn record(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn is_set(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_unset() {
        assert!(!InViewLatch::default().is_set());
    }

    #[test]
    fn flips_once_and_never_reverts() {
        let mut latch = InViewLatch::default();
        assert!(!latch.record(false));
        assert!(!latch.is_set());

        assert!(latch.record(true));
        assert!(latch.is_set());

        assert!(!latch.record(false));
        assert!(!latch.record(true));
        assert!(latch.is_set());
    }
}
