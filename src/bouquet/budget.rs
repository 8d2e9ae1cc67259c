/// Run-scoped allowance of leaf pairs.
///
/// Flowers claim from it once their stem passes the leaf threshold; claims stop when it hits zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LeafBudget {
    quota: u32,
    remaining: u32,
}

impl LeafBudget {
    pub fn new(quota: u32) -> Self {
        Self {
            quota,
            remaining: quota,
        }
    }

    /// Take one leaf pair if any are left.
    pub fn try_claim(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        true
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn claimed(&self) -> u32 {
        self.quota - self.remaining
    }

    pub fn quota(&self) -> u32 {
        self.quota
    }

    pub fn reset(&mut self) {
        self.remaining = self.quota;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bouquet/budget.rs"]
mod tests;
