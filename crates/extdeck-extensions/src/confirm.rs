//! Removal confirmation capability

/// A blocking yes/no question put to the user before a destructive command
pub trait Confirmer {
    /// Ask the question; `true` means the user accepted
    fn confirm(&self, prompt: &str) -> bool;
}

/// Answers every prompt the same way without asking anyone
///
/// Used for `--yes` and non-interactive runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoConfirm(pub bool);

impl AutoConfirm {
    pub fn accept() -> Self {
        Self(true)
    }

    pub fn decline() -> Self {
        Self(false)
    }
}

impl Confirmer for AutoConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        self.0
    }
}

impl<F> Confirmer for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_auto_confirm() {
        assert!(AutoConfirm::accept().confirm("remove?"));
        assert!(!AutoConfirm::decline().confirm("remove?"));
    }

    #[test]
    fn test_closure_confirmer_sees_prompt() {
        let seen = RefCell::new(Vec::new());
        let confirmer = |prompt: &str| {
            seen.borrow_mut().push(prompt.to_string());
            prompt.contains("DevLens")
        };

        assert!(confirmer.confirm("Remove 'DevLens'?"));
        assert!(!confirmer.confirm("Remove 'StyleSpy'?"));
        assert_eq!(seen.borrow().len(), 2);
    }
}
