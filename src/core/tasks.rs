use std::cell::RefCell;
use std::rc::Rc;

/// Named background task handles shared by every clone of the registry.
///
/// Handles are freed when the last clone goes away, and a timer handle
/// usually stops its timer on drop. Loops that must run for the whole page
/// therefore live in a registry pinned with [`Registry::keep_for_page`].
pub struct Registry<T> {
    tasks: Rc<RefCell<Vec<(&'static str, T)>>>,
}

impl<T> Clone for Registry<T> {
    fn clone(&self) -> Self {
        Self {
            tasks: self.tasks.clone(),
        }
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            tasks: Rc::new(RefCell::new(Vec::new())),
        }
    }
}

impl<T> Registry<T> {
    /// A registry whose handles are never dropped.
    pub fn for_page() -> Self {
        let registry = Self::default();
        registry.clone().keep_for_page();
        registry
    }

    /// Leak this clone so the shared handles outlive every other owner.
    pub fn keep_for_page(self) {
        std::mem::forget(self);
    }

    /// Take ownership of a started task; `None` means it never started.
    pub fn adopt(&self, name: &'static str, task: Option<impl Into<T>>) -> bool {
        match task {
            Some(task) => {
                log::debug!("[tasks] started {}", name);
                self.tasks.borrow_mut().push((name, task.into()));
                true
            }
            None => {
                log::debug!("[tasks] {} not started", name);
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tasks.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.borrow().is_empty()
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tasks.borrow().iter().map(|(name, _)| *name).collect()
    }
}
