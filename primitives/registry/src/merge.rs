//! Merging one registry into another

use ir::MethodRecord;
use tracing::debug;

use crate::{MethodHandle, MethodRegistry, RegistryResult};

impl<M: MethodRecord> MethodRegistry<M> {
    /// Merge the methods of `source` into this registry.
    ///
    /// Methods are visited in `source` registration order. A selector this
    /// registry already knows is merged into the existing record through
    /// [`MethodRecord::merge_from`] and keeps its position and section. An
    /// unknown selector is registered as a copy of the source record, in the
    /// first section named like the source section holding it, or in the
    /// current section when there is no such section. `source` is not
    /// modified and the current section does not change.
    ///
    /// Fails with [`crate::RegistryError::RecordInUse`] before changing
    /// anything if a record involved in the merge is borrowed by the caller.
    pub fn merge_from(&mut self, source: &Self) -> RegistryResult<()> {
        debug!(
            parent = %self.parent,
            source = %source.parent,
            methods = source.methods.len(),
            "merging method registry"
        );

        for method in &source.methods {
            let record = method.try_borrow().map_err(|_| self.record_in_use())?;
            if let Some(target) = self.merge_target(record.selector(), method) {
                target.try_borrow_mut().map_err(|_| self.record_in_use())?;
            }
        }

        for (method, &placement) in source.methods.iter().zip(&source.placements) {
            let record = method.try_borrow().map_err(|_| self.record_in_use())?;
            if let Some(target) = self.merge_target(record.selector(), method) {
                target.try_borrow_mut().map_err(|_| self.record_in_use())?.merge_from(&record);
                continue;
            }
            if self.methods_by_selector.contains_key(record.selector()) {
                // Same instance registered in both; nothing to merge.
                continue;
            }

            let section = match source.sections[placement].name() {
                Some(name) => self.find_section(name),
                None => None,
            };
            let section = match section {
                Some(index) => index,
                None => self.current_section_index(),
            };
            let copy = MethodHandle::new(record.clone());
            self.assign_parent(&copy)?;
            self.attach(section, record.selector().to_string(), copy);
        }
        Ok(())
    }

    /// Receiver record to merge `method` into, unless it is the same instance.
    fn merge_target(&self, selector: &str, method: &MethodHandle<M>) -> Option<&MethodHandle<M>> {
        self.method_by_selector(selector).filter(|target| !target.ptr_eq(method))
    }
}
