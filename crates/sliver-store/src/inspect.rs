//! Point-in-time dumps of a view's layout.

use std::fmt;

use sliver_core::ElementAddr;

use crate::view::SliceView;

/// Length, capacity and every visible element with its address.
#[derive(Clone, Debug, PartialEq)]
pub struct Inspection<T> {
    /// The view's length.
    pub len: usize,
    /// The view's capacity.
    pub capacity: usize,
    /// Visible elements in address order.
    pub elements: Vec<InspectedElement<T>>,
}

/// One row of an [`Inspection`].
#[derive(Clone, Debug, PartialEq)]
pub struct InspectedElement<T> {
    /// Index within the view.
    pub index: usize,
    /// Location within the backing store.
    pub addr: ElementAddr,
    /// The element's value at inspection time.
    pub value: T,
}

impl<T: Clone> SliceView<T> {
    /// Capture the view's layout under a single read of the store.
    pub fn inspect(&self) -> Inspection<T> {
        let data = self.store.read();
        let elements = data[self.offset..self.offset + self.len]
            .iter()
            .enumerate()
            .map(|(index, value)| InspectedElement {
                index,
                addr: self.store.addr(self.offset + index),
                value: value.clone(),
            })
            .collect();
        Inspection {
            len: self.len,
            capacity: self.capacity,
            elements,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Inspection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Length[{}] Capacity[{}]", self.len, self.capacity)?;
        for element in &self.elements {
            writeln!(f, "[{}] {} {}", element.index, element.addr, element.value)?;
        }
        Ok(())
    }
}
