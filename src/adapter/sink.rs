//! Publishing the overtime result.
//!
//! This module defines the [`ResultSink`] trait for the host's summary area
//! and [`SummaryPanel`], an in-memory summary container.

use serde::{Deserialize, Serialize};

use crate::config::DisplayConfig;
use crate::models::Duration;

/// An element shown in the host's summary area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryElement {
    /// Identifier of the element.
    pub id: String,
    /// The headline value.
    pub value: String,
    /// Caption shown under the value.
    pub caption: String,
}

impl SummaryElement {
    /// Renders the element as its value followed by its caption.
    pub fn render(&self) -> String {
        format!("{}\n{}", self.value, self.caption)
    }
}

/// The host's summary area.
pub trait ResultSink {
    /// Removes every element with the given identifier.
    fn remove(&mut self, id: &str);

    /// Appends an element to the end of the summary area.
    fn append(&mut self, element: SummaryElement);
}

/// In-memory summary area.
///
/// # Example
///
/// ```
/// use overtime_tracker::adapter::{SummaryPanel, publish_overtime};
/// use overtime_tracker::config::DisplayConfig;
/// use overtime_tracker::models::Duration;
///
/// let mut panel = SummaryPanel::new();
/// let display = DisplayConfig::default();
///
/// publish_overtime(&mut panel, &display, &Duration::new(1, 0));
/// publish_overtime(&mut panel, &display, &Duration::new(2, 0));
///
/// assert_eq!(panel.elements().len(), 1);
/// assert_eq!(panel.render(), "+02:00\nOvertime");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SummaryPanel {
    elements: Vec<SummaryElement>,
}

impl SummaryPanel {
    /// Creates an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a panel that already shows the host's own elements.
    pub fn with_elements(elements: Vec<SummaryElement>) -> Self {
        Self { elements }
    }

    /// Returns the elements in display order.
    pub fn elements(&self) -> &[SummaryElement] {
        &self.elements
    }

    /// Finds the first element with the given identifier.
    pub fn find(&self, id: &str) -> Option<&SummaryElement> {
        self.elements.iter().find(|e| e.id == id)
    }

    /// Renders every element, separated by blank lines.
    pub fn render(&self) -> String {
        self.elements
            .iter()
            .map(SummaryElement::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl ResultSink for SummaryPanel {
    fn remove(&mut self, id: &str) {
        self.elements.retain(|e| e.id != id);
    }

    fn append(&mut self, element: SummaryElement) {
        self.elements.push(element);
    }
}

/// Publishes the overtime into the summary area.
///
/// Any element previously published under the reserved identifier is
/// removed first, so repeated calls replace rather than duplicate.
pub fn publish_overtime<S: ResultSink + ?Sized>(
    sink: &mut S,
    display: &DisplayConfig,
    overtime: &Duration,
) -> SummaryElement {
    sink.remove(&display.element_id);

    let element = SummaryElement {
        id: display.element_id.clone(),
        value: overtime.to_string(),
        caption: display.caption.clone(),
    };
    sink.append(element.clone());

    element
}
