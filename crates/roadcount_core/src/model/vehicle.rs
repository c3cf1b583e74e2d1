//! Vehicle class catalogue.
//!
//! # Responsibility
//! - Define the closed set of countable road vehicle classes.
//! - Provide stable export labels and display glyphs per class.
//!
//! # Invariants
//! - The class set and its survey order are fixed at build time.
//! - Labels are stable export/wire identifiers and never localized.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Closed set of vehicle classes counted by a survey session.
///
/// Declaration order is survey order: it drives button layout on the host,
/// snapshot row order and export row order alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleClass {
    Rickshaw,
    Bicycle,
    Motorcycle,
    Cng,
    Bus,
    Car,
    Microbus,
    Truck,
}

impl VehicleClass {
    /// Number of configured vehicle classes.
    pub const COUNT: usize = 8;

    /// Every class in fixed survey order.
    pub const ALL: [VehicleClass; VehicleClass::COUNT] = [
        VehicleClass::Rickshaw,
        VehicleClass::Bicycle,
        VehicleClass::Motorcycle,
        VehicleClass::Cng,
        VehicleClass::Bus,
        VehicleClass::Car,
        VehicleClass::Microbus,
        VehicleClass::Truck,
    ];

    /// Stable label used in exports and across the FFI boundary.
    pub fn label(self) -> &'static str {
        match self {
            Self::Rickshaw => "Rickshaw",
            Self::Bicycle => "Bicycle",
            Self::Motorcycle => "Motorcycle",
            Self::Cng => "CNG",
            Self::Bus => "Bus",
            Self::Car => "Car",
            Self::Microbus => "Microbus",
            Self::Truck => "Truck",
        }
    }

    /// Display glyph shown next to the label by the host UI.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Rickshaw => "\u{1f9bd}",
            Self::Bicycle => "\u{1f6b2}",
            Self::Motorcycle => "\u{1f3cd}",
            Self::Cng => "\u{1f6fa}",
            Self::Bus => "\u{1f68c}",
            Self::Car => "\u{1f697}",
            Self::Microbus => "\u{1f690}",
            Self::Truck => "\u{1f69a}",
        }
    }

    /// Position of this class in survey order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Parses a class from its stable label.
    ///
    /// Host taps arrive as label strings over FFI; anything outside the
    /// configured set is a strict precondition failure, not a new key.
    ///
    /// # Errors
    /// - `VehicleLabelError::EmptyLabel` when `value` is blank after trim.
    /// - `VehicleLabelError::UnknownLabel` for any other unconfigured label.
    pub fn from_label(value: &str) -> Result<Self, VehicleLabelError> {
        let normalized = value.trim();
        if normalized.is_empty() {
            return Err(VehicleLabelError::EmptyLabel);
        }
        Self::ALL
            .into_iter()
            .find(|class| class.label() == normalized)
            .ok_or_else(|| VehicleLabelError::UnknownLabel(normalized.to_string()))
    }
}

impl Display for VehicleClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Label lookup errors for class identifiers arriving from the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleLabelError {
    /// Label is blank after trim.
    EmptyLabel,
    /// Label does not name a configured class.
    UnknownLabel(String),
}

impl Display for VehicleLabelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyLabel => write!(f, "vehicle label must not be blank"),
            Self::UnknownLabel(value) => write!(f, "unknown vehicle class: `{value}`"),
        }
    }
}

impl Error for VehicleLabelError {}
