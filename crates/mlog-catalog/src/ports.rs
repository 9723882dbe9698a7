//! Port registry and geographic helpers.

use std::collections::BTreeMap;

use mlog_core::errors::{ErrorInfo, MlogError};
use serde::{Deserialize, Serialize};

use crate::table::{AttributeValue, Attributed, Schema};

/// Terminal load bearing capacity column, in ton per m2.
pub const LOAD_BEARING: &str = "LoadBearing_ton_per_m2";
/// Terminal area column, in m2.
pub const TERMINAL_AREA: &str = "TerminalArea_m2";

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Geographic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude, positive north.
    pub latitude: f64,
    /// Longitude, positive east.
    pub longitude: f64,
}

impl Coordinates {
    /// Great-circle (haversine) distance in kilometres.
    pub fn distance_km(&self, other: &Coordinates) -> f64 {
        let (lat1, lat2) = (self.latitude.to_radians(), other.latitude.to_radians());
        let d_lat = lat2 - lat1;
        let d_lon = (other.longitude - self.longitude).to_radians();
        let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
    }
}

/// One port of the port registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortRecord {
    /// Port name.
    pub name: String,
    /// Position of the port terminal, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    /// Measured terminal attributes.
    pub attributes: BTreeMap<String, AttributeValue>,
}

impl PortRecord {
    /// Creates a port with numeric attributes.
    pub fn new<K: Into<String>>(
        name: impl Into<String>,
        attributes: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        Self {
            name: name.into(),
            coordinates: None,
            attributes: attributes
                .into_iter()
                .map(|(key, value)| (key.into(), AttributeValue::Number(value)))
                .collect(),
        }
    }

    /// Attaches a terminal position.
    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.coordinates = Some(Coordinates {
            latitude,
            longitude,
        });
        self
    }
}

impl Attributed for PortRecord {
    fn attribute(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }
}

/// Immutable port registry with a fixed attribute schema.
#[derive(Debug, Clone, PartialEq)]
pub struct PortCatalog {
    schema: Schema,
    ports: Vec<PortRecord>,
}

impl PortCatalog {
    /// Creates a registry, validating every port against the schema.
    pub fn new(schema: Schema, ports: Vec<PortRecord>) -> Result<Self, MlogError> {
        for port in &ports {
            if port.name.trim().is_empty() {
                return Err(MlogError::Config(ErrorInfo::new(
                    "empty-port-name",
                    "port name cannot be empty",
                )));
            }
            schema.validate_values(&port.name, &port.attributes)?;
        }
        Ok(Self { schema, ports })
    }

    /// Returns the attribute schema shared by all ports.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the ports in registry order.
    pub fn ports(&self) -> &[PortRecord] {
        &self.ports
    }

    /// Looks up a port by name.
    pub fn port(&self, name: &str) -> Option<&PortRecord> {
        self.ports.iter().find(|port| port.name == name)
    }

    /// Returns the number of ports.
    pub fn len(&self) -> usize {
        self.ports.len()
    }

    /// Returns true when the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.ports.is_empty()
    }
}
