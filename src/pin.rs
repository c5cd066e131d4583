use crate::geodesy::{self, Point};
use crate::utils;
use anyhow::Result;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub struct Pin {
    pub id: i64,
    pub name: String,
    pub point: Point,
    pub created_at: DateTime<Local>,
}

impl Pin {
    pub fn created_time_label(&self) -> String {
        self.created_at.format("%H:%M:%S").to_string()
    }
}

/// Bearing and distance from the boat to a pin, rounded for display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct RangeBearing {
    pub bearing_deg: u16,
    pub distance_nm: f64,
}

impl fmt::Display for RangeBearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° {:.2} nm", self.bearing_deg, self.distance_nm)
    }
}

pub fn range_bearing(boat: &Point, pin: &Point) -> RangeBearing {
    RangeBearing {
        bearing_deg: utils::round_degrees(geodesy::bearing(boat, pin)),
        distance_nm: utils::round_to(geodesy::distance_nautical_miles(boat, pin), 2),
    }
}

/// User placed waypoints. Pins are never edited, only added and removed.
pub struct PinBoard {
    pins: Vec<Pin>,
    // survives delete and clear so an id is never handed out twice
    last_id: Option<i64>,
}

impl PinBoard {
    pub fn new() -> Self {
        PinBoard {
            pins: Vec::new(),
            last_id: None,
        }
    }

    pub fn add(&mut self, name: &str, point: Point, created_at: DateTime<Local>) -> Result<&Pin> {
        let name = name.trim();
        if name.is_empty() {
            bail!("pin name must not be empty");
        }
        if !point.is_valid() {
            bail!(
                "invalid pin position: lat={}, lon={}",
                point.latitude,
                point.longitude
            );
        }

        // ids come from the creation time, two pins in the same millisecond
        // still need distinct ids
        let mut id = created_at.timestamp_millis();
        if let Some(last_id) = self.last_id {
            id = id.max(last_id.saturating_add(1));
        }
        self.last_id = Some(id);

        info!("adding pin {id} `{name}` at {}, {}", point.latitude, point.longitude);
        self.pins.push(Pin {
            id,
            name: name.to_owned(),
            point,
            created_at,
        });
        Ok(&self.pins[self.pins.len() - 1])
    }

    pub fn delete(&mut self, id: i64) -> bool {
        let len_before = self.pins.len();
        self.pins.retain(|pin| pin.id != id);
        let deleted = self.pins.len() != len_before;
        if deleted {
            info!("deleted pin {id}");
        }
        deleted
    }

    pub fn clear(&mut self) {
        info!("clearing {} pins", self.pins.len());
        self.pins.clear();
    }

    pub fn get(&self, id: i64) -> Option<&Pin> {
        self.pins.iter().find(|pin| pin.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter()
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}
