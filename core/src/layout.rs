use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Position in UI coordinates, whatever unit the front-end lays slots out in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn distance_sq(self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            width,
            height,
        }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x <= self.origin.x + self.width
            && point.y >= self.origin.y
            && point.y <= self.origin.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.width / 2.,
            self.origin.y + self.height / 2.,
        )
    }
}

/// Screen areas of the blank slots, used to resolve where a dragged tile was released.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DropZones {
    zones: Vec<(SlotId, Rect)>,
    snap_radius: f32,
}

impl DropZones {
    /// Drops outside every zone still land on a slot whose center is within `snap_radius`.
    pub fn new(snap_radius: f32) -> Self {
        Self {
            zones: Vec::new(),
            snap_radius: snap_radius.max(0.),
        }
    }

    /// Sets the area of `slot`, replacing any previous one.
    pub fn set(&mut self, slot: SlotId, rect: Rect) {
        match self.zones.iter_mut().find(|(id, _)| *id == slot) {
            Some((_, zone)) => *zone = rect,
            None => self.zones.push((slot, rect)),
        }
    }

    pub fn get(&self, slot: SlotId) -> Option<Rect> {
        self.zones
            .iter()
            .find(|(id, _)| *id == slot)
            .map(|&(_, rect)| rect)
    }

    pub fn clear(&mut self) {
        self.zones.clear();
    }

    /// Slot under `point`; when zones overlap or none contains it, the nearest center wins.
    pub fn hit_test(&self, point: Point) -> Option<SlotId> {
        let containing = self.zones.iter().filter(|(_, rect)| rect.contains(point));
        if let Some((slot, _)) = nearest(containing, point) {
            return Some(slot);
        }

        let radius_sq = self.snap_radius * self.snap_radius;
        nearest(self.zones.iter(), point)
            .filter(|&(_, dist_sq)| dist_sq <= radius_sq)
            .map(|(slot, _)| slot)
    }
}

fn nearest<'a>(
    zones: impl Iterator<Item = &'a (SlotId, Rect)>,
    point: Point,
) -> Option<(SlotId, f32)> {
    zones
        .map(|&(slot, rect)| (slot, rect.center().distance_sq(point)))
        .min_by(|a, b| a.1.total_cmp(&b.1))
}

impl Round {
    /// Resolves a released drag against `zones`. A drop that misses every slot leaves the tile where it was.
    pub fn drop_tile_at(&mut self, tile: TileId, point: Point, zones: &DropZones) -> Result<MoveOutcome> {
        match zones.hit_test(point) {
            Some(slot) => self.place_tile(tile, slot),
            None => {
                log::trace!("Drop of {} at {:?} missed every slot", tile, point);
                Ok(MoveOutcome::NoChange)
            }
        }
    }
}
