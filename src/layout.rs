//! Room placement for header content.
//!
//! A header lays its children out in three rooms. Each child declares the
//! room it belongs to by name; children that don't, or that name a room the
//! header doesn't have, are left out of the layout with a warning rather
//! than breaking the whole header.

use serde::{Deserialize, Serialize};

named_enum! {
    /// A named placement zone in the header.
    Room as "room" {
        Left => "header-left",
        Center => "header-center",
        Right => "header-right",
    }
}

/// A child element with the room tag it declared, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomChild {
    pub id: String,
    pub room: Option<String>,
}

impl RoomChild {
    pub fn new(id: &str, room: &str) -> Self {
        Self {
            id: id.to_string(),
            room: Some(room.to_string()),
        }
    }

    /// A child that declared no room.
    pub fn untagged(id: &str) -> Self {
        Self {
            id: id.to_string(),
            room: None,
        }
    }
}

/// What ends up in one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "children")]
pub enum RoomContent {
    /// Child ids in declaration order.
    Filled(Vec<String>),
    /// Nothing was placed here; the renderer draws a spacer.
    Filler,
}

impl RoomContent {
    pub fn children(&self) -> &[String] {
        match self {
            RoomContent::Filled(ids) => ids,
            RoomContent::Filler => &[],
        }
    }

    pub fn is_filler(&self) -> bool {
        matches!(self, RoomContent::Filler)
    }
}

/// The three rooms of a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rooms {
    pub left: RoomContent,
    pub center: RoomContent,
    pub right: RoomContent,
}

impl Rooms {
    pub fn get(&self, room: Room) -> &RoomContent {
        match room {
            Room::Left => &self.left,
            Room::Center => &self.center,
            Room::Right => &self.right,
        }
    }
}

/// Groups children by the room they declare.
pub fn place_in_rooms<'a, I>(children: I) -> Rooms
where
    I: IntoIterator<Item = &'a RoomChild>,
{
    let mut left = Vec::new();
    let mut center = Vec::new();
    let mut right = Vec::new();

    for child in children {
        let Some(tag) = child.room.as_deref() else {
            tracing::warn!(child = %child.id, "child has no room tag; leaving it out of the layout");
            continue;
        };
        match tag.parse::<Room>() {
            Ok(Room::Left) => left.push(child.id.clone()),
            Ok(Room::Center) => center.push(child.id.clone()),
            Ok(Room::Right) => right.push(child.id.clone()),
            Err(_) => {
                tracing::warn!(child = %child.id, room = tag, "unknown room; leaving child out of the layout");
            }
        }
    }

    let fill = |ids: Vec<String>| {
        if ids.is_empty() {
            RoomContent::Filler
        } else {
            RoomContent::Filled(ids)
        }
    };

    Rooms {
        left: fill(left),
        center: fill(center),
        right: fill(right),
    }
}
