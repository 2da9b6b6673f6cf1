//! Z-order maintenance for positioned canvas items.
//!
//! Ordering is per kind, never global: areas always paint beneath
//! relationship edges, edges beneath tables, tables beneath notes. Within a
//! kind, array order mirrors `z_index` order; move operations swap both
//! together so neither drifts.

use super::model::{Area, Note, Table};
use super::store::{ModelStore, StoreError};

/// Which positioned collection a layer operation targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
pub enum LayerKind {
    #[display("table")]
    Table,
    #[display("area")]
    Area,
    #[display("note")]
    Note,
}

impl LayerKind {
    /// Fixed cross-kind paint rank: areas (0) under tables (1) under
    /// notes (2). Relationship edges paint between areas and tables and are
    /// not layerable.
    pub fn paint_rank(self) -> u8 {
        match self {
            LayerKind::Area => 0,
            LayerKind::Table => 1,
            LayerKind::Note => 2,
        }
    }
}

/// Canvas items that participate in per-kind z-ordering.
trait Layered {
    fn layer_id(&self) -> &str;
    fn z_index(&self) -> Option<i32>;
    fn set_z_index(&mut self, z: Option<i32>);
}

impl Layered for Table {
    fn layer_id(&self) -> &str {
        &self.id
    }
    fn z_index(&self) -> Option<i32> {
        self.z_index
    }
    fn set_z_index(&mut self, z: Option<i32>) {
        self.z_index = z;
    }
}

impl Layered for Area {
    fn layer_id(&self) -> &str {
        &self.id
    }
    fn z_index(&self) -> Option<i32> {
        self.z_index
    }
    fn set_z_index(&mut self, z: Option<i32>) {
        self.z_index = z;
    }
}

impl Layered for Note {
    fn layer_id(&self) -> &str {
        &self.id
    }
    fn z_index(&self) -> Option<i32> {
        self.z_index
    }
    fn set_z_index(&mut self, z: Option<i32>) {
        self.z_index = z;
    }
}

/// Swap `items[index]` with the neighbor above or below, exchanging both
/// array slots and z_index values. Returns false at the extremes.
fn swap_with_neighbor<T: Layered>(items: &mut [T], index: usize, up: bool) -> bool {
    let neighbor = if up {
        if index + 1 >= items.len() {
            return false;
        }
        index + 1
    } else {
        if index == 0 {
            return false;
        }
        index - 1
    };

    // An absent z_index behaves as 0 and travels with the swap as-is, so a
    // move never invents zIndex keys in the exported document and moving up
    // then down restores the exact original values.
    let z_a = items[index].z_index();
    let z_b = items[neighbor].z_index();
    items[index].set_z_index(z_b);
    items[neighbor].set_z_index(z_a);
    items.swap(index, neighbor);
    true
}

fn position_of<T: Layered>(items: &[T], id: &str) -> Option<usize> {
    items.iter().position(|item| item.layer_id() == id)
}

impl ModelStore {
    /// Move an item one step toward the top of its kind's stack.
    ///
    /// Returns `Ok(true)` when the item moved, `Ok(false)` when it was
    /// already on top (no commit), and an error when the id is unknown.
    pub fn move_layer_up(&mut self, id: &str, kind: LayerKind) -> Result<bool, StoreError> {
        self.move_layer(id, kind, true)
    }

    /// Move an item one step toward the bottom of its kind's stack.
    pub fn move_layer_down(&mut self, id: &str, kind: LayerKind) -> Result<bool, StoreError> {
        self.move_layer(id, kind, false)
    }

    fn move_layer(&mut self, id: &str, kind: LayerKind, up: bool) -> Result<bool, StoreError> {
        let moved = match kind {
            LayerKind::Table => {
                let index = position_of(&self.tables, id)
                    .ok_or_else(|| StoreError::TableNotFound(id.to_string()))?;
                swap_with_neighbor(&mut self.tables, index, up)
            }
            LayerKind::Area => {
                let index = position_of(&self.areas, id)
                    .ok_or_else(|| StoreError::AreaNotFound(id.to_string()))?;
                swap_with_neighbor(&mut self.areas, index, up)
            }
            LayerKind::Note => {
                let index = position_of(&self.notes, id)
                    .ok_or_else(|| StoreError::NoteNotFound(id.to_string()))?;
                swap_with_neighbor(&mut self.notes, index, up)
            }
        };

        if moved {
            tracing::debug!(
                "layer moved: {kind} {id} {}",
                if up { "up" } else { "down" }
            );
            self.commit();
        }
        Ok(moved)
    }
}
