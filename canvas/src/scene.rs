//! The scene: every object in z-order, stored in a [`DynArray`].
//!
//! Index order is draw order; later indices are drawn on top. Objects leave
//! the scene only through [`Scene::delete_selected`] (swap-remove compaction
//! followed by a shrink) or [`Scene::clear`].

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use std::ops::{Index, IndexMut};

use serde::Serialize;

use crate::array::DynArray;
use crate::camera::Rect;
use crate::object::{ObjectId, ObjectKind, ResizeMask, SceneObject};

/// Serializable view of one object, for hosts and reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSummary {
    pub id: ObjectId,
    pub kind: ObjectKind,
    pub bounds: Rect,
    pub selected: bool,
}

#[derive(Debug, Default)]
pub struct Scene {
    objects: DynArray<SceneObject>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self { objects: DynArray::new() }
    }

    /// Append an object on top of everything else. Returns its index.
    pub fn push(&mut self, object: SceneObject) -> usize {
        tracing::debug!(id = %object.id, kind = ?object.kind(), "object added");
        self.objects.push_back(object);
        self.objects.len() - 1
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Capacity of the backing array.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.objects.capacity()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SceneObject> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, SceneObject> {
        self.objects.iter_mut()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    #[must_use]
    pub fn last_mut(&mut self) -> Option<&mut SceneObject> {
        self.objects.last_mut()
    }

    /// Look up an object by id.
    #[must_use]
    pub fn find(&self, id: &ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.id == *id)
    }

    /// Number of selected objects.
    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.objects.iter().filter(|o| o.is_selected()).count()
    }

    /// Index of the selected object when exactly one is selected.
    #[must_use]
    pub fn single_selected(&self) -> Option<usize> {
        let mut selected = self.objects.iter().enumerate().filter(|(_, o)| o.is_selected());
        match (selected.next(), selected.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    /// Set or clear the selection flag on every object.
    pub fn select_all(&mut self, value: bool) {
        for object in &mut self.objects {
            object.set_selected(value);
        }
    }

    /// Clear drag and resize flags on every object.
    pub fn reset_interaction(&mut self) {
        for object in &mut self.objects {
            object.state.is_moved = false;
        }
        self.clear_resize_masks();
    }

    /// Disarm every resize handle.
    pub fn clear_resize_masks(&mut self) {
        for object in &mut self.objects {
            object.state.resize = ResizeMask::NONE;
        }
    }

    /// Remove and dispose every selected object, then shrink the array to fit.
    ///
    /// Indices to remove are collected first and applied highest-first, so each
    /// swap-remove only ever pulls in an element that is staying. Survivor
    /// order may change. Returns the number of objects removed.
    pub fn delete_selected(&mut self) -> usize {
        let doomed: Vec<usize> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_selected())
            .map(|(i, _)| i)
            .collect();

        for &index in doomed.iter().rev() {
            self.objects.delete(index).dispose();
        }
        self.objects.shrink_to_fit();
        doomed.len()
    }

    /// Dispose every object and release the array.
    pub fn clear(&mut self) {
        let objects = std::mem::take(&mut self.objects);
        for object in objects {
            object.dispose();
        }
    }

    /// Per-object summaries in z-order.
    #[must_use]
    pub fn summary(&self) -> Vec<ObjectSummary> {
        self.objects
            .iter()
            .map(|o| ObjectSummary { id: o.id, kind: o.kind(), bounds: o.bounding_box(), selected: o.is_selected() })
            .collect()
    }
}

impl Index<usize> for Scene {
    type Output = SceneObject;

    fn index(&self, index: usize) -> &SceneObject {
        &self.objects[index]
    }
}

impl IndexMut<usize> for Scene {
    fn index_mut(&mut self, index: usize) -> &mut SceneObject {
        &mut self.objects[index]
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a SceneObject;
    type IntoIter = std::slice::Iter<'a, SceneObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.objects.iter()
    }
}
