use uuid::Uuid;

use crate::catalog::SportCatalog;
use crate::models::draft::{InstanceConfiguration, SportInstance, TournamentDraft};
use crate::tournament::errors::DraftError;

/// Manages the ordered instance list of a single draft.
///
/// The `order` field of every instance always equals its index in
/// `draft.sport_instances`, so orders stay exactly `0..n`.
pub struct SelectionEngine<'a> {
    catalog: &'a SportCatalog,
}

impl<'a> SelectionEngine<'a> {
    pub fn new(catalog: &'a SportCatalog) -> Self {
        Self { catalog }
    }

    /// Append a fresh instance of `sport_id` to the end of the draft.
    ///
    /// The instance gets a copy of the catalog entry, not a reference to it.
    pub fn add_instance(
        &self,
        draft: &mut TournamentDraft,
        sport_id: &str,
    ) -> Result<SportInstance, DraftError> {
        ensure_editable(draft)?;
        let definition = self.catalog.find_by_id(sport_id)?;

        let instance = SportInstance {
            instance_id: fresh_instance_id(draft),
            catalog_snapshot: definition.clone(),
            order: draft.sport_instances.len(),
            configuration: InstanceConfiguration::default(),
        };
        draft.sport_instances.push(instance.clone());
        draft.touch();

        tracing::debug!(
            "Added {} as instance {} at position {} of draft {}",
            sport_id, instance.instance_id, instance.order, draft.id
        );
        Ok(instance)
    }

    /// Remove an instance, closing the gap it leaves.
    pub fn remove_instance(
        &self,
        draft: &mut TournamentDraft,
        instance_id: Uuid,
    ) -> Result<SportInstance, DraftError> {
        ensure_editable(draft)?;
        let position = draft
            .position_of(instance_id)
            .ok_or(DraftError::InstanceNotFound(instance_id))?;

        let removed = draft.sport_instances.remove(position);
        reindex(&mut draft.sport_instances);
        draft.touch();

        tracing::debug!("Removed instance {} from draft {}", instance_id, draft.id);
        Ok(removed)
    }

    /// Move an instance to `target_position`, shifting the others without changing
    /// their relative order.
    pub fn move_instance(
        &self,
        draft: &mut TournamentDraft,
        instance_id: Uuid,
        target_position: usize,
    ) -> Result<(), DraftError> {
        ensure_editable(draft)?;
        let len = draft.sport_instances.len();
        let current = draft
            .position_of(instance_id)
            .ok_or(DraftError::InstanceNotFound(instance_id))?;

        if target_position >= len {
            return Err(DraftError::InvalidPosition {
                position: target_position,
                len,
            });
        }

        let moved = draft.sport_instances.remove(current);
        draft.sport_instances.insert(target_position, moved);
        reindex(&mut draft.sport_instances);
        draft.touch();

        tracing::debug!(
            "Moved instance {} from {} to {} in draft {}",
            instance_id, current, target_position, draft.id
        );
        Ok(())
    }
}

pub(crate) fn ensure_editable(draft: &TournamentDraft) -> Result<(), DraftError> {
    if draft.is_editable() {
        Ok(())
    } else {
        Err(DraftError::DraftLocked(draft.id))
    }
}

fn reindex(instances: &mut [SportInstance]) {
    for (position, instance) in instances.iter_mut().enumerate() {
        instance.order = position;
    }
}

// Unique within the draft.
fn fresh_instance_id(draft: &TournamentDraft) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if draft.instance(id).is_none() {
            return id;
        }
    }
}
