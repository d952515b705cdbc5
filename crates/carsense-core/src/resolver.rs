// ── Entity Resolver ──
//
// Binds semantic roles to concrete registry entities. Runs once per
// widget attachment: one registry listing, then one name lookup per
// matched role, fanned out concurrently (the role count is fixed and
// small). The result is total — every declared role is present, matched
// or placeholder — and is applied downstream in a single atomic
// replacement.

use std::fmt;
use std::hash::Hash;

use futures_util::future::join_all;
use indexmap::IndexMap;
use tracing::{debug, warn};

use carsense_api::{RegistryEntry, RuntimeClient};

use crate::error::CoreError;
use crate::model::{
    EntityId, ResolvedEntity, RoleFilter, TripRole, WarningRole, trip_filters, warning_filters,
};

// ── Registry abstraction ────────────────────────────────────────────

/// The two registry queries the resolver needs. Implemented by
/// [`RuntimeClient`]; tests substitute an in-memory fake.
pub trait EntityRegistry: Sync {
    /// List every entity the runtime knows about.
    fn list_entities(
        &self,
    ) -> impl Future<Output = Result<Vec<RegistryEntry>, carsense_api::Error>> + Send;

    /// The original (integration-given) name of one entity.
    fn original_name(
        &self,
        entity_id: &EntityId,
    ) -> impl Future<Output = Result<Option<String>, carsense_api::Error>> + Send;
}

impl EntityRegistry for RuntimeClient {
    async fn list_entities(&self) -> Result<Vec<RegistryEntry>, carsense_api::Error> {
        self.list_registry_entries().await
    }

    async fn original_name(
        &self,
        entity_id: &EntityId,
    ) -> Result<Option<String>, carsense_api::Error> {
        Ok(self
            .get_registry_entry(entity_id.as_str())
            .await?
            .original_name)
    }
}

// ── Resolved role maps ──────────────────────────────────────────────

/// Both role maps, produced together by [`resolve_all`].
///
/// Held behind a `watch` channel in the store and replaced wholesale, so
/// a concurrent reader never observes a half-populated mapping.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEntities {
    pub warnings: IndexMap<WarningRole, ResolvedEntity>,
    pub trip: IndexMap<TripRole, ResolvedEntity>,
}

impl ResolvedEntities {
    /// Every role present, every role a placeholder. The widget state
    /// before (or without) a successful resolution.
    pub fn empty() -> Self {
        Self {
            warnings: warning_filters()
                .keys()
                .map(|&role| (role, ResolvedEntity::placeholder()))
                .collect(),
            trip: trip_filters()
                .keys()
                .map(|&role| (role, ResolvedEntity::placeholder()))
                .collect(),
        }
    }

    /// The resolution for a warning role (placeholder when absent).
    pub fn warning(&self, role: WarningRole) -> ResolvedEntity {
        self.warnings.get(&role).cloned().unwrap_or_default()
    }

    /// The resolution for a trip role (placeholder when absent).
    pub fn trip(&self, role: TripRole) -> ResolvedEntity {
        self.trip.get(&role).cloned().unwrap_or_default()
    }
}

impl Default for ResolvedEntities {
    fn default() -> Self {
        Self::empty()
    }
}

// ── Resolution ──────────────────────────────────────────────────────

/// Resolve one role-set against the registry.
///
/// Fetches the full registry listing; a listing failure fails the whole
/// resolution and propagates. Everything after that degrades per role:
/// an unknown primary id or an unmatched role yields placeholders, and a
/// failed name lookup keeps the matched identifier with an empty name.
pub async fn resolve<K, R>(
    registry: &R,
    primary: &EntityId,
    filters: &IndexMap<K, RoleFilter>,
) -> Result<IndexMap<K, ResolvedEntity>, CoreError>
where
    K: Copy + Eq + Hash + fmt::Display,
    R: EntityRegistry,
{
    let rows = registry.list_entities().await?;
    Ok(resolve_against(registry, &rows, primary, filters).await)
}

/// Resolve both built-in role-sets with a single registry listing.
pub async fn resolve_all<R>(
    registry: &R,
    primary: &EntityId,
) -> Result<ResolvedEntities, CoreError>
where
    R: EntityRegistry,
{
    let rows = registry.list_entities().await?;

    let warning_filters = warning_filters();
    let trip_filters = trip_filters();
    let (warnings, trip) = futures_util::join!(
        resolve_against(registry, &rows, primary, &warning_filters),
        resolve_against(registry, &rows, primary, &trip_filters),
    );

    Ok(ResolvedEntities { warnings, trip })
}

/// Match every role in `filters` against the device siblings of
/// `primary`, then fetch original names for the matches concurrently.
async fn resolve_against<K, R>(
    registry: &R,
    rows: &[RegistryEntry],
    primary: &EntityId,
    filters: &IndexMap<K, RoleFilter>,
) -> IndexMap<K, ResolvedEntity>
where
    K: Copy + Eq + Hash + fmt::Display,
    R: EntityRegistry,
{
    let Some(primary_row) = rows.iter().find(|row| row.entity_id == primary.as_str()) else {
        debug!(primary = %primary, "primary entity not in registry; resolving to placeholders");
        return filters
            .keys()
            .map(|&role| (role, ResolvedEntity::placeholder()))
            .collect();
    };

    let siblings: Vec<&RegistryEntry> = rows
        .iter()
        .filter(|row| row.device_id == primary_row.device_id)
        .collect();

    let lookups = filters.iter().map(|(&role, filter)| {
        let mut matches = siblings.iter().filter(|row| filter.matches(&row.entity_id));
        let first = matches.next().map(|row| EntityId::from(row.entity_id.as_str()));
        let remaining = matches.count();
        if remaining > 0 {
            // Registry order is not guaranteed stable; which row wins here
            // is up to the runtime.
            debug!(role = %role, extra = remaining, "multiple registry rows match role; taking first");
        }

        async move {
            let Some(entity_id) = first else {
                return (role, ResolvedEntity::placeholder());
            };
            let original_name = match registry.original_name(&entity_id).await {
                Ok(name) => name.unwrap_or_default(),
                Err(e) => {
                    warn!(role = %role, entity_id = %entity_id, error = %e, "name lookup failed");
                    String::new()
                }
            };
            (role, ResolvedEntity::new(entity_id, original_name))
        }
    });

    join_all(lookups).await.into_iter().collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::{HashMap, HashSet};

    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    /// In-memory registry double. `names` maps entity ids to original
    /// names; ids in `fail_names` error on the detail lookup.
    struct FakeRegistry {
        rows: Vec<RegistryEntry>,
        names: HashMap<String, String>,
        fail_listing: bool,
        fail_names: HashSet<String>,
    }

    impl FakeRegistry {
        fn new(rows: Vec<(&str, Option<&str>)>) -> Self {
            Self {
                rows: rows
                    .into_iter()
                    .map(|(id, device)| RegistryEntry {
                        entity_id: id.to_owned(),
                        device_id: device.map(str::to_owned),
                    })
                    .collect(),
                names: HashMap::new(),
                fail_listing: false,
                fail_names: HashSet::new(),
            }
        }

        fn with_name(mut self, id: &str, name: &str) -> Self {
            self.names.insert(id.to_owned(), name.to_owned());
            self
        }
    }

    impl EntityRegistry for FakeRegistry {
        async fn list_entities(&self) -> Result<Vec<RegistryEntry>, carsense_api::Error> {
            if self.fail_listing {
                return Err(carsense_api::Error::Api {
                    status: 500,
                    message: "registry down".into(),
                });
            }
            Ok(self.rows.clone())
        }

        async fn original_name(
            &self,
            entity_id: &EntityId,
        ) -> Result<Option<String>, carsense_api::Error> {
            if self.fail_names.contains(entity_id.as_str()) {
                return Err(carsense_api::Error::Api {
                    status: 500,
                    message: "lookup failed".into(),
                });
            }
            Ok(self.names.get(entity_id.as_str()).cloned())
        }
    }

    fn car_registry() -> FakeRegistry {
        FakeRegistry::new(vec![
            ("sensor.car_odometer", Some("dev-1")),
            ("sensor.car_fuellevel", Some("dev-1")),
            ("lock.car_lock", Some("dev-1")),
            ("binary_sensor.car_parkbrakestatus", Some("dev-1")),
            // Same suffix pattern, different device — must not match.
            ("sensor.other_fuellevel", Some("dev-2")),
            ("light.kitchen", Some("dev-9")),
        ])
        .with_name("sensor.car_odometer", "Odometer")
        .with_name("sensor.car_fuellevel", "Fuel Level")
        .with_name("lock.car_lock", "Lock")
        .with_name("binary_sensor.car_parkbrakestatus", "Park Brake")
    }

    // The primary id used by every test; it has to be a registry row
    // itself, so the resolver treats the odometer sensor as the anchor.
    fn primary() -> EntityId {
        EntityId::from("sensor.car_odometer")
    }

    #[tokio::test]
    async fn every_role_key_is_present() {
        let registry = car_registry();

        let resolved = resolve_all(&registry, &primary()).await.unwrap();

        assert_eq!(resolved.warnings.len(), WarningRole::iter().count());
        assert_eq!(resolved.trip.len(), TripRole::iter().count());
    }

    #[tokio::test]
    async fn matched_roles_carry_id_and_name() {
        let registry = car_registry();

        let resolved = resolve_all(&registry, &primary()).await.unwrap();

        let fuel = resolved.trip(TripRole::FuelLevel);
        assert_eq!(fuel.entity_id.as_str(), "sensor.car_fuellevel");
        assert_eq!(fuel.original_name, "Fuel Level");

        let lock = resolved.warning(WarningRole::Lock);
        assert_eq!(lock.entity_id.as_str(), "lock.car_lock");
    }

    #[tokio::test]
    async fn unmatched_roles_resolve_to_placeholder() {
        let registry = car_registry();

        let resolved = resolve_all(&registry, &primary()).await.unwrap();

        // No tyre-pressure sensors in the fake registry.
        let tyre = resolved.trip(TripRole::TirePressureFrontLeft);
        assert_eq!(tyre, ResolvedEntity::placeholder());
    }

    #[tokio::test]
    async fn unknown_primary_resolves_everything_to_placeholders() {
        let registry = car_registry();

        let resolved = resolve_all(&registry, &EntityId::from("sensor.not_there"))
            .await
            .unwrap();

        assert!(resolved.trip.values().all(|e| !e.is_resolved()));
        assert!(resolved.warnings.values().all(|e| !e.is_resolved()));
    }

    #[tokio::test]
    async fn sibling_filter_excludes_other_devices() {
        let registry = car_registry();

        let resolved = resolve_all(&registry, &primary()).await.unwrap();

        // sensor.other_fuellevel matches the FuelLevel pattern but belongs
        // to dev-2.
        assert_eq!(
            resolved.trip(TripRole::FuelLevel).entity_id.as_str(),
            "sensor.car_fuellevel"
        );
    }

    #[tokio::test]
    async fn first_registry_match_wins() {
        let registry = FakeRegistry::new(vec![
            ("sensor.car_odometer", Some("dev-1")),
            ("sensor.car_a_fuellevel", Some("dev-1")),
            ("sensor.car_b_fuellevel", Some("dev-1")),
        ])
        .with_name("sensor.car_a_fuellevel", "Fuel A")
        .with_name("sensor.car_b_fuellevel", "Fuel B");

        let resolved = resolve(&registry, &primary(), &trip_filters())
            .await
            .unwrap();

        assert_eq!(
            resolved.get(&TripRole::FuelLevel).unwrap().entity_id.as_str(),
            "sensor.car_a_fuellevel"
        );
    }

    #[tokio::test]
    async fn listing_failure_propagates() {
        let mut registry = car_registry();
        registry.fail_listing = true;

        let result = resolve_all(&registry, &primary()).await;

        assert!(matches!(result, Err(CoreError::Registry(_))));
    }

    #[tokio::test]
    async fn name_lookup_failure_degrades_only_that_role() {
        let mut registry = car_registry();
        registry.fail_names.insert("sensor.car_fuellevel".to_owned());

        let resolved = resolve_all(&registry, &primary()).await.unwrap();

        // The failed role keeps its identifier, loses its name.
        let fuel = resolved.trip(TripRole::FuelLevel);
        assert_eq!(fuel.entity_id.as_str(), "sensor.car_fuellevel");
        assert_eq!(fuel.original_name, "");

        // Other roles are unaffected.
        assert_eq!(resolved.trip(TripRole::Odometer).original_name, "Odometer");
    }

    #[tokio::test]
    async fn missing_original_name_resolves_to_empty_string() {
        let registry = FakeRegistry::new(vec![
            ("sensor.car_odometer", Some("dev-1")),
            ("sensor.car_soc", Some("dev-1")),
        ]);

        let resolved = resolve_all(&registry, &primary()).await.unwrap();

        let soc = resolved.trip(TripRole::Soc);
        assert!(soc.is_resolved());
        assert_eq!(soc.original_name, "");
    }
}
