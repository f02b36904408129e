use crate::config::CodewordConfig;
use crate::location::{DatabaseTables, ItemDistribution, LocationTable, StaticLootDetails};
use crate::notes::{is_secret_exfil_map, note_for_map, CacheContainer, ExfilNote, SECRET_EXFIL_MAPS};

/// Sum of every `relativeProbability` in a container's spawn list.
pub fn total_relative_probability(items: &[ItemDistribution]) -> f64 {
    items.iter().map(|item| item.relative_probability).sum()
}

/// Weight for the injected note, given the container's existing total.
///
/// `guess = chance% * total`, then `round(chance% * (total + guess))`, so the
/// weight grows with the square of `chance` rather than linearly. Ties round
/// toward positive infinity, matching the server's own rounding.
pub fn guess_chance_of_spawn(total_probability: f64, chance: f64) -> f64 {
    let fraction = chance / 100.0;
    let guess = fraction * total_probability;
    round_half_up(fraction * (total_probability + guess))
}

// Compares the fraction instead of flooring `value + 0.5`, which rounds
// before the floor for values just under 0.5 and above 2^52.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Append the map's codeword note to `details` with the given weight.
///
/// Returns the appended note, or `None` (and leaves `details` alone) when the
/// map has no note.
pub fn add_codeword_to_cache(
    map_key: &str,
    details: &mut StaticLootDetails,
    weight: f64,
) -> Option<ExfilNote> {
    let note = note_for_map(map_key)?;
    details
        .item_distribution
        .push(ItemDistribution::new(note.tpl(), weight));
    Some(note)
}

#[derive(Debug, Clone, PartialEq)]
pub struct InjectedNote {
    pub map: String,
    pub container: CacheContainer,
    pub note: ExfilNote,
    pub weight: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InjectionReport {
    pub injected: Vec<InjectedNote>,
    /// Allow-listed maps the table did not contain.
    pub missing_maps: Vec<String>,
}

impl InjectionReport {
    /// Map keys that received at least one note, in table order.
    pub fn touched_maps(&self) -> Vec<String> {
        let mut maps: Vec<String> = Vec::new();
        for entry in &self.injected {
            if maps.last() != Some(&entry.map) {
                maps.push(entry.map.clone());
            }
        }
        maps
    }
}

/// Adds codeword notes to the caches and bodies of every map with a
/// secret exfil.
///
/// Running it twice over the same table appends a second note to every
/// touched container; the host only calls it once per process.
#[derive(Debug, Clone)]
pub struct CodewordInjector {
    config: CodewordConfig,
}

impl CodewordInjector {
    pub fn new(config: CodewordConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodewordConfig {
        &self.config
    }

    /// Hook for the host once its database has loaded.
    pub fn post_db_load(&self, tables: &mut DatabaseTables) -> InjectionReport {
        self.inject(&mut tables.locations)
    }

    pub fn inject(&self, locations: &mut LocationTable) -> InjectionReport {
        let mut report = InjectionReport::default();

        for (map_key, location) in locations.iter_mut() {
            if !is_secret_exfil_map(map_key) {
                log::debug!("skipping {map_key}: no secret exfils");
                continue;
            }

            for container in CacheContainer::ALL {
                let Some(details) = location.static_loot.get_mut(container.tpl()) else {
                    log::debug!("{map_key}: no {} in static loot", container.label());
                    continue;
                };

                let total = total_relative_probability(&details.item_distribution);
                let weight = guess_chance_of_spawn(total, self.config.chance);

                if let Some(note) = add_codeword_to_cache(map_key, details, weight) {
                    log::info!(
                        "{} ({}): added {} note to {} with weight {} (existing total {})",
                        map_key,
                        location.base.id,
                        note.name(),
                        container.label(),
                        weight,
                        total
                    );
                    report.injected.push(InjectedNote {
                        map: map_key.clone(),
                        container,
                        note,
                        weight,
                    });
                }
            }
        }

        for map in SECRET_EXFIL_MAPS {
            if !locations.contains_key(*map) {
                log::debug!("{map} is not in the location table");
                report.missing_maps.push((*map).to_string());
            }
        }

        report
    }
}
